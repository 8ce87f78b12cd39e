use crate::cli::core::{parse_date, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_currency_value, format_date};
use crate::report;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show budget totals and spending by category",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "daily",
            "Show spending for one day",
            "daily [date YYYY-MM-DD]",
            cmd_daily,
        ),
        CommandEntry::new(
            "chart",
            "Show spending by category as a chart",
            "chart",
            cmd_chart,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let budget = context.require_budget()?;
    let symbol = context.symbol();
    let Some(summary) = context.ledger.budget_summary() else {
        return Ok(());
    };

    output::section(format!(
        "{} ({} - {})",
        budget.name,
        format_date(budget.start_date),
        format_date(budget.end_date)
    ));
    output::lines([
        format!("Total Budget: {}", format_currency_value(summary.total_budget, symbol)),
        format!("Total Spent:  {}", format_currency_value(summary.total_spent, symbol)),
        format!("Remaining:    {}", format_currency_value(summary.remaining, symbol)),
        format!("Added Money:  {}", format_currency_value(summary.added_money, symbol)),
    ]);

    let biggest = context.ledger.biggest_expense();
    output::section("Spending by Category");
    for entry in context.ledger.category_breakdown() {
        let highlight = biggest
            .as_ref()
            .is_some_and(|top| top.category == entry.category);
        let line = report::category_line(&entry, symbol, highlight);
        if highlight {
            println!("{}", output::emphasize(&line));
        } else {
            println!("{}", line);
        }
    }

    let transit = &budget.categories.transit;
    if transit.trips > 0 {
        output::info(format!(
            "Transit trips: {} (saved {})",
            transit.trips,
            format_currency_value(transit.saved, symbol)
        ));
    }
    output::info(format!(
        "Biggest expense: {}",
        report::biggest_expense_text(biggest.as_ref(), symbol)
    ));
    Ok(())
}

fn cmd_daily(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_budget()?;
    let date = match args.first() {
        Some(raw) => parse_date(raw)?,
        None => context.ledger.today(),
    };
    let daily = context.ledger.daily_spending(date);
    output::section(format!("Daily Summary - {}", format_date(date)));
    output::lines(report::daily_summary_text(&daily, context.symbol()).lines());
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_budget()?;
    let chart = context.ledger.spending_chart();
    output::section("Spending Chart");
    if chart.is_empty() {
        output::info("No expenses yet");
        return Ok(());
    }
    output::lines(chart.render_bars(context.symbol()));
    Ok(())
}
