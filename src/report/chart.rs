//! Pie-chart series for spending by category.

use serde::Serialize;

use crate::currency::format_currency_value;
use crate::ledger::{Category, CategoryBreakdown};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: Category,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    /// Rounded share of the chart total, 0 when nothing was spent.
    pub percentage: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpendingChart {
    pub slices: Vec<ChartSlice>,
}

impl SpendingChart {
    pub fn from_breakdown(breakdown: &[CategoryBreakdown]) -> Self {
        let total: f64 = breakdown.iter().map(|entry| entry.spent).sum();
        let slices = breakdown
            .iter()
            .map(|entry| ChartSlice {
                category: entry.category,
                label: entry.category.label(),
                value: entry.spent,
                color: entry.category.color(),
                percentage: if total > 0.0 {
                    (entry.spent / total * 100.0).round() as u32
                } else {
                    0
                },
            })
            .collect();
        Self { slices }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// One text bar per slice, scaled to the largest slice.
    pub fn render_bars(&self, symbol: &str) -> Vec<String> {
        let max = self
            .slices
            .iter()
            .map(|slice| slice.value)
            .fold(0.0_f64, f64::max);
        self.slices
            .iter()
            .map(|slice| {
                let width = if max > 0.0 {
                    ((slice.value / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                format!(
                    "{:<14} {:<width$} {}",
                    slice.label,
                    "#".repeat(width),
                    tooltip(slice, symbol),
                    width = BAR_WIDTH
                )
            })
            .collect()
    }
}

/// Tooltip text, e.g. `Food: ₱60.00 (75%)`.
pub fn tooltip(slice: &ChartSlice, symbol: &str) -> String {
    format!(
        "{}: {} ({}%)",
        slice.label,
        format_currency_value(slice.value, symbol),
        slice.percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: Category, spent: f64) -> CategoryBreakdown {
        CategoryBreakdown {
            category,
            spent,
            budget: 100.0,
            remaining: 100.0 - spent,
            percentage: 0.0,
        }
    }

    #[test]
    fn slices_follow_breakdown_order_with_colors() {
        let chart = SpendingChart::from_breakdown(&[
            entry(Category::Transportation, 0.0),
            entry(Category::Food, 60.0),
            entry(Category::Transit, 20.0),
        ]);

        let colors: Vec<_> = chart.slices.iter().map(|slice| slice.color).collect();
        assert_eq!(colors, vec!["#4f46e5", "#10b981", "#f59e0b"]);
        assert_eq!(chart.slices[1].percentage, 75);
        assert_eq!(chart.slices[2].percentage, 25);
        assert_eq!(tooltip(&chart.slices[1], "₱"), "Food: ₱60.00 (75%)");
        assert_eq!(chart.total(), 80.0);
    }

    #[test]
    fn empty_spending_yields_zero_percentages() {
        let chart = SpendingChart::from_breakdown(&[entry(Category::Food, 0.0)]);
        assert!(chart.is_empty());
        assert_eq!(chart.slices[0].percentage, 0);
        assert!(chart.render_bars("₱")[0].contains("(0%)"));
    }
}
