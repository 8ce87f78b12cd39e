use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    output::lines(
        registry
            .list()
            .iter()
            .map(|entry| format!("  {:<12} {}", entry.name, entry.summary)),
    );
    output::hint("Type `help <command>` for usage.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(entry.name);
    output::lines([
        format!("  {}", entry.summary),
        format!("  usage: {}", entry.usage),
    ]);
    if !entry.aliases.is_empty() {
        output::lines([format!("  also: {}", entry.aliases.join(", "))]);
    }
}
