use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command: its name, extra spellings, help text, and handler.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            summary,
            usage,
            handler,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.iter().any(|alias| *alias == word)
    }
}

/// Commands in the order they were registered; lookups match names and aliases.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn from_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Adds `entry`, replacing an earlier command of the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|known| known.name == entry.name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, word: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(word))
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Every word the shell accepts, aliases included.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.name).chain(entry.aliases.iter().copied()))
    }

    pub fn handler(&self, word: &str) -> Option<CommandHandler> {
        self.get(word).map(|entry| entry.handler)
    }
}
