// registry.rs

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::commands::{Arithmetic, Command, Outcome};
use crate::history::SharedHistory;

/// Result of dispatching one command name.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Unknown(String),
    Done(Outcome),
    Failed(String),
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are case-insensitive; registering a name again replaces it.
    pub fn register(&mut self, name: &str, command: Command) {
        let name = name.to_lowercase();
        if self.commands.insert(name.clone(), command).is_some() {
            debug!(name = %name, "command re-registered");
        } else {
            debug!(name = %name, "command registered");
        }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn execute(&self, name: &str, args: &[String]) -> Dispatch {
        let key = name.to_lowercase();
        let Some(command) = self.commands.get(&key) else {
            warn!(name, "unknown command attempted");
            return Dispatch::Unknown(name.to_string());
        };
        match command.execute(args) {
            Ok(outcome) => {
                info!(name = %key, ?args, "command executed");
                Dispatch::Done(outcome)
            }
            Err(e) => {
                error!(name = %key, ?args, "error executing command: {e}");
                Dispatch::Failed(e.to_string())
            }
        }
    }
}

/// The fixed registration table. New commands get an entry here.
pub fn builtin_registry(history: &SharedHistory) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for (name, op) in [
        ("add", Arithmetic::Add),
        ("subtract", Arithmetic::Subtract),
        ("multiply", Arithmetic::Multiply),
        ("divide", Arithmetic::Divide),
    ] {
        registry.register(name, Command::Arithmetic(op, Some(history.clone())));
    }
    registry.register("clear", Command::ClearHistory(history.clone()));
    registry.register("delete", Command::DeleteRecord(history.clone()));
    registry.register("history", Command::ShowHistory(history.clone()));
    registry.register("menu", Command::Menu);
    registry.register("quit", Command::Quit);
    info!(count = registry.commands.len(), "commands registered");
    registry
}
