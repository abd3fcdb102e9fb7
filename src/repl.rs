// repl.rs

use std::io::{self, Write};

use anyhow::Context as _;
use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::{debug, error, info};

use crate::commands::Outcome;
use crate::completion::CommandCompleter;
use crate::parser::parse_line;
use crate::registry::{CommandRegistry, Dispatch};
use crate::util::{format_number, writeln_ignore_broken_pipe};

pub const PROMPT: &str = "> ";
pub const BANNER: &str = "Calculator CLI - Type 'quit' to exit OR 'menu' to list commands";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one input line against the registry and prints what happened.
pub fn dispatch_line<W: Write>(registry: &CommandRegistry, line: &str, out: &mut W) -> io::Result<Flow> {
    let Some(invocation) = parse_line(line) else {
        return Ok(Flow::Continue);
    };
    debug!(name = %invocation.name, args = ?invocation.args, "dispatching");
    let text = match registry.execute(&invocation.name, &invocation.args) {
        Dispatch::Unknown(name) => format!("No such command: {}", name),
        Dispatch::Failed(message) => format!("Error: {}", message),
        Dispatch::Done(Outcome::Value(n)) => format!("Result: {}", format_number(n)),
        Dispatch::Done(Outcome::Message(message)) => message,
        Dispatch::Done(Outcome::Warning(message)) => format!("Warning: {}", message),
        Dispatch::Done(Outcome::Menu) => {
            format!("Available commands: {}", registry.names().iter().join(", "))
        }
        Dispatch::Done(Outcome::Quit) => {
            writeln_ignore_broken_pipe(&mut *out, "Goodbye!")?;
            out.flush()?;
            return Ok(Flow::Quit);
        }
    };
    writeln_ignore_broken_pipe(&mut *out, text)?;
    Ok(Flow::Continue)
}

pub fn start_repl(registry: CommandRegistry) -> anyhow::Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new(registry.names())));

    info!("application started");
    writeln_ignore_broken_pipe(io::stdout(), BANNER)?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                let mut stdout = io::stdout().lock();
                if dispatch_line(&registry, &line, &mut stdout)? == Flow::Quit {
                    std::process::exit(0);
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                info!("input closed");
                break;
            }
            Err(err) => {
                error!("readline failed: {err}");
                return Err(err).context("failed to read input");
            }
        }
    }
    Ok(())
}
