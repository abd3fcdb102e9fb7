// commands.rs

use itertools::Itertools;
use tracing::{error, info, warn};

use crate::error::CommandError;
use crate::history::SharedHistory;
use crate::util::format_number;

/// What a command produced, before the prompt turns it into text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Message(String),
    Warning(String),
    /// List the registered commands; the registry owns the names.
    Menu,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Arithmetic {
    pub fn operation(self) -> &'static str {
        match self {
            Arithmetic::Add => "Addition",
            Arithmetic::Subtract => "Subtraction",
            Arithmetic::Multiply => "Multiplication",
            Arithmetic::Divide => "Division",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Arithmetic::Add => "+",
            Arithmetic::Subtract => "-",
            Arithmetic::Multiply => "*",
            Arithmetic::Divide => "/",
        }
    }

    /// Left fold over `numbers` in argument order.
    pub fn apply(self, numbers: &[f64]) -> Result<f64, CommandError> {
        match self {
            Arithmetic::Add => Ok(numbers.iter().fold(0.0, |acc, n| acc + n)),
            Arithmetic::Multiply => match numbers.split_first() {
                None => Err(CommandError::NoNumbers),
                Some((first, rest)) => Ok(rest.iter().fold(*first, |acc, n| acc * n)),
            },
            Arithmetic::Subtract => match numbers {
                [first, rest @ ..] if !rest.is_empty() => {
                    Ok(rest.iter().fold(*first, |acc, n| acc - n))
                }
                _ => Err(CommandError::TooFewArguments { operation: "Subtraction" }),
            },
            Arithmetic::Divide => match numbers {
                [first, rest @ ..] if !rest.is_empty() => {
                    rest.iter().try_fold(*first, |acc, n| {
                        if *n == 0.0 {
                            Err(CommandError::DivisionByZero)
                        } else {
                            Ok(acc / n)
                        }
                    })
                }
                _ => Err(CommandError::TooFewArguments { operation: "Division" }),
            },
        }
    }

    pub fn render(self, numbers: &[f64]) -> String {
        numbers
            .iter()
            .map(|n| format_number(*n))
            .join(&format!(" {} ", self.symbol()))
    }
}

/// Every command the calculator knows. Arithmetic commands record into the
/// history when they carry a handle to it.
#[derive(Clone, Debug)]
pub enum Command {
    Arithmetic(Arithmetic, Option<SharedHistory>),
    ClearHistory(SharedHistory),
    DeleteRecord(SharedHistory),
    ShowHistory(SharedHistory),
    Menu,
    Quit,
}

impl Command {
    pub fn execute(&self, args: &[String]) -> Result<Outcome, CommandError> {
        match self {
            Command::Arithmetic(op, history) => {
                let numbers = parse_numbers(args).inspect_err(|e| {
                    error!(operation = op.operation(), "command failed: {e}");
                })?;
                let result = op.apply(&numbers).inspect_err(|e| {
                    error!(operation = op.operation(), "command failed: {e}");
                })?;
                if let Some(history) = history {
                    history
                        .borrow_mut()
                        .add_record(op.operation(), &op.render(&numbers), result);
                }
                Ok(Outcome::Value(result))
            }
            Command::ClearHistory(history) => {
                if !args.is_empty() {
                    warn!(?args, "clear takes no arguments");
                    return Ok(Outcome::Warning(
                        "The clear command does not require any arguments.".to_string(),
                    ));
                }
                history.borrow_mut().clear();
                Ok(Outcome::Message("History cleared successfully.".to_string()))
            }
            Command::DeleteRecord(history) => {
                let [arg] = args else {
                    warn!(?args, "delete requires exactly one argument");
                    return Err(CommandError::DeleteArity);
                };
                let index: i64 = arg
                    .parse()
                    .map_err(|_| CommandError::InvalidIndex(arg.clone()))?;
                let deleted = usize::try_from(index)
                    .map(|i| history.borrow_mut().delete_record(i))
                    .unwrap_or(false);
                if !deleted {
                    return Err(CommandError::NoSuchRecord(index));
                }
                info!(index, "record deleted");
                Ok(Outcome::Message(format!("Record at index {index} deleted successfully.")))
            }
            Command::ShowHistory(history) => Ok(Outcome::Message(history.borrow().render())),
            Command::Menu => Ok(Outcome::Menu),
            Command::Quit => {
                info!("quit requested");
                Ok(Outcome::Quit)
            }
        }
    }
}

fn parse_numbers(args: &[String]) -> Result<Vec<f64>, CommandError> {
    args.iter()
        .map(|a| a.parse::<f64>().map_err(|_| CommandError::NotANumber(a.clone())))
        .collect()
}
