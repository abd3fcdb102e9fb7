mod commands;
mod completion;
mod config;
mod error;
mod history;
mod logging;
mod parser;
mod registry;
mod repl;
mod util;

use config::Settings;
use history::HistoryStore;

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    logging::init_logging(&settings)?;
    tracing::info!(?settings, "settings loaded");

    let history = HistoryStore::open(&settings.history_file).shared();
    tracing::info!(
        path = %history.borrow().path().display(),
        records = history.borrow().len(),
        "history store ready"
    );
    let registry = registry::builtin_registry(&history);
    repl::start_repl(registry)
}
