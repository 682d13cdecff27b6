//! # consumable-notes
//!
//! Composition root that wires the item store to the terminal prompt.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging (stderr, so it never mixes with the rendered list)
//! - Construct the event bus and the session's item store
//! - Run the prompt on stdin/stdout until `quit` or end of input
//!
//! The list lives only as long as the process.

use anyhow::Context;
use consumable_notes::config::Config;
use consumable_notes::repl::Repl;
use consumables_app::event_bus::InProcessEventBus;
use consumables_app::services::item_store::ItemStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter `{}`", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = ItemStore::new(
        config.store.mode,
        InProcessEventBus::new(config.events.capacity),
    );
    tracing::info!(mode = %store.mode(), "session started");

    Repl::new(&store).run(std::io::stdin().lock(), std::io::stdout().lock())?;

    tracing::info!(remaining = store.len(), "session ended, list discarded");
    Ok(())
}
