//! Prompt loop — reads commands, runs them against the store, re-renders.

use std::io::{self, BufRead, Write};

use consumables_app::event_bus::InProcessEventBus;
use consumables_app::services::item_store::ItemStore;
use consumables_domain::event::ItemEvent;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::command::Command;
use crate::render;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over one [`ItemStore`].
pub struct Repl<'a> {
    store: &'a ItemStore<InProcessEventBus>,
    events: broadcast::Receiver<ItemEvent>,
}

impl<'a> Repl<'a> {
    /// Attach to `store`, subscribing to its change notifications.
    #[must_use]
    pub fn new(store: &'a ItemStore<InProcessEventBus>) -> Self {
        let events = store.publisher().subscribe();
        Self { store, events }
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Propagates read and write failures.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{} ({} mode), type `help` for commands", render::TITLE, self.store.mode())?;
        prompt(&mut out)?;
        for line in input.lines() {
            if self.handle(&line?, &mut out)? == Flow::Quit {
                break;
            }
            prompt(&mut out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                tracing::debug!(error = %err, line, "unparseable input");
                writeln!(out, "error: {err}")?;
                return Ok(Flow::Continue);
            }
        };

        let mutates = command.mutates();
        match command {
            Command::Add {
                name,
                notes,
                quantity,
            } => {
                if let Err(err) = self.store.add(&name, &notes, quantity) {
                    writeln!(out, "not added: {err}")?;
                }
            }
            Command::Remove(id) => {
                if !self.store.remove(id) {
                    writeln!(out, "{}", render::not_found(id))?;
                }
            }
            Command::Adjust { id, delta } => {
                let outcome = self.store.adjust_quantity(id, delta);
                if let Some(message) = render::unchanged(id, outcome, self.store.mode()) {
                    writeln!(out, "{message}")?;
                }
            }
            Command::List => render::list(out, &self.store.snapshot())?,
            Command::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.store.snapshot())?;
                writeln!(out)?;
            }
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        if mutates && self.drain_events(out)? {
            render::list(out, &self.store.snapshot())?;
        }
        Ok(Flow::Continue)
    }

    /// Print pending change notifications. Returns whether there were any.
    fn drain_events(&mut self, out: &mut impl Write) -> io::Result<bool> {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    changed = true;
                    writeln!(out, "{}", render::event(&event))?;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    changed = true;
                    tracing::warn!(skipped, "change notifications dropped");
                    writeln!(out, "({skipped} earlier changes not shown)")?;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(changed),
            }
        }
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
