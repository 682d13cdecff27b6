//! Plain-text rendering of the list, change notifications, and outcomes.

use std::io::{self, Write};

use consumables_domain::event::{ItemEvent, RemovalReason};
use consumables_domain::id::ItemId;
use consumables_domain::item::Item;
use consumables_domain::item_list::AdjustOutcome;
use consumables_domain::tracking::TrackingMode;

pub const TITLE: &str = "Consumable Notes";

pub const HELP: &str = "\
commands:
  add <name> [x<qty>] [| <notes>]   add an item (\\n in notes starts a new line)
  rm <id>                           delete an item
  + <id> / - <id>                   add or use up one unit
  adj <id> <delta>                  change the quantity by <delta>
  ls                                show the list
  json                              print the list as JSON
  quit                              leave (the list is not kept)";

/// Write the item list, one entry per item with its notes indented below.
///
/// # Errors
///
/// Propagates write failures.
pub fn list(out: &mut impl Write, items: &[Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (no items yet, try `add <name>`)");
    }
    for item in items {
        match item.quantity() {
            Some(quantity) => writeln!(out, "  #{} {}  x{quantity}", item.id(), item.name())?,
            None => writeln!(out, "  #{} {}", item.id(), item.name())?,
        }
        for line in item.notes().lines().filter(|line| !line.trim().is_empty()) {
            writeln!(out, "      {line}")?;
        }
    }
    Ok(())
}

/// One-line description of a change.
#[must_use]
pub fn event(event: &ItemEvent) -> String {
    match event {
        ItemEvent::Added { item } => format!("added #{} {}", item.id(), item.name()),
        ItemEvent::Removed {
            id,
            name,
            reason: RemovalReason::Deleted,
        } => format!("deleted #{id} {name}"),
        ItemEvent::Removed {
            id,
            name,
            reason: RemovalReason::Depleted,
        } => format!("#{id} {name} used up, removed from the list"),
        ItemEvent::QuantityChanged { id, from, to } => format!("#{id} quantity {from} -> {to}"),
    }
}

/// Feedback for adjustments that changed nothing. Changes are reported
/// through their events instead.
#[must_use]
pub fn unchanged(id: ItemId, outcome: AdjustOutcome, mode: TrackingMode) -> Option<String> {
    match outcome {
        AdjustOutcome::NotFound => Some(not_found(id)),
        AdjustOutcome::Untracked => Some(format!("this list is in {mode} mode and has no quantities")),
        AdjustOutcome::Removed | AdjustOutcome::Updated(_) => None,
    }
}

#[must_use]
pub fn not_found(id: ItemId) -> String {
    format!("no item #{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use consumables_domain::quantity::Quantity;

    fn render(items: &[Item]) -> String {
        let mut out = Vec::new();
        list(&mut out, items).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn item(id: u64, name: &str, notes: &str, quantity: Option<i64>) -> Item {
        let mut builder = Item::builder(ItemId::from_raw(id)).name(name).notes(notes);
        if let Some(q) = quantity {
            builder = builder.quantity(Quantity::coerce(q));
        }
        builder.build().unwrap()
    }

    #[test]
    fn should_render_placeholder_for_empty_list() {
        assert!(render(&[]).contains("no items yet"));
    }

    #[test]
    fn should_render_quantity_when_tracked() {
        let text = render(&[item(1, "Paper Towels", "", Some(3))]);
        assert_eq!(text, "  #1 Paper Towels  x3\n");
    }

    #[test]
    fn should_render_name_only_without_quantity() {
        let text = render(&[item(2, "Ink", "", None)]);
        assert_eq!(text, "  #2 Ink\n");
    }

    #[test]
    fn should_indent_each_non_blank_notes_line() {
        let text = render(&[item(1, "Tea", "green\n\nloose leaf", None)]);
        assert_eq!(text, "  #1 Tea\n      green\n      loose leaf\n");
    }

    #[test]
    fn should_describe_each_event() {
        let id = ItemId::from_raw(4);
        assert_eq!(
            event(&ItemEvent::Added {
                item: item(4, "Soap", "", None)
            }),
            "added #4 Soap"
        );
        assert_eq!(
            event(&ItemEvent::Removed {
                id,
                name: "Soap".to_string(),
                reason: RemovalReason::Deleted,
            }),
            "deleted #4 Soap"
        );
        assert_eq!(
            event(&ItemEvent::Removed {
                id,
                name: "Soap".to_string(),
                reason: RemovalReason::Depleted,
            }),
            "#4 Soap used up, removed from the list"
        );
        assert_eq!(
            event(&ItemEvent::QuantityChanged {
                id,
                from: Quantity::coerce(2),
                to: Quantity::ONE,
            }),
            "#4 quantity 2 -> 1"
        );
    }

    #[test]
    fn should_explain_unchanged_outcomes_only() {
        let id = ItemId::from_raw(9);
        assert_eq!(
            unchanged(id, AdjustOutcome::NotFound, TrackingMode::Quantity).as_deref(),
            Some("no item #9")
        );
        assert!(unchanged(id, AdjustOutcome::Untracked, TrackingMode::Notes).is_some());
        assert!(unchanged(id, AdjustOutcome::Removed, TrackingMode::Quantity).is_none());
    }
}
