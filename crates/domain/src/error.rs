//! Common error types used across the workspace.
//!
//! A missing item is never an error here: `remove` reports it with a `bool`
//! and quantity adjustment with [`AdjustOutcome::NotFound`](crate::item_list::AdjustOutcome).

/// Domain invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The item name is empty once surrounding whitespace is trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// A quantity of zero was supplied where a positive count is required.
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_empty_name() {
        assert_eq!(ValidationError::EmptyName.to_string(), "name must not be empty");
    }

    #[test]
    fn should_describe_zero_quantity() {
        assert_eq!(
            ValidationError::ZeroQuantity.to_string(),
            "quantity must be greater than zero"
        );
    }
}
