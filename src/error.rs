//! Error types for the weekdays crate.

/// Error type for all fallible operations in the weekdays crate.
///
/// This enum covers validation failures when parsing a weekday from
/// its display name and when constructing a weekday from an ordinal
/// position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekdayError {
    /// Returned when the name given to `from_name` is empty.
    #[error("day name must not be empty")]
    EmptyName,

    /// Returned when a non-empty name matches none of the seven day
    /// names. Matching is case-sensitive, so `"monday"` is unknown.
    #[error("unknown day name: {name:?}")]
    UnknownName {
        /// The name that matched no weekday.
        name: String,
    },

    /// Returned when an ordinal is outside the valid range 0..=6.
    #[error("invalid weekday ordinal: {ordinal} (must be 0..=6)")]
    InvalidOrdinal {
        /// The invalid ordinal value that was provided.
        ordinal: u8,
    },
}
