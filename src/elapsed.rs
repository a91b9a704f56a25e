//! Elapsed-day computation over a weekday span.

use crate::weekday::Weekday;

/// Counts the number of days elapsed in a daily span from `from` to
/// `to`, not counting the start day.
///
/// Only 2 days elapse from Monday to Wednesday: Monday itself is
/// excluded, Wednesday is included. Equivalent to
/// [`Weekday::days_until`]; the separate name documents the span
/// reading.
///
/// # Examples
///
/// ```
/// use weekdays::{count_elapsed, Weekday};
///
/// assert_eq!(count_elapsed(Weekday::Monday, Weekday::Wednesday), 2);
/// assert_eq!(count_elapsed(Weekday::Monday, Weekday::Monday), 0);
/// ```
pub fn count_elapsed(from: Weekday, to: Weekday) -> u8 {
    from.days_until(to)
}
