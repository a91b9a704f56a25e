//! The `Weekday` enum: ordinals, names, parsing, and cyclic stepping.

use std::fmt;
use std::str::FromStr;

use crate::error::WeekdayError;

/// A day of the week.
///
/// The seven values form a closed cyclic set ordered Sunday = 0
/// through Saturday = 6. The discriminant is the ordinal, so
/// `Weekday::Sunday as u8 == 0`.
///
/// The week is a cycle (Sunday is both one day after Saturday and six
/// days before it), so this type deliberately implements neither
/// `Ord` nor `PartialOrd`. Use [`Weekday::days_until`] for forward
/// cyclic distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday, ordinal 0.
    Sunday = 0,
    /// Monday, ordinal 1.
    Monday = 1,
    /// Tuesday, ordinal 2.
    Tuesday = 2,
    /// Wednesday, ordinal 3.
    Wednesday = 3,
    /// Thursday, ordinal 4.
    Thursday = 4,
    /// Friday, ordinal 5.
    Friday = 5,
    /// Saturday, ordinal 6.
    Saturday = 6,
}

impl Weekday {
    /// All seven days in ordinal order, Sunday through Saturday.
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns an iterator over all seven days in ordinal order.
    ///
    /// Each call yields a fresh traversal; the iterator is finite and
    /// has no hidden state beyond its position in [`Weekday::ALL`].
    pub fn values() -> impl Iterator<Item = Weekday> {
        Self::ALL.iter().copied()
    }

    /// Returns the display name of this day (`"Sunday"`, `"Monday"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Returns the ordinal of this day (0..=6, Sunday = 0).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Creates a `Weekday` from its ordinal position.
    ///
    /// # Errors
    ///
    /// Returns [`WeekdayError::InvalidOrdinal`] if `ordinal` is not in 0..=6.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, WeekdayError> {
        match ordinal {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(WeekdayError::InvalidOrdinal { ordinal }),
        }
    }

    /// Creates a `Weekday` from its display name.
    ///
    /// Matching is exact and case-sensitive: `"Monday"` parses,
    /// `"monday"` does not.
    ///
    /// # Errors
    ///
    /// Returns [`WeekdayError::EmptyName`] if `name` is empty.
    /// Returns [`WeekdayError::UnknownName`] if `name` matches none of
    /// the seven day names.
    pub fn from_name(name: &str) -> Result<Self, WeekdayError> {
        if name.is_empty() {
            return Err(WeekdayError::EmptyName);
        }
        Self::values()
            .find(|day| day.name() == name)
            .ok_or_else(|| WeekdayError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Returns the number of days from this day until the next
    /// occurrence of `next`.
    ///
    /// Always in 0..=6; a day is zero days until itself.
    ///
    /// # Example
    ///
    /// ```
    /// use weekdays::Weekday;
    ///
    /// assert_eq!(Weekday::Monday.days_until(Weekday::Tuesday), 1);
    /// assert_eq!(Weekday::Monday.days_until(Weekday::Sunday), 6);
    /// ```
    pub fn days_until(self, next: Weekday) -> u8 {
        // Adding a week before subtracting keeps the difference
        // non-negative ahead of the mod.
        (next.ordinal() + 7 - self.ordinal()) % 7
    }

    /// Returns the next day, wrapping Saturday to Sunday.
    pub fn next(self) -> Self {
        // ordinal + 1 mod 7 is always a valid ordinal.
        Self::from_ordinal((self.ordinal() + 1) % 7).expect("ordinal + 1 mod 7 is in 0..=6")
    }

    /// Returns the previous day, wrapping Sunday to Saturday.
    pub fn previous(self) -> Self {
        Self::from_ordinal((self.ordinal() + 6) % 7).expect("ordinal + 6 mod 7 is in 0..=6")
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = WeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
