//! # weekdays
//!
//! Pure weekday arithmetic over the closed seven-day cycle.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str name"] -->|"Weekday::from_name()"| B["Weekday"]
//!     C["ordinal (0..=6)"] -->|"Weekday::from_ordinal()"| B
//!     B -->|".name() / Display"| A
//!     B -->|".ordinal()"| C
//!     B -->|".next() / .previous()"| B
//!     B -->|".days_until()"| D["cyclic distance 0..=6"]
//!     B -->|"count_elapsed()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weekdays::{count_elapsed, Weekday};
//!
//! // Name conversions (exact, case-sensitive)
//! let day = Weekday::from_name("Friday").unwrap();
//! assert_eq!(day.to_string(), "Friday");
//!
//! // Full enumeration, Sunday through Saturday
//! assert_eq!(Weekday::values().count(), 7);
//!
//! // Cyclic distance
//! assert_eq!(Weekday::Monday.days_until(Weekday::Sunday), 6);
//! assert_eq!(count_elapsed(Weekday::Friday, Weekday::Tuesday), 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | The `Weekday` enum: ordinals, names, parsing, stepping |
//! | `elapsed` | Elapsed-day count over a weekday span |
//! | `error` | Error types |

mod elapsed;
mod error;
mod weekday;

pub use elapsed::count_elapsed;
pub use error::WeekdayError;
pub use weekday::Weekday;
