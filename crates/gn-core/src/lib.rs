//! gn-core: stable foundation for graphnav.
//!
//! Contains:
//! - periods (relative time windows and their lookbacks)
//! - time helpers (minute truncation, relative-time tokens, readout format)
//! - lenient numeric parsing for query values
//! - the query-string fragment codec shared by menus and zooming
//! - common error types

pub mod error;
pub mod numeric;
pub mod period;
pub mod query;
pub mod time;

// Re-exports for convenient access
pub use error::{GnError, GnResult};
pub use numeric::*;
pub use period::*;
pub use time::*;
