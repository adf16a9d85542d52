//! Resolution engine: pure functions over schedules, exceptions and dates.
//!
//! Dependency order, leaves first: recurrence matching, the exception
//! overlay, canonical-schedule selection, then the two window builders on
//! top. `resolver` is the only module here that touches the repository.

pub mod calendar_window;
pub mod exceptions;
pub mod recurrence;
pub mod resolver;
pub mod selector;
pub mod upcoming;
pub mod window_clock;

pub use calendar_window::{build_calendar_window, resolve_date};
pub use exceptions::ExceptionSet;
pub use resolver::{resolve_calendar_window, resolve_upcoming};
pub use selector::select_for_date;
pub use upcoming::build_upcoming_list;
pub use window_clock::resolve_start;
