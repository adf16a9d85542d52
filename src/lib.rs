//! # club-rota
//!
//! Recurring-schedule resolution engine for the club membership platform.
//!
//! This crate decides, for any calendar date, which weekly recurring
//! activities ("open nights", practices) are in effect for a team or
//! location, accounting for activation windows, week-parity and
//! month-ordinal qualifiers, and one-off exception dates. Two read shapes
//! are served over the same facts: a dense fixed-length calendar window
//! (dashboards) and a sparse list of confirmed upcoming occurrences
//! (public pages).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: plain value types (schedules, exceptions, occurrences)
//!   plus seed-document parsing
//! - [`services`]: the pure resolution engine — recurrence matching,
//!   exception overlay, canonical-schedule selection, window building
//! - [`db`]: repository pattern and the in-memory backend
//! - [`http`]: axum-based REST API exposing the engine
//!
//! Everything in [`services`] below `resolver` is a pure function over
//! immutable inputs; resolution runs are bounded
//! (O(days × candidate schedules)) and safe to evaluate in parallel.

pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
