//! Repository implementations module.
//!
//! Currently a single implementation of the `ScheduleRepository` trait:
//! - `local`: in-memory backend for unit testing, local development and
//!   seed-file deployments. The production schedule CRUD lives in a
//!   separate collaborator service, so no SQL backend is carried here.
pub mod local;

pub use local::LocalRepository;
