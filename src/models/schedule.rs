//! Core value types for recurring schedules.
//!
//! Schedules and exceptions are plain immutable structs handed to pure
//! resolution functions. The persistence boundary is the
//! [`ScheduleRepository`](crate::db::repository::ScheduleRepository) trait;
//! nothing in this module knows where the data came from.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Schedule identifier (database primary key).
///
/// Carries no business meaning beyond identity; resolution uses it only as
/// a deterministic tie-break key (ascending, first-created wins).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub i64);

/// Team identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

/// Location identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i64);

impl ScheduleId {
    pub fn new(value: i64) -> Self {
        ScheduleId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TeamId {
    pub fn new(value: i64) -> Self {
        TeamId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl LocationId {
    pub fn new(value: i64) -> Self {
        LocationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Restricts a rule to odd or even ISO-8601 week numbers (biweekly rotas).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekParity {
    #[default]
    All,
    Odd,
    Even,
}

/// Restricts a rule to the Nth occurrence of its weekday within the month.
///
/// `Last` accepts the final occurrence of the weekday in the month, whether
/// that is numerically the fourth or the fifth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOccurrence {
    #[default]
    All,
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Owning team reference, display + scoping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
    pub slug: String,
}

/// Location reference, display + scoping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: LocationId,
    pub name: String,
}

/// A weekly-recurring activity rule ("open night", practice, ...).
///
/// Read-only to the resolution engine; created and validated by the CRUD
/// side of the platform. The engine must tolerate invariant violations in
/// persisted data (an inverted activation range simply never matches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringSchedule {
    pub id: ScheduleId,
    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    #[serde(default)]
    pub week_parity: WeekParity,
    #[serde(default)]
    pub month_occurrence: MonthOccurrence,
    pub active: bool,
    /// Inclusive lower bound on the rule's lifetime; absent = unbounded.
    #[serde(default)]
    pub activation_start: Option<NaiveDate>,
    /// Inclusive upper bound on the rule's lifetime; absent = unbounded.
    #[serde(default)]
    pub activation_end: Option<NaiveDate>,
    /// Wall-clock "HH:MM", display only, never consulted when matching.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Owning team; a schedule with neither team nor location is "global".
    #[serde(default)]
    pub owner_team: Option<TeamRef>,
    #[serde(default)]
    pub location: Option<LocationRef>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RecurringSchedule {
    /// True when the schedule belongs to the given scope.
    pub fn in_scope(&self, scope: Scope) -> bool {
        match scope {
            Scope::All => true,
            Scope::Team(team_id) => self.owner_team.as_ref().map(|t| t.id) == Some(team_id),
            Scope::Location(location_id) => {
                self.location.as_ref().map(|l| l.id) == Some(location_id)
            }
        }
    }
}

/// A single calendar date on which an otherwise-matching schedule is
/// suppressed ("cancel this week's session"). Unique per
/// (`schedule_id`, `excluded_date`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleException {
    pub schedule_id: ScheduleId,
    pub excluded_date: NaiveDate,
}

/// Selection context for resolution: everything, one team, or one location.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    Team(TeamId),
    Location(LocationId),
}

/// Weekday index of a date, 0 = Sunday .. 6 = Saturday.
///
/// Single conversion point between `chrono::Weekday` and the persisted
/// integer encoding.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
