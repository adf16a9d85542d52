// ============================================================================
// Seed JSON Parsing
// ============================================================================
//
// Deployments without a full CRUD backend load their rota from a single JSON
// document ({"schedules": [...], "exceptions": [...]}). These functions
// deserialize that document, apply the few checks the engine cannot tolerate
// being wrong (weekday range, dangling exception references), and stamp the
// seed with a content checksum.

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::db::checksum::calculate_checksum;
use crate::models::{RecurringSchedule, ScheduleException};

/// A parsed seed document: full schedule + exception state for a deployment.
#[derive(Debug, Clone)]
pub struct RotaSeed {
    pub checksum: String,
    pub schedules: Vec<RecurringSchedule>,
    pub exceptions: Vec<ScheduleException>,
}

#[derive(serde::Deserialize)]
struct SeedInput {
    #[serde(default)]
    pub checksum: String,
    pub schedules: Vec<RecurringSchedule>,
    #[serde(default)]
    pub exceptions: Vec<ScheduleException>,
}

fn validate_seed_document(seed_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(seed_json).context("Invalid rota seed JSON")?;
    let has_schedules = value
        .as_object()
        .and_then(|obj| obj.get("schedules"))
        .is_some();
    if !has_schedules {
        anyhow::bail!("Missing required 'schedules' field");
    }
    Ok(())
}

/// Parse a rota seed from a JSON string.
///
/// Validates the weekday range on every schedule and drops exceptions that
/// reference no schedule in the document (duplicate exception pairs are kept
/// here; the repository collapses them by set semantics). A checksum of the
/// raw JSON is computed when the document does not carry one.
pub fn parse_rota_json_str(seed_json: &str) -> Result<RotaSeed> {
    validate_seed_document(seed_json)?;

    let input: SeedInput =
        serde_json::from_str(seed_json).context("Failed to deserialize rota seed JSON")?;

    for schedule in &input.schedules {
        if schedule.weekday > 6 {
            anyhow::bail!(
                "Schedule {} has weekday {} outside 0..=6",
                schedule.id,
                schedule.weekday
            );
        }
    }

    let known_ids: HashSet<_> = input.schedules.iter().map(|s| s.id).collect();
    let (exceptions, dangling): (Vec<_>, Vec<_>) = input
        .exceptions
        .into_iter()
        .partition(|e| known_ids.contains(&e.schedule_id));
    for orphan in &dangling {
        log::warn!(
            "Dropping exception for unknown schedule {} on {}",
            orphan.schedule_id,
            orphan.excluded_date
        );
    }

    let checksum = if input.checksum.is_empty() {
        calculate_checksum(seed_json)
    } else {
        input.checksum
    };

    Ok(RotaSeed {
        checksum,
        schedules: input.schedules,
        exceptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SEED: &str = r#"{
        "schedules": [
            {
                "id": 1,
                "weekday": 5,
                "active": true,
                "name": "Friday open night",
                "start_time": "19:00",
                "end_time": "22:00"
            }
        ],
        "exceptions": [
            { "schedule_id": 1, "excluded_date": "2026-01-09" }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_seed() {
        let seed = parse_rota_json_str(MINIMAL_SEED).expect("minimal seed should parse");
        assert_eq!(seed.schedules.len(), 1);
        assert_eq!(seed.schedules[0].weekday, 5);
        assert_eq!(seed.exceptions.len(), 1);
        assert!(!seed.checksum.is_empty());
    }

    #[test]
    fn test_checksum_computed_when_absent() {
        let seed = parse_rota_json_str(MINIMAL_SEED).unwrap();
        assert_eq!(seed.checksum.len(), 64);
        // Deterministic over the same document
        let again = parse_rota_json_str(MINIMAL_SEED).unwrap();
        assert_eq!(seed.checksum, again.checksum);
    }

    #[test]
    fn test_provided_checksum_preserved() {
        let json = r#"{ "checksum": "abc123", "schedules": [] }"#;
        let seed = parse_rota_json_str(json).unwrap();
        assert_eq!(seed.checksum, "abc123");
    }

    #[test]
    fn test_missing_schedules_key() {
        let result = parse_rota_json_str(r#"{"exceptions": []}"#);
        assert!(result.is_err(), "Should fail without 'schedules' key");
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_rota_json_str("not valid json {");
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_weekday_out_of_range_rejected() {
        let json = r#"{
            "schedules": [
                { "id": 1, "weekday": 7, "active": true, "name": "Bad" }
            ]
        }"#;
        let result = parse_rota_json_str(json);
        assert!(result.is_err(), "weekday 7 should be rejected");
    }

    #[test]
    fn test_dangling_exception_dropped() {
        let json = r#"{
            "schedules": [
                { "id": 1, "weekday": 2, "active": true, "name": "Tuesday" }
            ],
            "exceptions": [
                { "schedule_id": 99, "excluded_date": "2026-03-03" }
            ]
        }"#;
        let seed = parse_rota_json_str(json).unwrap();
        assert!(seed.exceptions.is_empty());
    }
}
