//! Parsing helpers for datetimes, record enums and exercise specs.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use reps_core::storage::{ExerciseInstance, Feeling, MovementType, WorkoutExercise};

use crate::errors::CliError;

/// Parse a datetime string (ISO-8601, or YYYY-MM-DD as local noon).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        // Noon keeps the calendar day stable across DST shifts.
        let naive = date
            .and_hms_opt(12, 0, 0)
            .ok_or_else(|| CliError::invalid_input(format!("Invalid date value: {}", value)))?;
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| CliError::invalid_input(format!("Invalid local time: {}", value)))?;
        return Ok(local.with_timezone(&Utc));
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
    .into())
}

pub fn parse_movement_type(value: &str) -> anyhow::Result<MovementType> {
    value
        .parse()
        .map_err(|e: reps_core::RepsError| CliError::invalid_input(e.to_string()).into())
}

pub fn parse_feeling(value: &str) -> anyhow::Result<Feeling> {
    value
        .parse()
        .map_err(|e: reps_core::RepsError| CliError::invalid_input(e.to_string()).into())
}

/// One `name[:sets[:reps[:weight]]]` argument. Empty segments stay unset.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
}

impl From<ExerciseSpec> for WorkoutExercise {
    fn from(spec: ExerciseSpec) -> Self {
        WorkoutExercise {
            name: spec.name,
            sets: spec.sets,
            reps: spec.reps,
            weight: spec.weight,
        }
    }
}

impl From<ExerciseSpec> for ExerciseInstance {
    fn from(spec: ExerciseSpec) -> Self {
        let mut instance = ExerciseInstance::new(spec.name);
        instance.sets = spec.sets;
        instance.reps = spec.reps;
        instance.weight = spec.weight;
        instance
    }
}

pub fn parse_exercise_spec(value: &str) -> anyhow::Result<ExerciseSpec> {
    let mut parts = value.split(':');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(CliError::invalid_input(format!(
            "Exercise needs a name (expected name[:sets[:reps[:weight]]]): {}",
            value
        ))
        .into());
    }

    let sets = parse_count(parts.next(), "sets", value)?;
    let reps = parse_count(parts.next(), "reps", value)?;
    let weight = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => {
            let weight: f64 = raw.parse().map_err(|_| {
                CliError::invalid_input(format!("Invalid weight \"{}\" in {}", raw, value))
            })?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(CliError::invalid_input(format!(
                    "Weight must be a non-negative number: {}",
                    value
                ))
                .into());
            }
            Some(weight)
        }
    };

    if parts.next().is_some() {
        return Err(CliError::invalid_input(format!(
            "Too many fields (expected name[:sets[:reps[:weight]]]): {}",
            value
        ))
        .into());
    }

    Ok(ExerciseSpec {
        name: name.to_string(),
        sets,
        reps,
        weight,
    })
}

pub fn parse_exercise_specs(values: &[String]) -> anyhow::Result<Vec<ExerciseSpec>> {
    values.iter().map(|v| parse_exercise_spec(v)).collect()
}

/// Split an `EXERCISE=VALUE` argument at the first `=`.
pub fn parse_exercise_assignment(value: &str, flag: &str) -> anyhow::Result<(String, String)> {
    let parsed = value
        .split_once('=')
        .map(|(name, rest)| (name.trim(), rest.trim()))
        .filter(|(name, _)| !name.is_empty());
    match parsed {
        Some((name, rest)) => Ok((name.to_string(), rest.to_string())),
        None => Err(CliError::invalid_input(format!(
            "Expected --{} EXERCISE=VALUE: {}",
            flag, value
        ))
        .into()),
    }
}

fn parse_count(segment: Option<&str>, field: &str, spec: &str) -> anyhow::Result<Option<u32>> {
    match segment.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            CliError::invalid_input(format!("Invalid {} \"{}\" in {}", field, raw, spec)).into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reps_core::stats::local_day;

    #[test]
    fn test_parse_datetime_rfc3339() {
        let parsed = parse_datetime("2026-03-01T08:30:00Z").expect("parse");
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T08:30:00+00:00");
    }

    #[test]
    fn test_parse_date_keeps_local_day() {
        let parsed = parse_datetime("2026-03-01").expect("parse");
        assert_eq!(local_day(parsed).to_string(), "2026-03-01");
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let err = parse_datetime("yesterday").expect_err("should fail");
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_exercise_spec_full() {
        let spec = parse_exercise_spec("Bench Press:3:8:135.5").expect("parse");
        assert_eq!(spec.name, "Bench Press");
        assert_eq!(spec.sets, Some(3));
        assert_eq!(spec.reps, Some(8));
        assert_eq!(spec.weight, Some(135.5));
    }

    #[test]
    fn test_exercise_spec_partial() {
        let spec = parse_exercise_spec("Plank").expect("parse");
        assert_eq!(spec.sets, None);

        let spec = parse_exercise_spec("Squat::5").expect("parse");
        assert_eq!(spec.sets, None);
        assert_eq!(spec.reps, Some(5));
        assert_eq!(spec.weight, None);
    }

    #[test]
    fn test_exercise_spec_errors() {
        assert!(parse_exercise_spec(":3:8").is_err());
        assert!(parse_exercise_spec("Row:three").is_err());
        assert!(parse_exercise_spec("Row:3:8:-5").is_err());
        assert!(parse_exercise_spec("Row:3:8:100:extra").is_err());
    }

    #[test]
    fn test_exercise_assignment() {
        let (name, tag) =
            parse_exercise_assignment("Bench Press = To failure", "tag").expect("parse");
        assert_eq!(name, "Bench Press");
        assert_eq!(tag, "To failure");

        let (_, text) = parse_exercise_assignment("Row=", "note").expect("parse");
        assert_eq!(text, "");

        let (_, text) = parse_exercise_assignment("Row=a=b", "note").expect("parse");
        assert_eq!(text, "a=b");

        assert!(parse_exercise_assignment("Row", "tag").is_err());
        assert!(parse_exercise_assignment("=heavy", "tag").is_err());
    }

    #[test]
    fn test_enum_parsing_maps_to_invalid_input() {
        assert_eq!(parse_movement_type("Walked").expect("parse"), MovementType::Walked);
        assert_eq!(parse_feeling("rough").expect("parse"), Feeling::Rough);
        let err = parse_feeling("meh").expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }
}
