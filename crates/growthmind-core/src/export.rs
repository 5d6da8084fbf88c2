//! Portable JSON snapshot of a profile.
//!
//! The document mirrors [`UserProfile`] field for field: dates are ISO-8601
//! (`YYYY-MM-DD`), reflection timestamps are ISO-8601 date-times, and both
//! record lists keep their stored order. [`import`] reads the same document
//! back into an equal profile.

use chrono::Timelike;

use crate::catalog;
use crate::error::ExportError;
use crate::profile::UserProfile;

/// File name offered for downloaded exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "growth_journal.json";

/// Serialize the whole profile as indented JSON.
pub fn export(profile: &UserProfile) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Serialize the whole profile as single-line JSON.
pub fn export_compact(profile: &UserProfile) -> Result<String, ExportError> {
    Ok(serde_json::to_string(profile)?)
}

/// Parse an export document back into a profile.
///
/// Rejects documents that could not have come from a valid session: a
/// longest streak below the current one, completions that do not match a
/// catalog challenge, or reflection timestamps finer than a minute.
pub fn import(document: &str) -> Result<UserProfile, ExportError> {
    let profile: UserProfile = serde_json::from_str(document)?;

    profile
        .validate()
        .map_err(|e| ExportError::Invalid(e.to_string()))?;

    for record in &profile.completed_challenges {
        let challenge = catalog::find_challenge(record.challenge_id).ok_or_else(|| {
            ExportError::Invalid(format!(
                "completion references unknown challenge id {}",
                record.challenge_id
            ))
        })?;
        if record.title != challenge.title {
            return Err(ExportError::Invalid(format!(
                "completion of challenge {} is titled {:?}, expected {:?}",
                record.challenge_id, record.title, challenge.title
            )));
        }
    }

    if let Some(entry) = profile
        .reflection_entries
        .iter()
        .find(|r| r.timestamp.second() != 0 || r.timestamp.nanosecond() != 0)
    {
        return Err(ExportError::Invalid(format!(
            "reflection timestamp {} is not whole minutes",
            entry.timestamp
        )));
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{complete_challenge, save_reflection};
    use crate::streak::update_streak;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> UserProfile {
        let mut p = UserProfile::new(day(2024, 4, 1));
        p.name = "Ada".into();
        update_streak(&mut p, day(2024, 4, 2));
        update_streak(&mut p, day(2024, 4, 3));
        complete_challenge(&mut p, 5, day(2024, 4, 3)).unwrap();
        save_reflection(&mut p, "tried something new", day(2024, 4, 3).and_hms_opt(21, 5, 0).unwrap());
        p
    }

    #[test]
    fn export_uses_profile_field_names() {
        let json: serde_json::Value = serde_json::from_str(&export(&sample()).unwrap()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["start_date"], "2024-04-01");
        assert_eq!(json["current_streak"], 2);
        assert_eq!(json["longest_streak"], 2);
        assert_eq!(json["last_login"], "2024-04-03");
        assert_eq!(json["completed_challenges"][0]["challenge_id"], 5);
        assert_eq!(json["completed_challenges"][0]["title"], "Process Praise");
        assert_eq!(json["completed_challenges"][0]["completed_date"], "2024-04-03");
        assert!(json["completed_challenges"][0]["reflection"].is_null());
        assert_eq!(json["reflection_entries"][0]["timestamp"], "2024-04-03T21:05:00");
        assert_eq!(json["reflection_entries"][0]["text"], "tried something new");
    }

    #[test]
    fn export_is_deterministic() {
        let p = sample();
        assert_eq!(export(&p).unwrap(), export(&p).unwrap());
    }

    #[test]
    fn import_restores_equal_profile() {
        let p = sample();
        assert_eq!(import(&export(&p).unwrap()).unwrap(), p);
        assert_eq!(import(&export_compact(&p).unwrap()).unwrap(), p);
    }

    #[test]
    fn fresh_profile_round_trips() {
        let p = UserProfile::new(day(2024, 4, 1));
        let json = export(&p).unwrap();
        assert!(json.contains("\"last_login\": null"));
        assert_eq!(import(&json).unwrap(), p);
    }

    #[test]
    fn import_rejects_broken_streak_invariant() {
        let mut p = sample();
        p.longest_streak = 0;
        let doc = export(&p).unwrap();
        assert!(matches!(import(&doc), Err(ExportError::Invalid(_))));
    }

    #[test]
    fn import_rejects_unknown_challenge() {
        let mut p = sample();
        p.completed_challenges[0].challenge_id = 404;
        let doc = export(&p).unwrap();
        let err = import(&doc).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn import_rejects_title_not_matching_catalog() {
        let mut p = sample();
        p.completed_challenges[0].title = "Made Up".into();
        let err = import(&export(&p).unwrap()).unwrap_err();
        assert!(matches!(err, ExportError::Invalid(_)));
        assert!(err.to_string().contains("Made Up"));
    }

    #[test]
    fn import_rejects_reflection_with_seconds() {
        let mut p = sample();
        p.reflection_entries[0].timestamp = day(2024, 4, 3).and_hms_opt(21, 5, 30).unwrap();
        let err = import(&export(&p).unwrap()).unwrap_err();
        assert!(matches!(err, ExportError::Invalid(_)));

        p.reflection_entries[0].timestamp = day(2024, 4, 3).and_hms_milli_opt(21, 5, 0, 250).unwrap();
        assert!(matches!(import(&export(&p).unwrap()), Err(ExportError::Invalid(_))));
    }

    #[test]
    fn import_rejects_malformed_json() {
        assert!(matches!(import("{ not json"), Err(ExportError::Json(_))));
        assert!(matches!(
            import(r#"{"name": "x", "start_date": "yesterday"}"#),
            Err(ExportError::Json(_))
        ));
    }
}
