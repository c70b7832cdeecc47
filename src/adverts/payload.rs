//! Request bodies for creating and editing adverts.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, keeping only
/// the date part of the latter.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

fn validate_deadline(deadline: &str) -> Result<(), ValidationError> {
    // Empty values are reported by the `length` rule.
    if deadline.is_empty() || parse_deadline(deadline).is_some() {
        return Ok(());
    }

    Err(ValidationError::new("date").with_message(Cow::Borrowed("Deadline must be a valid date")))
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `POST /api/adverts`.
///
/// Required fields are optional here so that a missing key is reported as a
/// validation failure for that field rather than a JSON parse error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateAdvert {
    #[validate(
        required(message = "Job Title is required"),
        length(min = 1, message = "Job Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Deadline is required"),
        length(min = 1, message = "Deadline is required"),
        custom(function = "validate_deadline")
    )]
    pub deadline: Option<String>,
    pub company: Option<String>,
    pub salary: Option<String>,
    pub background: Option<String>,
    pub category: Option<String>,
    pub remarks: Option<String>,
    pub qualifications: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

/// A validated advert ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdvert {
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub company: Option<String>,
    pub salary: Option<String>,
    pub background: Option<String>,
    pub category: Option<String>,
    pub remarks: Option<String>,
    pub qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
}

impl CreateAdvert {
    /// Returns `None` exactly when `validate` fails on a required field:
    /// a missing or empty title or description, or a deadline that is
    /// missing or does not parse.
    #[must_use]
    pub fn into_new_advert(self) -> Option<NewAdvert> {
        let deadline = parse_deadline(self.deadline.as_deref()?)?;

        Some(NewAdvert {
            title: self.title.filter(|title| !title.is_empty())?,
            description: self
                .description
                .filter(|description| !description.is_empty())?,
            deadline,
            company: self.company,
            salary: self.salary,
            background: self.background,
            category: self.category,
            remarks: self.remarks,
            qualifications: self.qualifications.unwrap_or_default(),
            responsibilities: self.responsibilities.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /api/adverts/{id}`.
///
/// Only keys present in the body are applied. Required fields treat `null`
/// like an absent key; optional text fields are cleared by an explicit `null`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAdvert {
    #[validate(length(min = 1, message = "Job Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(
        length(min = 1, message = "Deadline is required"),
        custom(function = "validate_deadline")
    )]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub background: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub remarks: Option<Option<String>>,
    pub qualifications: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

/// The set of fields a single update request changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub company: Option<Option<String>>,
    pub salary: Option<Option<String>>,
    pub background: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub remarks: Option<Option<String>>,
    pub qualifications: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

impl AdvertPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl UpdateAdvert {
    /// Call after `validate`; an unparseable deadline is dropped.
    #[must_use]
    pub fn into_patch(self) -> AdvertPatch {
        AdvertPatch {
            title: self.title,
            description: self.description,
            deadline: self.deadline.as_deref().and_then(parse_deadline),
            company: self.company,
            salary: self.salary,
            background: self.background,
            category: self.category,
            remarks: self.remarks,
            qualifications: self.qualifications,
            responsibilities: self.responsibilities,
            skills: self.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::json_error::field_errors;

    fn create_from(value: serde_json::Value) -> CreateAdvert {
        serde_json::from_value(value).expect("deserializable payload")
    }

    fn update_from(value: serde_json::Value) -> UpdateAdvert {
        serde_json::from_value(value).expect("deserializable payload")
    }

    #[test]
    fn test_parse_deadline_accepts_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 1);

        assert_eq!(parse_deadline("2025-01-01"), expected);
        assert_eq!(parse_deadline("2025-01-01T09:30:00.000Z"), expected);
        assert_eq!(parse_deadline("2025-01-01T23:00:00+02:00"), expected);
        assert_eq!(parse_deadline("next tuesday"), None);
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn test_create_requires_title_description_and_deadline() {
        let errors = create_from(json!({})).validate().expect_err("empty payload");
        let params: Vec<String> = field_errors(&errors).into_iter().map(|e| e.param).collect();

        assert_eq!(params, vec!["deadline", "description", "title"]);
    }

    #[test]
    fn test_create_rejects_empty_title_with_message() {
        let payload = create_from(json!({
            "title": "",
            "description": "Build things",
            "deadline": "2025-01-01"
        }));
        let errors = field_errors(&payload.validate().expect_err("empty title"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].param, "title");
        assert_eq!(errors[0].msg, "Job Title is required");
    }

    #[test]
    fn test_create_rejects_unparseable_deadline() {
        let payload = create_from(json!({
            "title": "Engineer",
            "description": "Build things",
            "deadline": "soon"
        }));
        let errors = field_errors(&payload.validate().expect_err("bad deadline"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Deadline must be a valid date");
    }

    #[test]
    fn test_create_copies_optional_fields_verbatim() {
        let payload = create_from(json!({
            "title": "Engineer",
            "description": "Build things",
            "deadline": "2025-01-01",
            "company": "  Acme  ",
            "skills": ["rust", "sql", "rust"]
        }));
        assert!(payload.validate().is_ok());

        let advert = payload.into_new_advert().expect("valid payload");
        assert_eq!(advert.company.as_deref(), Some("  Acme  "));
        assert_eq!(advert.skills, vec!["rust", "sql", "rust"]);
        assert!(advert.qualifications.is_empty());
        assert_eq!(advert.salary, None);
    }

    #[test]
    fn test_into_new_advert_agrees_with_validation() {
        let payloads = [
            json!({}),
            json!({ "title": "Engineer", "description": "Build things" }),
            json!({ "title": "", "description": "Build things", "deadline": "2025-01-01" }),
            json!({ "title": "Engineer", "description": "", "deadline": "2025-01-01" }),
            json!({ "title": "Engineer", "description": "Build things", "deadline": "soon" }),
            json!({ "title": "Engineer", "description": "Build things", "deadline": "2025-01-01" }),
            json!({
                "title": "Engineer",
                "description": "Build things",
                "deadline": "2025-01-01T09:30:00Z"
            }),
        ];

        for value in payloads {
            let is_valid = create_from(value.clone()).validate().is_ok();
            let converted = create_from(value.clone()).into_new_advert().is_some();

            assert_eq!(is_valid, converted, "{value}");
        }
    }

    #[test]
    fn test_default_create_payload_reports_every_required_field() {
        let errors = CreateAdvert::default().validate().expect_err("nothing set");
        let params: Vec<String> = field_errors(&errors).into_iter().map(|e| e.param).collect();

        assert_eq!(params, vec!["deadline", "description", "title"]);
    }

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let patch = update_from(json!({ "salary": null, "company": "Acme" })).into_patch();

        assert_eq!(patch.salary, Some(None));
        assert_eq!(patch.company, Some(Some("Acme".to_string())));
        assert_eq!(patch.remarks, None);
        assert_eq!(patch.title, None);
    }

    #[test]
    fn test_update_with_empty_body_is_empty_patch() {
        let payload = update_from(json!({}));
        assert!(payload.validate().is_ok());
        assert!(payload.into_patch().is_empty());
    }

    #[test]
    fn test_update_null_required_field_is_ignored() {
        let payload = update_from(json!({ "title": null }));
        assert!(payload.validate().is_ok());
        assert!(payload.into_patch().is_empty());
    }

    #[test]
    fn test_update_rejects_clearing_required_fields() {
        let errors = update_from(json!({ "title": "", "deadline": "" }))
            .validate()
            .expect_err("required fields cannot be emptied");
        let params: Vec<String> = field_errors(&errors).into_iter().map(|e| e.param).collect();

        assert_eq!(params, vec!["deadline", "title"]);
    }
}
