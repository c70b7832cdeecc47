use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    database::models::advert,
    ids::{AdvertId, UserId},
};

/// JSON representation of an advert. Unset optional fields are left out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertView {
    pub id: AdvertId,
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<advert::Model> for AdvertView {
    fn from(advert: advert::Model) -> Self {
        Self {
            id: advert.advert_id(),
            owner: advert.owner(),
            title: advert.title,
            description: advert.description,
            deadline: advert.deadline,
            company: advert.company,
            salary: advert.salary,
            background: advert.background,
            category: advert.category,
            remarks: advert.remarks,
            qualifications: advert.qualifications.0,
            responsibilities: advert.responsibilities.0,
            skills: advert.skills.0,
            created_at: advert.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_camel_case_and_skips_unset_fields() {
        let owner = UserId::generate();
        let advert = advert::Model {
            id: uuid::Uuid::new_v4(),
            owner_id: owner.as_uuid(),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            company: Some("Acme".to_string()),
            salary: None,
            background: None,
            category: None,
            remarks: None,
            qualifications: advert::StringList::default(),
            responsibilities: advert::StringList::default(),
            skills: vec!["rust".to_string()].into(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(AdvertView::from(advert)).expect("serializable");

        assert_eq!(value["owner"], json!(owner.to_string()));
        assert_eq!(value["deadline"], json!("2025-01-01"));
        assert_eq!(value["company"], json!("Acme"));
        assert_eq!(value["skills"], json!(["rust"]));
        assert!(value.get("salary").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
