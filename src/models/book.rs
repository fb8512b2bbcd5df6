//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::user::UserShort;

/// Book record exchanged across the API boundary.
///
/// Optional fields are omitted from the JSON output when absent. The owning
/// user is embedded as [`UserShort`] rather than the full record, so a
/// book -> user -> books reference cycle cannot occur in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserShort>,
}

/// Abbreviated book form embedded in [`crate::models::User`] responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookShort {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    fn sample_book() -> Book {
        Book {
            id: Uuid::parse_str("6f2a8f64-1f6b-4c2e-9c1d-0a9c7f3b5e21").unwrap(),
            title: "The Left Hand of Darkness".to_string(),
            author: Some("Ursula K. Le Guin".to_string()),
            isbn: None,
            published_on: Some(Utc.with_ymd_and_hms(1969, 3, 1, 0, 0, 0).unwrap()),
            user_id: None,
            user: None,
        }
    }

    #[test]
    fn serializes_camel_case_and_omits_nulls() {
        let json = serde_json::to_value(sample_book()).unwrap();

        assert_eq!(json["publishedOn"], "1969-03-01T00:00:00Z");
        assert!(json.get("published_on").is_none());
        // None fields are absent, not null
        assert!(json.get("isbn").is_none());
        assert!(json.get("userId").is_none());
        assert!(json.get("user").is_none());
    }

    #[test]
    fn round_trip_preserves_non_null_fields() {
        let book = sample_book();
        let text = serde_json::to_string_pretty(&book).unwrap();
        let parsed: Book = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, book);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_none() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "id": "6f2a8f64-1f6b-4c2e-9c1d-0a9c7f3b5e21",
            "title": "Untitled"
        }))
        .unwrap();

        assert!(book.author.is_none());
        assert!(book.user_id.is_none());
    }

    #[test]
    fn short_form_has_no_owner_reference() {
        let short = BookShort::from(&sample_book());
        let json = serde_json::to_value(short).unwrap();

        assert_eq!(json["title"], "The Left Hand of Darkness");
        assert!(matches!(json, Value::Object(ref map) if !map.contains_key("user")));
    }
}
