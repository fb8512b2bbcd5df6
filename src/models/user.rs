//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::book::BookShort;

/// User record exchanged across the API boundary.
///
/// Owned books are embedded as [`BookShort`], mirroring the cycle truncation
/// on the book side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<BookShort>>,
}

/// Abbreviated user form embedded in [`crate::models::Book`] responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserShort {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_nulls() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: None,
            created_on: None,
            books: None,
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("email").is_none());
        assert!(json.get("createdOn").is_none());
        assert!(json.get("books").is_none());
    }

    #[test]
    fn short_form_carries_identity_only() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada@example.org".to_string()),
            created_on: None,
            books: Some(vec![]),
        };

        let short = UserShort::from(&user);
        let json = serde_json::to_value(short).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["firstName"], "Ada");
        // Email and owned books never travel with the embedded form
        let map = json.as_object().unwrap();
        assert!(!map.contains_key("email"));
        assert!(!map.contains_key("books"));
    }

    #[test]
    fn round_trip_preserves_embedded_books() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada@example.org".to_string()),
            created_on: None,
            books: Some(vec![BookShort {
                id: Uuid::new_v4(),
                title: "Sketch of the Analytical Engine".to_string(),
                author: None,
            }]),
        };

        let text = serde_json::to_string_pretty(&user).unwrap();
        let parsed: User = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, user);
    }
}
