//! Wire types shared between the entity store, the query dispatcher, and
//! the HTTP agent.
//!
//! Everything here is plain data: the store keeps its own parsed domain
//! model and converts at the boundary.

use serde::{Deserialize, Serialize};

/// An activity record as it travels over the wire.
///
/// `date` stays a string at this layer; the service emits ISO-8601 local
/// datetimes that may carry a fractional-seconds or timezone suffix, and
/// normalization happens when the store converts into its domain model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub venue: String,
}

/// Read-side requests accepted by the query dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityQuery {
    ListAll,
}

/// Write-side requests accepted by the query dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityCommand {
    Create(ActivityDto),
    Edit(ActivityDto),
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_json_field_names_match_the_service() {
        let dto = ActivityDto {
            id: "a1".to_string(),
            title: "Team standup".to_string(),
            description: "Daily sync".to_string(),
            category: "work".to_string(),
            date: "2025-01-02T10:00:00".to_string(),
            city: "Lisbon".to_string(),
            venue: "Office".to_string(),
        };

        let json = serde_json::to_value(&dto).expect("serialize dto");
        assert_eq!(json["id"], "a1");
        assert_eq!(json["date"], "2025-01-02T10:00:00");
        assert_eq!(json["venue"], "Office");
    }

    #[test]
    fn dto_tolerates_missing_optional_fields() {
        let dto: ActivityDto =
            serde_json::from_str(r#"{"id":"a2","date":"2025-01-02T10:00:00"}"#)
                .expect("deserialize sparse dto");
        assert_eq!(dto.id, "a2");
        assert!(dto.title.is_empty());
        assert!(dto.venue.is_empty());
    }
}
