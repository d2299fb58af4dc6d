use chrono::NaiveDateTime;
use gather_shared::ActivityDto;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::datetime::{format_wire_date, parse_wire_date, wire_date_serde};
use crate::error::StoreError;

/// The domain entity managed by the store.
///
/// The identifier is unique within the registry and immutable after
/// creation. Unlike the wire DTO, `date` is parsed; comparing activities
/// by date is a plain `NaiveDateTime` comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(with = "wire_date_serde")]
    pub date: NaiveDateTime,
    pub city: String,
    pub venue: String,
}

impl Activity {
    /// Builds a new activity with a freshly minted identifier.
    pub fn new(
        title: String,
        description: String,
        category: String,
        date: NaiveDateTime,
        city: String,
        venue: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            category,
            date,
            city,
            venue,
        }
    }

    /// Converts a wire DTO into the domain model, normalizing the date
    /// representation (fractional-seconds and timezone suffixes are
    /// truncated before parsing).
    pub fn from_wire(dto: ActivityDto) -> Result<Self, StoreError> {
        let date = parse_wire_date(&dto.date).map_err(|_| StoreError::InvalidDate {
            id: dto.id.clone(),
            raw: dto.date.clone(),
        })?;

        Ok(Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            category: dto.category,
            date,
            city: dto.city,
            venue: dto.venue,
        })
    }

    #[must_use]
    pub fn to_wire(&self) -> ActivityDto {
        ActivityDto {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            date: format_wire_date(self.date),
            city: self.city.clone(),
            venue: self.venue.clone(),
        }
    }
}
