//! The WWDC content catalog served as `contents.json`.
//!
//! Field names follow the service's JSON (mostly camelCase, with a few
//! acronym keys such as `imageURL` and the snake_case `resource_type`).
//! Dates are RFC 3339 timestamps.

mod content;
mod event;
mod reference;

pub use content::{
    Chapter, CodeSnippet, ContentItem, ContentSignup, Media, Related, RegistrationQuestionIds,
    RuleSet,
};
pub use event::{Event, EventSignup, LocalizedStrings};
pub use reference::{ImageType, ImageVariant, Resource, Room, Topic, TopicCategory};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub events: Vec<Event>,
    pub contents: Vec<ContentItem>,
    pub rooms: Vec<Room>,
    pub topic_categories: Vec<TopicCategory>,
    pub topics: Vec<Topic>,
    pub resources: Vec<Resource>,
    pub image_types: Vec<ImageType>,
    pub updated: DateTime<Utc>,
    #[serde(rename = "snapshotId")]
    pub snapshot_id: i64,
}

/// Entry counts of a catalog, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub snapshot_id: i64,
    pub updated: DateTime<Utc>,
    pub events: usize,
    pub contents: usize,
    pub videos: usize,
    pub topics: usize,
    pub rooms: usize,
    pub resources: usize,
}

impl Catalog {
    pub fn content(&self, id: &str) -> Option<&ContentItem> {
        self.contents.iter().find(|c| c.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn topic(&self, id: i64) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Content items belonging to `event_id`, in catalog order.
    pub fn contents_for_event<'a>(
        &'a self,
        event_id: &'a str,
    ) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.contents.iter().filter(move |c| c.event_id == event_id)
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            snapshot_id: self.snapshot_id,
            updated: self.updated,
            events: self.events.len(),
            contents: self.contents.len(),
            videos: self.contents.iter().filter(|c| c.has_video()).count(),
            topics: self.topics.len(),
            rooms: self.rooms.len(),
            resources: self.resources.len(),
        }
    }
}
