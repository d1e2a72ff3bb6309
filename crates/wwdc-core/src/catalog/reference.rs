//! Lookup tables referenced by content items: rooms, topics, resources, image types.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub ordinal: i64,
    #[serde(rename = "regionId", default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub ordinal: i64,
    pub web_permalink: Url,
    #[serde(rename = "imageURL")]
    pub image_url: Url,
    #[serde(rename = "alternateImageURL")]
    pub alternate_image_url: Url,
    #[serde(rename = "svgURL")]
    pub svg_url: Url,
    #[serde(rename = "alternateSVGURL")]
    pub alternate_svg_url: Url,
    pub sf_symbol_name: String,
    #[serde(rename = "alternateSFSymbolName")]
    pub alternate_sf_symbol_name: String,
}

/// Groups topics for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCategory {
    pub id: i64,
    pub title: String,
    pub ordinal: i64,
    #[serde(rename = "topicIds")]
    pub topic_ids: Vec<i64>,
}

/// A document, sample project or link attached to content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub url: Url,
    #[serde(rename = "resource_type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageType {
    pub name: String,
    pub variants: Vec<ImageVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub width: u32,
    pub height: u32,
}

impl ImageType {
    /// Largest variant by pixel area.
    pub fn largest(&self) -> Option<ImageVariant> {
        self.variants
            .iter()
            .copied()
            .max_by_key(|v| u64::from(v.width) * u64::from(v.height))
    }
}
