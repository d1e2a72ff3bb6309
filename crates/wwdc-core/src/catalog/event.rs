use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A conference or event the catalog content belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Base path of the event's image assets.
    pub images_path: Url,
    pub hashtag: String,
    #[serde(rename = "imageURL")]
    pub image_url: Url,
    pub sort_order: String,
    pub is_searchable: bool,
    pub is_browsable: bool,
    pub web_permalink: Url,
    pub web_url_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(rename = "svgGlyphURL", default, skip_serializing_if = "Option::is_none")]
    pub svg_glyph_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sf_symbol_name: Option<String>,
    #[serde(
        rename = "registrationServiceID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_information: Option<EventSignup>,
}

/// Registration details attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSignup {
    #[serde(rename = "registrationServiceID")]
    pub registration_service_id: String,
    pub registration_service_key: String,
    pub localized_strings: LocalizedStrings,
}

/// Display strings for event registration and the digital lounges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedStrings {
    pub attendance_policy_title: String,
    pub digital_lounge_schedule_heading: String,
    pub digital_lounge_related_heading: String,
    pub digital_lounge_bulk_action_heading: String,
    pub digital_lounge_bulk_action_detail: String,
    pub digital_lounge_bulk_action_prompt: String,
    pub digital_lounges_bulk_form_heading: String,
    pub digital_lounge_bulk_form_instructions: String,
    pub digital_lounge_bulk_form_confirmation_format: String,
    pub ineligible_for_registration_title: String,
    pub ineligible_for_registration_message: String,
    pub internal_user_ineligible_for_registration_message: String,
}
