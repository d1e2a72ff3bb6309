//! Sessions, labs, articles and the media attached to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// One piece of catalog content: a session, lab, article ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "staticContentId")]
    pub static_content_id: i64,
    #[serde(rename = "eventContentId")]
    pub event_content_id: i64,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub content_updated_at: DateTime<Utc>,
    pub web_permalink: Url,
    pub language_code: String,
    pub description: String,
    pub title: String,
    #[serde(rename = "topicIds")]
    pub topic_ids: Vec<i64>,
    /// Content kind as sent by the service, e.g. `"Video"` or `"Lab"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub delivery_language: String,
    #[serde(rename = "imagesUUID")]
    pub images_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_path_extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_information: Option<ContentSignup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing_expiry_date: Option<DateTime<Utc>>,
    #[serde(rename = "roomId", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(rename = "articleID", default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(rename = "pageID", default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_permalink_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_permalink_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippets: Option<Vec<CodeSnippet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Related>,
    #[serde(
        rename = "primaryTopicID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_topic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_live_stream: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_publishing_date: Option<DateTime<Utc>>,
}

impl ContentItem {
    /// True if the item has playable media.
    pub fn has_video(&self) -> bool {
        self.media.is_some()
    }
}

/// Lab or activity signup window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSignup {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub screening_end_date: DateTime<Utc>,
    pub url: Url,
    pub text: String,
    pub lab_topics: Vec<String>,
    #[serde(rename = "registrationServiceID")]
    pub registration_service_id: String,
    pub rule_set: RuleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_duration_minutes: Option<u32>,
    #[serde(
        rename = "registrationServiceQuestionIDs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_service_question_ids: Option<RegistrationQuestionIds>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub id: String,
}

/// Question identifiers used by the registration service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationQuestionIds {
    #[serde(rename = "appURL")]
    pub app_url: String,
    #[serde(rename = "designURL")]
    pub design_url: String,
    pub question_details: String,
    #[serde(rename = "feedbackAssistantID")]
    pub feedback_assistant_id: String,
    #[serde(rename = "designURLAccessInstructions")]
    pub design_url_access_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub title: String,
    pub start_time_seconds: u32,
    pub end_time_seconds: u32,
    pub language: String,
    pub code: String,
    pub unstyled_code: String,
}

/// Streams and downloads for a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub hls: Url,
    /// Length in seconds.
    pub duration: u32,
    #[serde(rename = "downloadHLS", default, skip_serializing_if = "Option::is_none")]
    pub download_hls: Option<Url>,
    #[serde(rename = "tvOShls", default, skip_serializing_if = "Option::is_none")]
    pub tvos_hls: Option<Url>,
    #[serde(rename = "downloadHD", default, skip_serializing_if = "Option::is_none")]
    pub download_hd: Option<Url>,
    #[serde(rename = "downloadSD", default, skip_serializing_if = "Option::is_none")]
    pub download_sd: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_subtitle_language_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_audio_language_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Url>,
}

impl Media {
    /// Best direct download: HD, then SD, then the HLS download.
    pub fn best_download(&self) -> Option<&Url> {
        self.download_hd
            .as_ref()
            .or(self.download_sd.as_ref())
            .or(self.download_hls.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub start: u32,
    pub title: String,
    pub end: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Related {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"{
        "id": "wwdc2024-10001",
        "staticContentId": 10001,
        "eventContentId": 20001,
        "eventId": "wwdc2024",
        "contentUpdatedAt": "2024-06-11T08:30:00Z",
        "webPermalink": "https://developer.apple.com/videos/play/wwdc2024/10001/",
        "languageCode": "en",
        "description": "An introduction.",
        "title": "Meet the toolchain",
        "topicIds": [1, 4],
        "type": "Video",
        "deliveryLanguage": "en",
        "imagesUUID": "0000-1111",
        "roomId": 7,
        "primaryTopicID": 4,
        "media": {
            "hls": "https://example.com/10001/stream.m3u8",
            "duration": 1820,
            "downloadSD": "https://example.com/10001/sd.mp4",
            "tvOShls": "https://example.com/10001/tv.m3u8",
            "chapters": [ { "start": 0, "title": "Intro", "end": 60 } ]
        },
        "related": { "resources": [3] }
    }"#;

    #[test]
    fn decodes_session_with_media() {
        let item: ContentItem = serde_json::from_str(SESSION).unwrap();
        assert_eq!(item.kind, "Video");
        assert_eq!(item.room_id, Some(7));
        assert_eq!(item.primary_topic_id, Some(4));
        assert!(item.has_video());
        let media = item.media.as_ref().unwrap();
        assert_eq!(media.duration, 1820);
        assert!(media.tvos_hls.is_some());
        assert_eq!(
            media.best_download().map(Url::as_str),
            Some("https://example.com/10001/sd.mp4")
        );
        assert_eq!(media.chapters.as_ref().unwrap()[0].title, "Intro");
        assert_eq!(item.related.unwrap().resources, Some(vec![3]));
    }

    #[test]
    fn encoding_omits_absent_optionals() {
        let item: ContentItem = serde_json::from_str(SESSION).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("signupInformation"));
        assert!(!obj.contains_key("keywords"));
        assert_eq!(obj["type"], "Video");
        assert_eq!(obj["roomId"], 7);
    }

    #[test]
    fn bad_date_is_rejected() {
        let json = SESSION.replace("2024-06-11T08:30:00Z", "June 11th");
        assert!(serde_json::from_str::<ContentItem>(&json).is_err());
    }
}
