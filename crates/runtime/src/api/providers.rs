//! Asynchronous abstractions for external content collaborators.
//!
//! A battle can be decorated with generated text, art, and topics. None of it
//! affects the rules, so every collaborator sits behind a trait and callers
//! degrade to static content when one fails (see [`crate::with_fallback`]).
//!
//! Request/response types mirror the JSON bodies of the HTTP endpoints they
//! stand in for, hence the camelCase field names on the wire.
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an external collaborator. Always absorbed by a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("{provider} provider unavailable: {reason}")]
    Unavailable {
        provider: &'static str,
        reason: String,
    },

    #[error("{provider} provider returned an unusable response: {reason}")]
    Malformed {
        provider: &'static str,
        reason: String,
    },

    #[error("provider call timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtRequest {
    pub prompt: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtResponse {
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub topic: String,
}

/// Writes a short flavor description for a battle topic.
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<DescriptionResponse, ProviderError>;
}

/// Produces image URLs (sprites, arena backgrounds) for a prompt.
#[async_trait]
pub trait ArtProvider: Send + Sync {
    /// Returns up to `request.count` URLs; an empty list counts as a miss.
    async fn generate(&self, request: &ArtRequest) -> Result<ArtResponse, ProviderError>;
}

/// Turns a web page into a short battle topic.
#[async_trait]
pub trait TopicProvider: Send + Sync {
    async fn topic_from_page(&self, request: &TopicRequest) -> Result<TopicResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_response_uses_camel_case() {
        let response: ArtResponse =
            serde_json::from_str(r#"{"imageUrls":["/a.png","/b.png"]}"#).unwrap();
        assert_eq!(response.image_urls, vec!["/a.png", "/b.png"]);

        let missing: ArtResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.image_urls.is_empty());
    }

    #[test]
    fn requests_serialize_like_http_bodies() {
        let art = ArtRequest {
            prompt: "arena".into(),
            count: 1,
        };
        assert_eq!(
            serde_json::to_string(&art).unwrap(),
            r#"{"prompt":"arena","count":1}"#
        );

        let topic = TopicRequest {
            url: "https://example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&topic).unwrap(),
            serde_json::json!({ "url": "https://example.com" })
        );
    }
}
