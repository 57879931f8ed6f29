//! Text cleanup around topic generation from web pages.
//!
//! A [`crate::TopicProvider`] backed by a language model reads the page text
//! produced by [`page_text`] and its raw answer goes through
//! [`sanitize_topic`] before it reaches the topic picker.
//!
//! A provider that summarizes pages plugs both helpers around its own
//! summarizer. Here the "summary" is simply the page's first words:
//!
//! ```
//! use async_trait::async_trait;
//! use runtime::providers::text::{page_text, sanitize_topic};
//! use runtime::{ProviderError, TopicProvider, TopicRequest, TopicResponse};
//!
//! struct FirstWords {
//!     html: String,
//! }
//!
//! #[async_trait]
//! impl TopicProvider for FirstWords {
//!     async fn topic_from_page(
//!         &self,
//!         _request: &TopicRequest,
//!     ) -> Result<TopicResponse, ProviderError> {
//!         Ok(TopicResponse {
//!             topic: sanitize_topic(&page_text(&self.html)),
//!         })
//!     }
//! }
//!
//! let provider = FirstWords {
//!     html: "<h1>Deep 'Sea' Creatures</h1><script>x()</script><p>of the abyss</p>".into(),
//! };
//! let request = TopicRequest { url: "https://example.com".into() };
//! let response = tokio::runtime::Runtime::new()
//!     .unwrap()
//!     .block_on(provider.topic_from_page(&request))
//!     .unwrap();
//! assert_eq!(response.topic, "Deep Sea Creatures of the");
//! ```

/// Maximum number of characters of page text handed to a topic generator.
pub const MAX_PAGE_TEXT: usize = 10_000;

/// Maximum number of words kept in a generated topic.
pub const MAX_TOPIC_WORDS: usize = 5;

/// Strips `<script>`/`<style>` blocks and markup, capped at [`MAX_PAGE_TEXT`] chars.
///
/// Each tag is replaced by a single space. An unterminated `<` is kept as text.
pub fn page_text(html: &str) -> String {
    let html = strip_block(html, "script");
    let html = strip_block(&html, "style");

    let mut text = String::with_capacity(html.len());
    let mut rest = html.as_str();
    while let Some(open) = rest.find('<') {
        let tag_len = rest[open + 1..].find('>');
        match tag_len {
            // `<>` is not a tag.
            Some(len) if len > 0 => {
                text.push_str(&rest[..open]);
                text.push(' ');
                rest = &rest[open + 1 + len + 1..];
            }
            _ => {
                text.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    text.push_str(rest);

    text.chars().take(MAX_PAGE_TEXT).collect()
}

/// Removes every complete `<name ...>...</name>` block, case-insensitively.
fn strip_block(html: &str, name: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let open = format!("<{name}");
    let close = format!("</{name}>");

    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    let mut search = 0;

    while let Some(found) = lower[search..].find(&open) {
        let start = search + found;
        let after = start + open.len();
        let boundary = lower[after..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        if !boundary {
            search = after;
            continue;
        }

        let Some(end) = lower[after..].find(&close) else {
            break;
        };
        out.push_str(&html[cursor..start]);
        cursor = after + end + close.len();
        search = cursor;
    }

    out.push_str(&html[cursor..]);
    out
}

/// Drops quote characters and keeps at most [`MAX_TOPIC_WORDS`] words.
pub fn sanitize_topic(raw: &str) -> String {
    raw.replace(['"', '\''], "")
        .split_whitespace()
        .take(MAX_TOPIC_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
