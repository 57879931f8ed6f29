//! Static providers and the timeout-with-fallback combinator.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use battle_content::TopicPool;
use battle_core::PcgRng;

use crate::api::{
    ArtProvider, ArtRequest, ArtResponse, DescriptionProvider, DescriptionRequest,
    DescriptionResponse, ProviderError, TopicProvider, TopicRequest, TopicResponse,
};

/// Sprite shown when no art could be generated.
pub const PLACEHOLDER_SPRITE: &str = "/placeholder.svg";

/// Arena background shown when no art could be generated.
pub const FALLBACK_BACKGROUND: &str = "/fallback-bg.jpg";

/// Runs `call` bounded by `timeout`, substituting `fallback()` on error or timeout.
///
/// The call is attempted exactly once.
pub async fn with_fallback<T, F>(
    label: &str,
    timeout: Duration,
    call: F,
    fallback: impl FnOnce() -> T,
) -> T
where
    F: Future<Output = Result<T, ProviderError>>,
{
    let error = match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => return value,
        Ok(Err(e)) => e,
        Err(_) => ProviderError::Timeout(timeout),
    };

    warn!("{} provider failed, using fallback: {}", label, error);
    fallback()
}

/// Describes every topic with the same canned line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackDescriptionProvider;

#[async_trait]
impl DescriptionProvider for FallbackDescriptionProvider {
    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<DescriptionResponse, ProviderError> {
        Ok(DescriptionResponse {
            description: fallback_description(&request.topic),
        })
    }
}

/// Canned flavor text for a topic.
pub fn fallback_description(topic: &str) -> String {
    format!("Two monsters square off over {topic}. Only one will leave the arena standing!")
}

/// Answers every art request with placeholder sprites.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackArtProvider;

#[async_trait]
impl ArtProvider for FallbackArtProvider {
    async fn generate(&self, request: &ArtRequest) -> Result<ArtResponse, ProviderError> {
        Ok(ArtResponse {
            image_urls: vec![PLACEHOLDER_SPRITE.to_owned(); request.count as usize],
        })
    }
}

/// Ignores the page and picks from the built-in web topic pool.
#[derive(Debug)]
pub struct FallbackTopicProvider {
    next_seed: AtomicU64,
}

impl FallbackTopicProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            next_seed: AtomicU64::new(seed),
        }
    }

    /// Picks the next topic without going through the async trait.
    pub fn pick(&self) -> String {
        let seed = self.next_seed.fetch_add(1, Ordering::Relaxed);
        TopicPool::Web.pick(&PcgRng, seed).to_owned()
    }
}

impl Default for FallbackTopicProvider {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

#[async_trait]
impl TopicProvider for FallbackTopicProvider {
    async fn topic_from_page(
        &self,
        _request: &TopicRequest,
    ) -> Result<TopicResponse, ProviderError> {
        Ok(TopicResponse { topic: self.pick() })
    }
}

/// Art used to dress one battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleAssets {
    pub player_sprite: String,
    pub enemy_sprite: String,
    pub background: String,
}

impl Default for BattleAssets {
    fn default() -> Self {
        Self {
            player_sprite: PLACEHOLDER_SPRITE.to_owned(),
            enemy_sprite: PLACEHOLDER_SPRITE.to_owned(),
            background: FALLBACK_BACKGROUND.to_owned(),
        }
    }
}

/// Requests player, enemy and arena art concurrently.
///
/// Each slot falls back on its own, so one failed request never discards art
/// that did arrive.
pub async fn resolve_assets(
    art: &dyn ArtProvider,
    timeout: Duration,
    player: &str,
    enemy: &str,
    topic: &str,
) -> BattleAssets {
    let first_url = |request: ArtRequest| async move {
        let response = art.generate(&request).await?;
        response
            .image_urls
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed {
                provider: "art",
                reason: format!("no image for {:?}", request.prompt),
            })
    };
    let request = |prompt: String| ArtRequest { prompt, count: 1 };

    let (player_sprite, enemy_sprite, background) = tokio::join!(
        with_fallback(
            "art",
            timeout,
            first_url(request(format!("{player} battling over {topic}"))),
            || PLACEHOLDER_SPRITE.to_owned(),
        ),
        with_fallback(
            "art",
            timeout,
            first_url(request(format!("{enemy} battling over {topic}"))),
            || PLACEHOLDER_SPRITE.to_owned(),
        ),
        with_fallback(
            "art",
            timeout,
            first_url(request(format!("battle arena for {topic}"))),
            || FALLBACK_BACKGROUND.to_owned(),
        ),
    );

    BattleAssets {
        player_sprite,
        enemy_sprite,
        background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_content::WEB_TOPICS;

    #[tokio::test]
    async fn fallback_topic_comes_from_web_pool() {
        let provider = FallbackTopicProvider::new(11);
        let request = TopicRequest {
            url: "https://example.com".into(),
        };

        for _ in 0..20 {
            let response = provider.topic_from_page(&request).await.unwrap();
            assert!(WEB_TOPICS.contains(&response.topic.as_str()));
        }
    }

    #[tokio::test]
    async fn fallback_art_returns_requested_count() {
        let response = FallbackArtProvider
            .generate(&ArtRequest {
                prompt: "anything".into(),
                count: 3,
            })
            .await
            .unwrap();
        assert_eq!(response.image_urls, vec![PLACEHOLDER_SPRITE; 3]);
    }

    #[tokio::test]
    async fn error_degrades_to_fallback() {
        let value = with_fallback(
            "test",
            Duration::from_secs(1),
            async {
                Err(ProviderError::Unavailable {
                    provider: "test",
                    reason: "offline".into(),
                })
            },
            || 7,
        )
        .await;
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_degrades_to_fallback() {
        let value = with_fallback(
            "test",
            Duration::from_millis(50),
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok("late")
            },
            || "fallback",
        )
        .await;
        assert_eq!(value, "fallback");
    }
}
