//! Static topic pools.
//!
//! These back the "Random Topic" button, and stand in for the web-scraping
//! topic generator whenever it is unavailable.

use battle_core::RngOracle;

/// Light-hearted matchups offered by "Random Topic".
pub const RANDOM_TOPICS: &[&str] = &[
    "Fire vs Water",
    "Dragons vs Knights",
    "Space vs Ocean",
    "Robots vs Dinosaurs",
    "Magic vs Technology",
    "Pizza vs Burgers",
    "Cats vs Dogs",
    "Summer vs Winter",
    "Books vs Movies",
    "Mountains vs Beaches",
];

/// Current-events style topics used when scraping the web is not possible.
pub const WEB_TOPICS: &[&str] = &[
    "Climate Change Debate",
    "Space Exploration vs Ocean Discovery",
    "Renewable Energy Revolution",
    "Artificial Intelligence Ethics",
    "Virtual Reality vs Augmented Reality",
    "Cryptocurrency Future",
    "Remote Work vs Office Culture",
    "Social Media Impact",
    "Quantum Computing Applications",
    "Genetic Engineering Possibilities",
];

/// Which static list to draw a topic from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopicPool {
    Random,
    Web,
}

impl TopicPool {
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Self::Random => RANDOM_TOPICS,
            Self::Web => WEB_TOPICS,
        }
    }

    /// Picks a topic uniformly using the given oracle and seed.
    pub fn pick(self, rng: &dyn RngOracle, seed: u64) -> &'static str {
        let topics = self.topics();
        topics[rng.pick_index(seed, topics.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{FixedRng, PcgRng};

    #[test]
    fn pick_is_uniform_index_into_pool() {
        assert_eq!(TopicPool::Random.pick(&FixedRng(6), 0), "Cats vs Dogs");
        assert_eq!(TopicPool::Web.pick(&FixedRng(15), 0), "Cryptocurrency Future");
    }

    #[test]
    fn pick_always_returns_pool_member() {
        for seed in 0..100 {
            let topic = TopicPool::Web.pick(&PcgRng, seed);
            assert!(WEB_TOPICS.contains(&topic));
        }
    }
}
