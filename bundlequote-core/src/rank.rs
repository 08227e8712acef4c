use serde::{Deserialize, Serialize};

use crate::demand::TopicDemand;

/// Number of topics that take part in matching by default.
pub const TOP_TOPICS: usize = 3;

/// A demanded topic together with its position among the heaviest topics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedTopic {
    /// Topic name.
    pub topic: String,
    /// Weight taken from the demand.
    pub weight: u64,
    /// Zero-based position after sorting by weight, highest first.
    pub rank: usize,
}

/// Rank the three heaviest topics of `demand`.
///
/// Equivalent to [`rank_topics`] with a depth of [`TOP_TOPICS`].
#[must_use]
pub fn rank_top_topics(demand: &TopicDemand) -> Vec<RankedTopic> {
    rank_topics(demand, TOP_TOPICS)
}

/// Rank at most `depth` topics of `demand` by weight, highest first.
///
/// Equal weights keep the demand's insertion order. An empty demand yields an
/// empty ranking.
#[must_use]
pub fn rank_topics(demand: &TopicDemand, depth: usize) -> Vec<RankedTopic> {
    let mut entries: Vec<(&str, u64)> = demand.iter().collect();
    // stable: ties stay in insertion order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
        .into_iter()
        .take(depth)
        .enumerate()
        .map(|(rank, (topic, weight))| RankedTopic {
            topic: topic.to_string(),
            weight,
            rank,
        })
        .collect()
}
