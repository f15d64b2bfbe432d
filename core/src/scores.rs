use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::HIGH_SCORE_SLOTS;

/// Best scores so far, highest first, never more than [`HIGH_SCORE_SLOTS`] entries.
///
/// Serializes as a plain array. Anything deserialized is normalized, so a list
/// that was edited by hand still upholds the ordering and length invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct HighScores(Vec<u32>);

impl HighScores {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_scores(mut scores: Vec<u32>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(HIGH_SCORE_SLOTS);
        Self(scores)
    }

    /// Parses the stored textual form, treating corrupt input as an empty list.
    pub fn decode(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::debug!("discarding unreadable high scores: {}", err);
            Self::new()
        })
    }

    pub fn encode(&self) -> String {
        // a list of integers always serializes
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    /// Merges `score` into the list and returns its 1-based rank if it made the cut.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        // ties go after existing entries, so an equal score never pushes an old one out
        let rank = self.0.partition_point(|&s| s >= score);
        if rank >= HIGH_SCORE_SLOTS {
            return None;
        }
        self.0.insert(rank, score);
        self.0.truncate(HIGH_SCORE_SLOTS);
        Some(rank + 1)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<u32>> for HighScores {
    fn from(scores: Vec<u32>) -> Self {
        Self::from_scores(scores)
    }
}

impl From<HighScores> for Vec<u32> {
    fn from(scores: HighScores) -> Self {
        scores.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn is_sorted_desc(scores: &HighScores) -> bool {
        scores.as_slice().windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn record_keeps_order_and_cap() {
        let mut scores = HighScores::new();
        for score in [3, 17, 0, 9, 9, 22, 1, 14, 5] {
            scores.record(score);
            assert!(is_sorted_desc(&scores));
            assert!(scores.len() <= HIGH_SCORE_SLOTS);
        }
        assert_eq!(scores.as_slice(), &[22, 17, 14, 9, 9]);
    }

    #[test]
    fn record_reports_rank() {
        let mut scores = HighScores::from_scores(vec![10, 8, 6]);
        assert_eq!(scores.record(9), Some(2));
        assert_eq!(scores.record(1), Some(5));
        assert_eq!(scores.record(0), None);
        assert_eq!(scores.as_slice(), &[10, 9, 8, 6, 1]);
    }

    #[test]
    fn zero_enters_a_short_list() {
        let mut scores = HighScores::from_scores(vec![4, 2]);
        assert_eq!(scores.record(0), Some(3));
        assert_eq!(scores.as_slice(), &[4, 2, 0]);
    }

    #[test]
    fn zero_does_not_displace_a_full_list() {
        let mut scores = HighScores::from_scores(vec![5, 4, 3, 2, 1]);
        assert_eq!(scores.record(0), None);
        assert_eq!(scores.as_slice(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn decode_normalizes_stored_lists() {
        let scores = HighScores::decode("[1, 40, 7, 3, 12, 9, 2]");
        assert_eq!(scores.as_slice(), &[40, 12, 9, 7, 3]);
    }

    #[test]
    fn decode_treats_garbage_as_empty() {
        for raw in ["", "null", "{\"a\":1}", "[1, -2]", "[\"x\"]", "not json"] {
            assert!(HighScores::decode(raw).is_empty(), "{raw}");
        }
    }

    #[test]
    fn encode_is_a_json_array() {
        let scores = HighScores::from_scores(vec![2, 11]);
        assert_eq!(scores.encode(), "[11,2]");
        assert_eq!(HighScores::decode(&scores.encode()), scores);
    }
}
