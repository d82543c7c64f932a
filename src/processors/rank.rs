//! Score ranking and label resolution.
//!
//! The ranker turns the engine's raw byte scores into recognitions: each
//! byte is scaled to a confidence in [0, 1], confidences at or below the
//! threshold are dropped, and the survivors are returned in descending
//! confidence order, capped at the configured result count.

use crate::core::config::RankerConfig;
use crate::core::constants::QUANT_SCALE;
use crate::domain::labels::{LabelTable, UNKNOWN_LABEL};
use crate::domain::recognition::Recognition;

/// Ranks raw byte scores into labeled recognitions.
#[derive(Debug, Clone, Default)]
pub struct ResultRanker {
    config: RankerConfig,
}

impl ResultRanker {
    /// Creates a ranker, clamping out-of-range config values.
    pub fn new(config: RankerConfig) -> Self {
        ResultRanker {
            config: config.sanitized(),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Ranks one score vector against a label table.
    ///
    /// Class indices beyond the table's length are labeled
    /// [`UNKNOWN_LABEL`]. The threshold comparison is strict, so a
    /// confidence exactly equal to it is dropped.
    pub fn rank(&self, scores: &[u8], labels: &LabelTable) -> Vec<Recognition> {
        let mut candidates: Vec<(usize, f32)> = scores
            .iter()
            .enumerate()
            .map(|(index, &raw)| (index, f32::from(raw) / QUANT_SCALE))
            .filter(|(_, confidence)| *confidence > self.config.score_threshold)
            .collect();

        // Stable sort keeps equal confidences in ascending class order.
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(self.config.max_results);

        candidates
            .into_iter()
            .map(|(index, confidence)| {
                let label = labels.get(index).unwrap_or(UNKNOWN_LABEL);
                Recognition::new(index, label, confidence)
            })
            .collect()
    }
}
