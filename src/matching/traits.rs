// Text similarity trait: swap-ready abstraction for the free-text signal.
//
// The default implementation is TF-IDF cosine similarity over the two texts.
// A semantic model could replace it without touching the scorer.

/// Similarity of two short free texts, in [0.0, 1.0].
pub trait TextSimilarity: Send + Sync {
    fn similarity(&self, text_a: &str, text_b: &str) -> f64;
}

/// Scores every pair as 0.0. Used when the text signal is switched off.
pub struct NoopSimilarity;

impl TextSimilarity for NoopSimilarity {
    fn similarity(&self, _text_a: &str, _text_b: &str) -> f64 {
        0.0
    }
}
