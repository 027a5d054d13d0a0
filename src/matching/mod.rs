// Matching engine: sub-scores, aggregate scoring, and ranking.

pub mod bonus;
pub mod overlap;
pub mod rank;
pub mod score;
pub mod tfidf;
pub mod traits;
