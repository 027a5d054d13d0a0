// TF-IDF cosine similarity between a mentee's note and a mentor's intro.
//
// The corpus is just the two texts being compared. Terms are lowercase word
// runs of two or more characters plus the bigrams formed from them, the
// vocabulary is capped to the most frequent terms, IDF is smoothed
// (ln((1 + n) / (1 + df)) + 1) and each document vector is L2-normalized.
//
// This is bag-of-words similarity, not semantics. It is good enough to reward
// a note and an intro that talk about the same things.

use std::collections::HashMap;

use tracing::debug;

use super::overlap::{cosine_from_weights, shared_terms};
use super::traits::TextSimilarity;

/// Sparse TF-IDF vectorizer fitted per call on a small corpus.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Keep at most this many terms, by total count across the corpus
    pub max_features: usize,
    /// Longest n-gram to include (1 = unigrams only)
    pub max_ngram: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            max_features: 500,
            max_ngram: 2,
        }
    }
}

impl TfIdfVectorizer {
    /// Split text into lowercase word tokens of at least two characters.
    ///
    /// A word character is any alphanumeric character or underscore, so Hangul
    /// and Latin text tokenize the same way.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|word| word.chars().count() >= 2)
            .map(str::to_string)
            .collect()
    }

    /// Unigrams through `max_ngram`-grams of a token sequence.
    fn terms(&self, tokens: &[String]) -> Vec<String> {
        let mut terms = Vec::new();
        for n in 1..=self.max_ngram.max(1) {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }

    /// Fit on `documents` and return one normalized term-weight map per document.
    ///
    /// Documents that share no vocabulary with the capped term list come back
    /// as empty maps.
    pub fn fit_transform(&self, documents: &[&str]) -> Vec<HashMap<String, f64>> {
        let counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for term in self.terms(&Self::tokenize(doc)) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Corpus frequency and document frequency per term
        let mut corpus_freq: HashMap<&str, u32> = HashMap::new();
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        for tf in &counts {
            for (term, count) in tf {
                *corpus_freq.entry(term.as_str()).or_insert(0) += count;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        // Cap the vocabulary, most frequent first, ties broken alphabetically
        let mut ranked: Vec<(&str, u32)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let n_docs = documents.len() as f64;
        let idf: HashMap<&str, f64> = ranked
            .iter()
            .map(|(term, _)| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                (*term, ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        counts
            .iter()
            .map(|tf| {
                let mut weights: HashMap<String, f64> = tf
                    .iter()
                    .filter_map(|(term, count)| {
                        idf.get(term.as_str())
                            .map(|w| (term.clone(), *count as f64 * w))
                    })
                    .collect();
                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for w in weights.values_mut() {
                        *w /= norm;
                    }
                }
                weights
            })
            .collect()
    }
}

/// TF-IDF cosine similarity of two texts.
///
/// Either text blank after trimming gives 0.0 without vectorizing.
pub fn tfidf_similarity(text_a: &str, text_b: &str) -> f64 {
    TfIdfSimilarity::default().similarity(text_a, text_b)
}

/// The default `TextSimilarity` for the scorer.
#[derive(Debug, Clone, Default)]
pub struct TfIdfSimilarity {
    pub vectorizer: TfIdfVectorizer,
}

impl TextSimilarity for TfIdfSimilarity {
    fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let a = text_a.trim();
        let b = text_b.trim();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let vectors = self.vectorizer.fit_transform(&[a, b]);
        let (va, vb) = (&vectors[0], &vectors[1]);
        let sim = cosine_from_weights(va, vb);

        debug!(
            terms_a = va.len(),
            terms_b = vb.len(),
            shared = shared_terms(va, vb),
            similarity = format!("{:.3}", sim),
            "TF-IDF text similarity"
        );

        sim
    }
}
