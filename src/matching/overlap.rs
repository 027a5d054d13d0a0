// Set and vector overlap measures.
//
// `ratio_overlap` is the plain Jaccard index used for every set-valued
// preference (purposes, topics, interests, communication slots).
//
//   |a ∩ b| / |a ∪ b|
//
// An empty side scores 0.0 rather than being left out: a mentee who states no
// preference in a dimension earns no affinity from it.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// Jaccard index of two sets, 0.0 if either is empty.
pub fn ratio_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of two sparse weight vectors keyed by term.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_from_weights<K: Eq + Hash>(a: &HashMap<K, f64>, b: &HashMap<K, f64>) -> f64 {
    // Iterate the smaller map for the dot product
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(key, x)| large.get(key).map(|y| x * y))
        .sum();

    let mag_a: f64 = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.values().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// Number of distinct keys shared by two weight maps.
pub fn shared_terms<K: Eq + Hash>(a: &HashMap<K, f64>, b: &HashMap<K, f64>) -> usize {
    let keys_a: HashSet<&K> = a.keys().collect();
    b.keys().filter(|k| keys_a.contains(k)).count()
}
