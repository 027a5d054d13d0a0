// Aggregate compatibility score for one mentee/mentor pair.
//
// Each signal is scaled by a fixed weight and rounded per group:
//
//   purpose_topics = round(purpose * 18 + topics * 12)
//   communication  = round(modes * 8 + times * 6 + days * 6)
//   interests      = round(interests * 20)
//   mentor_fit     = major bonus + age bonus
//   text           = round(text similarity * 10)
//   style          = style bonus
//
// The groups are summed and clamped to [0, 100]. The maximum possible sum is
// above 100, so a near-perfect match saturates.

use serde::{Deserialize, Serialize};

use super::bonus::{age_preference_score, major_score, style_score};
use super::overlap::ratio_overlap;
use super::tfidf::TfIdfSimilarity;
use super::traits::TextSimilarity;
use crate::profile::models::{CanonicalMentor, MenteeProfile, MentorProfile};

/// Weights for the ratio-based signals. Bonus tables live in `bonus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub purpose: f64,
    pub topics: f64,
    pub comm_modes: f64,
    pub time_slots: f64,
    pub days: f64,
    pub interests: f64,
    /// Multiplier for the [0, 1] text similarity
    pub text: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            purpose: 18.0,
            topics: 12.0,
            comm_modes: 8.0,
            time_slots: 6.0,
            days: 6.0,
            interests: 20.0,
            text: 10.0,
        }
    }
}

/// The result of comparing one mentee with one mentor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Clamped sum of the parts, 0 to 100
    pub total: u32,
    pub purpose_topics: u32,
    pub communication: u32,
    pub interests: u32,
    /// Occupation plus age-preference bonus
    pub mentor_fit: u32,
    pub text: u32,
    pub style: u32,
}

impl ScoreBreakdown {
    /// Sum of the parts before clamping.
    pub fn raw_sum(&self) -> u32 {
        self.purpose_topics
            + self.communication
            + self.interests
            + self.mentor_fit
            + self.text
            + self.style
    }

    /// Labeled parts in display order.
    pub fn parts(&self) -> [(&'static str, u32); 6] {
        [
            ("Purpose & topics", self.purpose_topics),
            ("Communication", self.communication),
            ("Interests", self.interests),
            ("Mentor fit", self.mentor_fit),
            ("Text", self.text),
            ("Style", self.style),
        ]
    }
}

/// Round half to even, then floor at zero.
fn points(value: f64) -> u32 {
    let rounded = value.round_ties_even();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u32
    } else {
        0
    }
}

/// Scores mentee/mentor pairs with a fixed weighting and text signal.
pub struct Matcher {
    pub weights: MatchWeights,
    pub text_similarity: Box<dyn TextSimilarity>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            text_similarity: Box::new(TfIdfSimilarity::default()),
        }
    }
}

impl Matcher {
    pub fn new(weights: MatchWeights, text_similarity: Box<dyn TextSimilarity>) -> Self {
        Self {
            weights,
            text_similarity,
        }
    }

    /// Score one mentor row against the mentee.
    pub fn score(&self, mentee: &MenteeProfile, mentor: &MentorProfile) -> ScoreBreakdown {
        self.score_canonical(mentee, &mentor.canonical())
    }

    /// Score an already-normalized mentor.
    pub fn score_canonical(
        &self,
        mentee: &MenteeProfile,
        mentor: &CanonicalMentor,
    ) -> ScoreBreakdown {
        let w = &self.weights;

        let purpose = ratio_overlap(&mentee.purpose, &mentor.purpose);
        let topics = ratio_overlap(&mentee.topics, &mentor.topic_prefs);
        let purpose_topics = points(purpose * w.purpose + topics * w.topics);

        let modes = ratio_overlap(&mentee.comm_modes, &mentor.comm_modes);
        let times = ratio_overlap(&mentee.time_slots, &mentor.comm_time);
        let days = ratio_overlap(&mentee.days, &mentor.comm_days);
        let communication = points(modes * w.comm_modes + times * w.time_slots + days * w.days);

        let interests = points(ratio_overlap(&mentee.interests, &mentor.interests) * w.interests);

        let mentor_fit = major_score(&mentee.wanted_majors, &mentor.occupation_major)
            + age_preference_score(&mentee.wanted_mentor_ages, &mentor.age_band);

        let sim = self.text_similarity.similarity(&mentee.note, &mentor.intro);
        let text = points(sim * w.text);

        let style = style_score(&mentee.style, &mentor.style);

        let mut breakdown = ScoreBreakdown {
            total: 0,
            purpose_topics,
            communication,
            interests,
            mentor_fit,
            text,
            style,
        };
        breakdown.total = breakdown.raw_sum().min(100);
        breakdown
    }
}

/// Score one pair with the default weights and TF-IDF text signal.
pub fn compute_score(mentee: &MenteeProfile, mentor: &MentorProfile) -> ScoreBreakdown {
    Matcher::default().score(mentee, mentor)
}
