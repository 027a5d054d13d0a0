// Ranking: score every mentor, sort by total, keep the top K.
//
// Full scan with no index: mentor pools are tens to low hundreds of rows.
// The sort is stable, so mentors with equal totals keep table order.

use serde::Serialize;
use tracing::{debug, info};

use super::score::{Matcher, ScoreBreakdown};
use crate::profile::models::{MenteeProfile, MentorProfile};

/// How many recommendations to show by default.
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMentor<'a> {
    /// Row position in the mentor table
    pub index: usize,
    pub mentor: &'a MentorProfile,
    pub breakdown: ScoreBreakdown,
}

impl Matcher {
    /// Rank `mentors` for `mentee` and keep the first `k`.
    pub fn rank<'a>(
        &self,
        mentee: &MenteeProfile,
        mentors: &'a [MentorProfile],
        k: usize,
    ) -> Vec<RankedMentor<'a>> {
        let mut ranked: Vec<RankedMentor<'a>> = mentors
            .iter()
            .enumerate()
            .map(|(index, mentor)| {
                let breakdown = self.score(mentee, mentor);
                debug!(
                    mentor = mentor.display_name(),
                    total = breakdown.total,
                    "Scored mentor"
                );
                RankedMentor {
                    index,
                    mentor,
                    breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.breakdown.total.cmp(&a.breakdown.total));
        ranked.truncate(k);

        info!(
            candidates = mentors.len(),
            returned = ranked.len(),
            top_score = ranked.first().map(|r| r.breakdown.total).unwrap_or(0),
            "Ranked mentors"
        );

        ranked
    }
}

/// Rank with the default matcher.
pub fn rank_mentors<'a>(
    mentee: &MenteeProfile,
    mentors: &'a [MentorProfile],
    k: usize,
) -> Vec<RankedMentor<'a>> {
    Matcher::default().rank(mentee, mentors, k)
}
