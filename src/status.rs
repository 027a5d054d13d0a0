// Status display: mentor table source plus scoring sanity checks.
//
// The checks run a fixed reference mentee against every loaded mentor and make
// sure each breakdown part stays under its ceiling and the total is the
// clamped sum, then confirm the complementary style bonus fires for a known
// pair.

use std::collections::BTreeSet;

use colored::Colorize;
use tracing::warn;

use crate::data::loader::{MentorSource, MentorTable};
use crate::matching::bonus::{AGE_EXACT, MAJOR_EXACT, STYLE_COMPLEMENT};
use crate::matching::score::{MatchWeights, Matcher, ScoreBreakdown};
use crate::profile::models::{MenteeProfile, MentorProfile};

/// Outcome of the scoring sanity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityReport {
    pub mentors_checked: usize,
    /// Names of mentors whose breakdown broke a part ceiling or the total rule
    pub out_of_bounds: Vec<String>,
    pub complement_bonus_ok: bool,
}

impl SanityReport {
    pub fn passed(&self) -> bool {
        self.out_of_bounds.is_empty() && self.complement_bonus_ok
    }
}

/// A mentee with a bit of everything filled in.
pub fn reference_mentee() -> MenteeProfile {
    let set = |items: &[&str]| -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    };
    MenteeProfile {
        purpose: set(&["진로 / 커리어 조언"]),
        topics: set(&["진로·직업"]),
        interests: set(&["독서", "여행"]),
        comm_modes: set(&["일반 채팅"]),
        time_slots: set(&["오후"]),
        days: set(&["화"]),
        style: "연두부형".to_string(),
        wanted_majors: set(&["연구개발/ IT"]),
        wanted_mentor_ages: set(&["30–39"]),
        note: "데이터 분야 진로 상담".to_string(),
    }
}

/// Whether every part of a breakdown is within what its weight or bonus table
/// allows, and the total is the sum clamped to 100.
pub fn breakdown_in_bounds(weights: &MatchWeights, b: &ScoreBreakdown) -> bool {
    let ceiling = |max: f64| max.max(0.0).ceil() as u32;
    b.purpose_topics <= ceiling(weights.purpose + weights.topics)
        && b.communication <= ceiling(weights.comm_modes + weights.time_slots + weights.days)
        && b.interests <= ceiling(weights.interests)
        && b.mentor_fit <= MAJOR_EXACT + AGE_EXACT
        && b.text <= ceiling(weights.text)
        && b.style <= STYLE_COMPLEMENT
        && b.total == b.raw_sum().min(100)
}

/// Run the sanity checks against a mentor table.
pub fn run_sanity_checks(matcher: &Matcher, mentors: &[MentorProfile]) -> SanityReport {
    let reference = reference_mentee();
    let out_of_bounds: Vec<String> = mentors
        .iter()
        .filter(|m| !breakdown_in_bounds(&matcher.weights, &matcher.score(&reference, m)))
        .map(|m| m.display_name().to_string())
        .collect();

    // Style-only pair: only the complementary bonus should score
    let style_mentee = MenteeProfile {
        style: "연두부형".to_string(),
        ..Default::default()
    };
    let style_mentor = MentorProfile {
        style: "분위기메이커형".to_string(),
        age_band: "30–39".to_string(),
        ..Default::default()
    };
    let style_score = matcher.score(&style_mentee, &style_mentor);
    let complement_bonus_ok =
        style_score.style == STYLE_COMPLEMENT && style_score.total == STYLE_COMPLEMENT;

    SanityReport {
        mentors_checked: mentors.len(),
        out_of_bounds,
        complement_bonus_ok,
    }
}

/// Display system status to the terminal.
pub fn show(table: &MentorTable, matcher: &Matcher) {
    match &table.source {
        MentorSource::File(path) => println!("Mentor table: {}", path.display()),
        MentorSource::Fallback => {
            println!("Mentor table: {}", "not found, using the built-in default mentor".yellow());
            println!("  Set GYEOL_MENTORS_CSV or pass --mentors to load one");
        }
    }
    println!("Mentors loaded: {}", table.mentors.len());

    let unstyled = table.mentors.iter().filter(|m| m.style.trim().is_empty()).count();
    if unstyled > 0 {
        println!("  {} mentors have no communication style", unstyled);
    }

    let report = run_sanity_checks(matcher, &table.mentors);
    let range_str = if report.out_of_bounds.is_empty() {
        "PASS".green().to_string()
    } else {
        warn!(mentors = ?report.out_of_bounds, "Score breakdowns out of bounds");
        "FAIL".red().to_string()
    };
    let style_str = if report.complement_bonus_ok {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    };
    println!(
        "Score bounds check ({} mentors): {}",
        report.mentors_checked, range_str
    );
    println!("Complementary style bonus check: {}", style_str);
}
