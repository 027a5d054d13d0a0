// Unit tests for the matching engine.
//
// Tests the pure scoring functions: Jaccard overlap properties, bonus table
// symmetry, total clamping, empty-profile degradation, and ranking order.

use std::collections::BTreeSet;

use gyeol::matching::bonus::{
    age_preference_score, major_score, style_score, AGE_ADJACENT, AGE_EXACT, COMPLEMENT_PAIRS,
    SIMILAR_MAJORS, STYLE_OTHER,
};
use gyeol::matching::overlap::ratio_overlap;
use gyeol::matching::rank::rank_mentors;
use gyeol::matching::score::compute_score;
use gyeol::profile::models::{MenteeProfile, MentorProfile};
use gyeol::profile::normalize::AgeBand;
use gyeol::profile::vocab::{OCCUPATION_MAJORS, STYLES};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn full_mentor(i: usize) -> MentorProfile {
    let (style, _) = STYLES[i % STYLES.len()];
    let band = AgeBand::ALL[i % AgeBand::ALL.len()];
    MentorProfile {
        name: format!("mentor-{i}"),
        age_band: band.label().to_string(),
        occupation_major: OCCUPATION_MAJORS[i % OCCUPATION_MAJORS.len()].to_string(),
        comm_modes: "대면 만남, 일반 채팅".to_string(),
        comm_time: if i % 2 == 0 { "오전" } else { "오후; 저녁" }.to_string(),
        comm_days: "월, 수, 금".to_string(),
        style: style.to_string(),
        interests: "독서, 여행, 게임".to_string(),
        purpose: "진로 / 커리어 조언".to_string(),
        topic_prefs: "진로·직업, 건강·웰빙".to_string(),
        intro: format!("데이터 분석 커리어 {i}년차 멘토입니다"),
        ..Default::default()
    }
}

fn busy_mentee() -> MenteeProfile {
    MenteeProfile {
        purpose: set(&["진로 / 커리어 조언", "학업 / 전문지식 조언"]),
        topics: set(&["진로·직업"]),
        interests: set(&["독서", "여행"]),
        comm_modes: set(&["일반 채팅"]),
        time_slots: set(&["오후"]),
        days: set(&["월", "화"]),
        style: "연두부형".to_string(),
        wanted_majors: set(&["교육", "의학/보건"]),
        wanted_mentor_ages: set(&["30–39"]),
        note: "데이터 분석 커리어 상담".to_string(),
    }
}

// ============================================================
// ratio_overlap: Jaccard properties
// ============================================================

#[test]
fn overlap_matches_jaccard_definition() {
    let cases = [
        (set(&["a", "b"]), set(&["b", "c"]), 1.0 / 3.0),
        (set(&["a"]), set(&["a"]), 1.0),
        (set(&["a", "b", "c", "d"]), set(&["a", "b"]), 0.5),
        (set(&["x"]), set(&["y"]), 0.0),
    ];
    for (a, b, expected) in cases {
        let got = ratio_overlap(&a, &b);
        assert!((got - expected).abs() < 1e-9, "{a:?} vs {b:?}: got {got}");
    }
}

#[test]
fn overlap_is_symmetric() {
    let sets = [
        set(&[]),
        set(&["a"]),
        set(&["a", "b"]),
        set(&["b", "c", "d"]),
    ];
    for a in &sets {
        for b in &sets {
            assert_eq!(ratio_overlap(a, b), ratio_overlap(b, a));
        }
    }
}

#[test]
fn overlap_empty_side_scores_zero() {
    assert_eq!(ratio_overlap(&set(&[]), &set(&["a"])), 0.0);
}

// ============================================================
// Bonus tables
// ============================================================

#[test]
fn complement_pairs_symmetric_and_above_default() {
    for (a, b) in COMPLEMENT_PAIRS {
        let forward = style_score(a, b);
        let backward = style_score(b, a);
        assert_eq!(forward, backward, "{a} / {b}");
        assert!(forward > STYLE_OTHER, "{a} / {b} should beat the default bonus");
    }
}

#[test]
fn complement_pairs_use_known_styles() {
    for (a, b) in COMPLEMENT_PAIRS {
        assert!(STYLES.iter().any(|(s, _)| s == a), "{a}");
        assert!(STYLES.iter().any(|(s, _)| s == b), "{b}");
    }
}

#[test]
fn similar_majors_symmetric_and_known() {
    for (a, b) in SIMILAR_MAJORS {
        assert_eq!(major_score(&set(&[*a]), b), major_score(&set(&[*b]), a));
        assert!(OCCUPATION_MAJORS.contains(a), "{a}");
        assert!(OCCUPATION_MAJORS.contains(b), "{b}");
    }
}

#[test]
fn age_adjacent_band_gets_smaller_bonus() {
    let wanted = set(&["20–29"]);
    let score = age_preference_score(&wanted, "30–39");
    assert_eq!(score, AGE_ADJACENT);
    assert!(score < AGE_EXACT);
    assert!(score > 0);
}

#[test]
fn age_two_bands_away_scores_zero() {
    assert_eq!(age_preference_score(&set(&["20–29"]), "40–49"), 0);
}

// ============================================================
// compute_score: boundedness and degradation
// ============================================================

#[test]
fn total_always_within_bounds() {
    let mentee = busy_mentee();
    for i in 0..40 {
        let breakdown = compute_score(&mentee, &full_mentor(i));
        assert!(breakdown.total <= 100, "mentor {i}: {breakdown:?}");
        assert_eq!(breakdown.total, breakdown.raw_sum().min(100));
    }
}

#[test]
fn empty_mentee_scores_zero_everywhere() {
    let mentee = MenteeProfile::default();
    for i in 0..12 {
        let breakdown = compute_score(&mentee, &full_mentor(i));
        assert_eq!(breakdown.total, 0, "mentor {i}: {breakdown:?}");
        assert_eq!(breakdown.raw_sum(), 0);
    }
}

#[test]
fn empty_mentor_row_scores_zero() {
    let breakdown = compute_score(&busy_mentee(), &MentorProfile::default());
    assert_eq!(breakdown.total, 0);
}

#[test]
fn empty_sets_still_allow_bonuses() {
    // No set preferences at all, but single-value fields set
    let mentee = MenteeProfile {
        style: "연두부형".to_string(),
        wanted_majors: set(&["교육"]),
        ..Default::default()
    };
    let mentor = MentorProfile {
        style: "냉철한 조언자형".to_string(),
        occupation_major: "교육".to_string(),
        interests: "독서".to_string(),
        ..Default::default()
    };
    let breakdown = compute_score(&mentee, &mentor);
    assert_eq!(breakdown.interests, 0);
    assert_eq!(breakdown.mentor_fit, 12);
    assert_eq!(breakdown.style, 10);
    assert_eq!(breakdown.total, 22);
}

#[test]
fn communication_overlap_weights() {
    let mentee = MenteeProfile {
        comm_modes: set(&["일반 채팅"]),
        time_slots: set(&["오후"]),
        days: set(&["월"]),
        ..Default::default()
    };
    let mentor = MentorProfile {
        comm_modes: "일반 채팅".to_string(),
        comm_time: "오후, 저녁".to_string(),
        comm_days: "화".to_string(),
        ..Default::default()
    };
    // 1.0 * 8 + 0.5 * 6 + 0 * 6 = 11
    assert_eq!(compute_score(&mentee, &mentor).communication, 11);
}

#[test]
fn similar_notes_earn_text_points() {
    let mentee = MenteeProfile {
        note: "데이터 분석 커리어 상담".to_string(),
        ..Default::default()
    };
    let close = MentorProfile {
        intro: "데이터 분석 커리어 10년차".to_string(),
        ..Default::default()
    };
    let far = MentorProfile {
        intro: "요리와 베이킹을 좋아합니다".to_string(),
        ..Default::default()
    };
    let close_score = compute_score(&mentee, &close);
    assert!(close_score.text > 0 && close_score.text <= 10);
    assert_eq!(compute_score(&mentee, &far).text, 0);
}

// ============================================================
// rank_mentors
// ============================================================

#[test]
fn ranking_truncates_and_sorts_descending() {
    let mentee = busy_mentee();
    let mentors: Vec<MentorProfile> = (0..12).map(full_mentor).collect();
    for k in [0, 1, 5, 12, 50] {
        let ranked = rank_mentors(&mentee, &mentors, k);
        assert_eq!(ranked.len(), k.min(mentors.len()));
        for pair in ranked.windows(2) {
            assert!(pair[0].breakdown.total >= pair[1].breakdown.total);
        }
    }
}

#[test]
fn ranking_does_not_touch_input() {
    let mentee = busy_mentee();
    let mentors: Vec<MentorProfile> = (0..6).map(full_mentor).collect();
    let before = mentors.clone();
    let _ = rank_mentors(&mentee, &mentors, 3);
    assert_eq!(mentors, before);
}
