// Category bonuses: style pairing, occupation fit, and age preference.
//
// Unlike the overlap ratios these key off single-value fields and pay a fixed
// number of points. The pairing tables are curated judgment calls and are
// compiled in.

use std::collections::BTreeSet;

use crate::profile::normalize::{normalize_age_band, AgeBand};

/// Points when mentee and mentor share the same style.
pub const STYLE_SAME: u32 = 5;
/// Points when the two styles form a complementary pair.
pub const STYLE_COMPLEMENT: u32 = 10;
/// Points when both styles are set but neither rule applies.
pub const STYLE_OTHER: u32 = 3;

pub const MAJOR_EXACT: u32 = 12;
pub const MAJOR_SIMILAR: u32 = 6;

pub const AGE_EXACT: u32 = 6;
pub const AGE_ADJACENT: u32 = 2;

/// Unordered style pairs that work well together, e.g. a quiet listener with
/// a mood-maker.
pub const COMPLEMENT_PAIRS: &[(&str, &str)] = &[
    ("연두부형", "분위기메이커형"),
    ("연두부형", "냉철한 조언자형"),
    ("감성 충만형", "효율추구형"),
    ("댕댕이형", "효율추구형"),
    ("분위기메이커형", "냉철한 조언자형"),
];

/// Unordered occupation categories close enough for partial credit.
pub const SIMILAR_MAJORS: &[(&str, &str)] = &[
    ("의학/보건", "의료/보건 서비스"),
    ("영업 원", "판매"),
    ("서비스", "서비스 전문"),
    ("기술/기능", "건설/시설"),
    ("운송/기계", "운송 관리"),
    ("행정관리", "일반 사무"),
];

fn in_pair_table(table: &[(&str, &str)], x: &str, y: &str) -> bool {
    table
        .iter()
        .any(|&(a, b)| (a == x && b == y) || (a == y && b == x))
}

/// Style pairing bonus. Either side unset scores 0.
pub fn style_score(mentee_style: &str, mentor_style: &str) -> u32 {
    let mentee_style = mentee_style.trim();
    let mentor_style = mentor_style.trim();
    if mentee_style.is_empty() || mentor_style.is_empty() {
        return 0;
    }
    if mentee_style == mentor_style {
        STYLE_SAME
    } else if in_pair_table(COMPLEMENT_PAIRS, mentee_style, mentor_style) {
        STYLE_COMPLEMENT
    } else {
        STYLE_OTHER
    }
}

/// Occupation bonus: exact membership in the wanted set, else a similar
/// category, else 0.
pub fn major_score(wanted_majors: &BTreeSet<String>, mentor_major: &str) -> u32 {
    let mentor_major = mentor_major.trim();
    if mentor_major.is_empty() {
        return 0;
    }
    if wanted_majors.contains(mentor_major) {
        return MAJOR_EXACT;
    }
    let similar = wanted_majors
        .iter()
        .any(|wanted| in_pair_table(SIMILAR_MAJORS, wanted, mentor_major));
    if similar {
        MAJOR_SIMILAR
    } else {
        0
    }
}

/// Age preference bonus: the mentor's band is wanted, or one step away from a
/// wanted band.
pub fn age_preference_score(wanted_ages: &BTreeSet<String>, mentor_age_band: &str) -> u32 {
    if wanted_ages.is_empty() || mentor_age_band.trim().is_empty() {
        return 0;
    }

    let normalized = normalize_age_band(mentor_age_band);
    if wanted_ages.contains(&normalized) {
        return AGE_EXACT;
    }

    // Off-scale mentor label: only a literal match above could count
    let Some(mentor_band) = AgeBand::parse(mentor_age_band) else {
        return 0;
    };

    let wanted_bands: Vec<AgeBand> = wanted_ages
        .iter()
        .filter_map(|label| AgeBand::parse(label))
        .collect();

    if wanted_bands.contains(&mentor_band) {
        AGE_EXACT
    } else if wanted_bands.iter().any(|b| b.distance(mentor_band) == 1) {
        AGE_ADJACENT
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_style_same() {
        assert_eq!(style_score("연두부형", "연두부형"), STYLE_SAME);
    }

    #[test]
    fn test_style_complement_both_orders() {
        assert_eq!(style_score("연두부형", "분위기메이커형"), STYLE_COMPLEMENT);
        assert_eq!(style_score("분위기메이커형", "연두부형"), STYLE_COMPLEMENT);
    }

    #[test]
    fn test_style_other_and_unset() {
        assert_eq!(style_score("연두부형", "댕댕이형"), STYLE_OTHER);
        assert_eq!(style_score("", "댕댕이형"), 0);
        assert_eq!(style_score("연두부형", "  "), 0);
    }

    #[test]
    fn test_major_exact_similar_none() {
        let wanted = set(&["의학/보건", "교육"]);
        assert_eq!(major_score(&wanted, "교육"), MAJOR_EXACT);
        assert_eq!(major_score(&wanted, "의료/보건 서비스"), MAJOR_SIMILAR);
        assert_eq!(major_score(&wanted, "판매"), 0);
        assert_eq!(major_score(&wanted, ""), 0);
    }

    #[test]
    fn test_major_similar_reverse_direction() {
        let wanted = set(&["의료/보건 서비스"]);
        assert_eq!(major_score(&wanted, "의학/보건"), MAJOR_SIMILAR);
    }

    #[test]
    fn test_age_exact() {
        let wanted = set(&["30–39"]);
        assert_eq!(age_preference_score(&wanted, "만 30세~39세"), AGE_EXACT);
    }

    #[test]
    fn test_age_adjacent() {
        let wanted = set(&["20–29"]);
        assert_eq!(age_preference_score(&wanted, "30–39"), AGE_ADJACENT);
        assert_eq!(age_preference_score(&wanted, "13–19"), AGE_ADJACENT);
        assert_eq!(age_preference_score(&wanted, "40–49"), 0);
    }

    #[test]
    fn test_age_wanted_in_source_labels() {
        // Wanted bands written the way the survey form writes them
        let wanted = set(&["만 40세~49세"]);
        assert_eq!(age_preference_score(&wanted, "40–49"), AGE_EXACT);
        assert_eq!(age_preference_score(&wanted, "50대"), AGE_ADJACENT);
    }

    #[test]
    fn test_age_empty_inputs() {
        assert_eq!(age_preference_score(&set(&[]), "30–39"), 0);
        assert_eq!(age_preference_score(&set(&["30–39"]), ""), 0);
    }

    #[test]
    fn test_age_unparseable_literal_match() {
        let wanted = set(&["비공개"]);
        assert_eq!(age_preference_score(&wanted, "비공개"), AGE_EXACT);
        assert_eq!(age_preference_score(&wanted, "기타"), 0);
    }
}
