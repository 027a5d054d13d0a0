// Colored terminal output for recommendations, mentor lists and vocabularies.
//
// main.rs delegates all display work here.

use colored::Colorize;

use super::{or_dash, truncate_chars};
use crate::matching::rank::RankedMentor;
use crate::matching::score::ScoreBreakdown;
use crate::profile::models::MentorProfile;
use crate::profile::vocab;

/// Display ranked recommendation cards.
pub fn display_recommendations(ranked: &[RankedMentor<'_>]) {
    if ranked.is_empty() {
        println!("No recommendations. Check the mentor table and your survey answers.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Recommended Mentors (top {}) ===", ranked.len()).bold()
    );

    for (i, item) in ranked.iter().enumerate() {
        let m = item.mentor;
        println!(
            "\n  #{}. {} · {} · {}",
            i + 1,
            m.display_name().bold(),
            or_dash(&m.occupation_major),
            or_dash(&m.age_band),
        );
        println!("      Total: {}", colorize_total(item.breakdown.total));
        display_breakdown(&item.breakdown, "      ");
        println!(
            "      Contact: {} | {} | {}   Style: {}",
            or_dash(&m.comm_modes),
            or_dash(&m.comm_time),
            or_dash(&m.comm_days),
            or_dash(&m.style),
        );
        println!(
            "      Interests: {}   Purpose: {}   Topics: {}",
            or_dash(&m.interests),
            or_dash(&m.purpose),
            or_dash(&m.topic_prefs),
        );
        if !m.intro.trim().is_empty() {
            println!("      {}", truncate_chars(m.intro.trim(), 100).dimmed());
        }
    }
    println!();
}

/// Display the full breakdown for a single mentor.
pub fn display_score_detail(mentor: &MentorProfile, breakdown: &ScoreBreakdown) {
    println!(
        "\n{}",
        format!("=== Match with {} ===", mentor.display_name()).bold()
    );
    println!("  Total: {}/100", colorize_total(breakdown.total));
    if breakdown.raw_sum() > breakdown.total {
        println!(
            "  {}",
            format!("(raw sum {} capped at 100)", breakdown.raw_sum()).dimmed()
        );
    }
    display_breakdown(breakdown, "  ");
    if !mentor.intro.trim().is_empty() {
        println!("\n  Intro: {}", mentor.intro.trim());
    }
}

/// Display every loaded mentor, one line each.
pub fn display_mentor_list(mentors: &[MentorProfile]) {
    if mentors.is_empty() {
        println!("The mentor table is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Mentor Table ({} mentors) ===", mentors.len()).bold()
    );
    println!(
        "  {:>4}  {:<12} {:<10} {:<20} {}",
        "#".dimmed(),
        "Name".dimmed(),
        "Age".dimmed(),
        "Occupation".dimmed(),
        "Style".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());
    for (i, m) in mentors.iter().enumerate() {
        println!(
            "  {:>4}. {:<12} {:<10} {:<20} {}",
            i + 1,
            m.display_name(),
            or_dash(&m.age_band),
            or_dash(&m.occupation_major),
            or_dash(&m.style),
        );
    }
    println!();
}

/// Print the survey vocabularies.
pub fn display_vocab() {
    print_list("Genders", vocab::GENDERS);
    print_list("Communication modes", vocab::COMM_MODES);
    print_list("Time slots", vocab::TIME_SLOTS);
    print_list("Days", vocab::DAYS);

    println!("\n{}", "Styles".bold());
    for (name, description) in vocab::STYLES {
        println!("  {:<16} {}", name, description.dimmed());
    }

    print_list("Purposes", vocab::PURPOSES);
    print_list("Topics", vocab::TOPIC_PREFS);
    print_list("Occupation majors", vocab::OCCUPATION_MAJORS);

    println!("\n{}", "Interests".bold());
    for (group, items) in vocab::INTEREST_GROUPS {
        println!("  {}: {}", group, items.join(", ").dimmed());
    }

    let bands: Vec<&str> = crate::profile::normalize::AgeBand::ALL
        .iter()
        .map(|b| b.label())
        .collect();
    print_list("Age bands", &bands);
    println!();
}

fn print_list(title: &str, items: &[&str]) {
    println!("\n{}", title.bold());
    println!("  {}", items.join(" | "));
}

fn display_breakdown(breakdown: &ScoreBreakdown, indent: &str) {
    for (label, value) in breakdown.parts() {
        println!("{indent}- {:<18} {:>3}", label, value);
    }
}

/// Color a total by how strong the match is.
fn colorize_total(total: u32) -> colored::ColoredString {
    let text = total.to_string();
    match total {
        60.. => text.green().bold(),
        35..=59 => text.yellow(),
        _ => text.dimmed(),
    }
}
