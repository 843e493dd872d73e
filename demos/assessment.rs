//! # Social Styles Assessment Walkthrough
//!
//! Plays one respondent through the questionnaire: partial progress, a rejected
//! submission, a change of mind, the final score and profile. Then scores a small
//! team and plots everyone on the grid.
//!
//! Run with: `cargo run --example assessment`

use social_styles_core::profile::profile;
use social_styles_core::questions::{question, ASSESSMENT_NAME, QUESTIONS};
use social_styles_core::{
    score, score_values, AnswerSheet, AxisScore, DisplayConfig, Likert, QuestionId,
    ScoreResult, SocialStyle, TeamRoster,
};

// ── Respondent ───────────────────────────────────────────────────────────────

/// Responses for a fairly direct, fairly reserved respondent.
const RESPONSES: [i32; 30] = [
    3, 3, 2, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, //
    2, 2, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2,
];

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(percent: u8) -> String {
    let filled = usize::from(percent) / 5;
    format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(20 - filled), percent)
}

fn swatch(style: SocialStyle) -> String {
    let [r, g, b] = style.accent_rgb();
    format!("#{r:02X}{g:02X}{b:02X}")
}

const SIZE: usize = 13;
const MID: usize = SIZE / 2;

/// Grid cell for an axis score, 1.0 at the bottom/left. Low scores fill the
/// cells before the divider and high scores the cells after it, so a mark
/// never lands on the divider and always sits in its own quadrant.
fn cell(axis: AxisScore) -> usize {
    let half = (MID - 1) as f64;
    if axis.is_high() {
        MID + 1 + ((axis.mean() - 2.5) / 1.5 * half).round().max(0.0) as usize
    } else {
        ((axis.mean() - 1.0) / 1.5 * half).round().clamp(0.0, half) as usize
    }
}

/// Place results on a 13×13 character grid with the quadrant lines in the middle.
fn plot(points: &[(char, &ScoreResult)]) {
    let mut grid = [[' '; SIZE]; SIZE];
    for &(mark, result) in points {
        let col = cell(result.responsiveness());
        let row = cell(result.assertiveness());
        grid[SIZE - 1 - row][col] = mark;
    }
    println!("  assert ↑   DRIVER      │ EXPRESSIVE");
    for (i, line) in grid.iter().enumerate() {
        let cells: String = line
            .iter()
            .enumerate()
            .map(|(j, &c)| match (i == MID, j == MID) {
                (true, true) => '┼',
                (true, false) => '─',
                (false, true) => '│',
                (false, false) => c,
            })
            .collect();
        println!("           {cells}");
    }
    println!("             ANALYTICAL  │ AMIABLE    → respond");
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    let cfg = DisplayConfig::default();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  {ASSESSMENT_NAME:<58}  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // ── Partial progress ──────────────────────────────────────────────────────
    let mut sheet = AnswerSheet::new();
    for (i, &value) in RESPONSES.iter().enumerate().take(12) {
        if let Err(e) = sheet.record_raw(i as u32 + 1, value) {
            println!("  rejected: {e}");
        }
    }
    println!("▶  After the first page");
    println!("   {}", bar(sheet.progress().percent()));
    if let Some(next) = sheet.next_unanswered() {
        println!("   next: {next} \"{}\"\n", question(next).text);
    }

    // ── Early submit ──────────────────────────────────────────────────────────
    println!("▶  Submitting early");
    match sheet.to_answer_set() {
        Ok(_) => println!("   unexpectedly complete"),
        Err(e) => println!("   {e}\n"),
    }

    // ── Bad value ─────────────────────────────────────────────────────────────
    println!("▶  A tampered form posts 5 for question 13");
    if let Err(e) = sheet.record_raw(13, 5) {
        println!("   {e}\n");
    }

    // ── Finish ────────────────────────────────────────────────────────────────
    for (i, &value) in RESPONSES.iter().enumerate().skip(12) {
        if let Err(e) = sheet.record_raw(i as u32 + 1, value) {
            println!("  rejected: {e}");
        }
    }
    if let Ok(q) = QuestionId::new(4) {
        let before = sheet.record(q, Likert::SomewhatAgree);
        println!(
            "▶  Changed mind on {q}: {} → {}",
            before.map_or("none", Likert::label),
            Likert::SomewhatAgree.label()
        );
    }
    println!("   {}\n", bar(sheet.progress().percent()));

    let answers = match sheet.to_answer_set() {
        Ok(a) => a,
        Err(e) => {
            println!("   cannot score: {e}");
            return;
        }
    };
    let result = score(&answers);
    let shown = result.display(&cfg);
    let p = profile(result.style());

    println!("▶  Result");
    println!("   assertiveness   {}  (sum {})", shown.assertiveness, result.assertiveness().sum());
    println!("   responsiveness  {}  (sum {})", shown.responsiveness, result.responsiveness().sum());
    println!("   style           {} {}", shown.style.label(), swatch(shown.style));
    println!("\n   {}", p.description);
    println!("\n   Strengths:");
    for s in p.strengths {
        println!("     + {s}");
    }
    println!("   Growth tips:");
    for t in p.tips {
        println!("     → {t}");
    }

    // ── Team ──────────────────────────────────────────────────────────────────
    println!("\n▶  Team of five ({} statements each)\n", QUESTIONS.len());
    let mut team: TeamRoster<char> = TeamRoster::new();
    team.record('Y', result);
    let colleagues: [(char, i32, i32); 4] = [('A', 4, 1), ('B', 2, 4), ('C', 3, 3), ('D', 1, 2)];
    for (mark, a, r) in colleagues {
        let mut values = [r; 30];
        values[..15].fill(a);
        match score_values(&values) {
            Ok(res) => {
                team.record(mark, res);
            }
            Err(e) => println!("  {mark}: {e}"),
        }
    }

    let mut points: Vec<(char, &ScoreResult)> = team.iter().map(|(&m, r)| (m, r)).collect();
    points.sort_by_key(|(m, _)| *m);
    plot(&points);

    let dist = team.distribution();
    println!();
    for (style, n) in dist.iter() {
        println!("   {:<11} {n}  ({:.0}%)", style.label(), dist.share(style) * 100.0);
    }
    match dist.dominant() {
        Some(style) => println!("   dominant: {}", style.label()),
        None => println!("   dominant: none (tie)"),
    }
    if let Some(c) = team.centroid() {
        let shown = c.display(&cfg);
        println!(
            "   team centroid: assertiveness {}, responsiveness {} → {}",
            shown.assertiveness,
            shown.responsiveness,
            shown.style.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(sum: u32) -> AxisScore {
        AxisScore::from_parts(sum, 15).unwrap()
    }

    #[test]
    fn test_cells_skip_the_divider() {
        for sum in 15..=60 {
            assert_ne!(cell(axis(sum)), MID, "sum {sum}");
        }
    }

    #[test]
    fn test_cutoff_neighbours_land_on_their_own_side() {
        // 37/15 is low, 38/15 is the lowest high score
        assert_eq!(cell(axis(37)), MID - 1);
        assert_eq!(cell(axis(38)), MID + 1);
        assert_eq!(cell(axis(15)), 0);
        assert_eq!(cell(axis(60)), SIZE - 1);
    }

    #[test]
    fn test_exact_cutoff_centroid_is_high() {
        let merged = AxisScore::from_parts(75, 30).unwrap();
        assert!(merged.is_high());
        assert_eq!(cell(merged), MID + 1);
    }
}
