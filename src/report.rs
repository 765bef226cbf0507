use std::fmt::Write;

use crate::compare::ComparisonResult;

/// Display caps per category. Sorting and capping only affect what is
/// printed; summary counts always reflect the full totals.
const PRICE_LIMIT: usize = 20;
const OWNERSHIP_LIMIT: usize = 15;
const INJURY_LIMIT: usize = 20;
const FORM_LIMIT: usize = 15;

/// Render the full comparison report. Pure function of the result and the
/// two snapshot labels; deterministic for a given input.
pub fn render(result: &ComparisonResult, label_before: &str, label_after: &str) -> String {
    let mut out = String::new();

    let rule = "=".repeat(60);
    out.push_str(&rule);
    out.push('\n');
    out.push_str("FPL DATA COMPARISON REPORT\n");
    let _ = writeln!(out, "Comparing: {} -> {}", label_before, label_after);
    out.push_str(&rule);
    out.push_str("\n\n");

    if !result.price_changes.is_empty() {
        section_header(&mut out, "PRICE CHANGES:");
        for change in top_by_magnitude(&result.price_changes, |c| c.change, PRICE_LIMIT) {
            let _ = writeln!(
                out,
                "  {}: GBP{:.1}m -> GBP{:.1}m ({})",
                change.name,
                change.old_price,
                change.new_price,
                signed(change.change)
            );
        }
        out.push('\n');
    }

    if !result.ownership_changes.is_empty() {
        section_header(&mut out, "SIGNIFICANT OWNERSHIP CHANGES (>2%):");
        for change in top_by_magnitude(&result.ownership_changes, |c| c.change, OWNERSHIP_LIMIT) {
            let _ = writeln!(
                out,
                "  {}: {:.1}% -> {:.1}% ({}%)",
                change.name,
                change.old_ownership,
                change.new_ownership,
                signed(change.change)
            );
        }
        out.push('\n');
    }

    if !result.injury_updates.is_empty() {
        section_header(&mut out, "INJURY STATUS UPDATES:");
        for update in result.injury_updates.iter().take(INJURY_LIMIT) {
            let _ = writeln!(
                out,
                "  {}: {} -> {}",
                update.name, update.old_status, update.new_status
            );
            if !update.news.is_empty() {
                let _ = writeln!(out, "    News: {}", update.news);
            }
        }
        out.push('\n');
    }

    if !result.form_changes.is_empty() {
        section_header(&mut out, "SIGNIFICANT FORM CHANGES:");
        for change in top_by_magnitude(&result.form_changes, |c| c.change, FORM_LIMIT) {
            let _ = writeln!(
                out,
                "  {}: {:.1} -> {:.1} ({})",
                change.name,
                change.old_form,
                change.new_form,
                signed(change.change)
            );
        }
        out.push('\n');
    }

    if !result.new_players.is_empty() {
        section_header(&mut out, "NEW PLAYERS:");
        for player in &result.new_players {
            let _ = writeln!(
                out,
                "  {} - Team {} - GBP{:.1}m",
                player.name,
                team_label(player.team),
                player.price
            );
        }
        out.push('\n');
    }

    if !result.removed_players.is_empty() {
        section_header(&mut out, "REMOVED PLAYERS:");
        for player in &result.removed_players {
            let _ = writeln!(out, "  {} - Team {}", player.name, team_label(player.team));
        }
        out.push('\n');
    }

    if !result.new_results.is_empty() {
        section_header(&mut out, "NEW MATCH RESULTS:");
        for res in &result.new_results {
            let _ = writeln!(
                out,
                "  GW{}: Team {} vs Team {} - Score: {}",
                res.gameweek, res.home_team, res.away_team, res.score
            );
        }
        out.push('\n');
    }

    section_header(&mut out, "SUMMARY:");
    let _ = writeln!(out, "  Price changes: {}", result.price_changes.len());
    let _ = writeln!(out, "  Ownership changes: {}", result.ownership_changes.len());
    let _ = writeln!(out, "  Injury updates: {}", result.injury_updates.len());
    let _ = writeln!(out, "  Form changes: {}", result.form_changes.len());
    let _ = writeln!(out, "  New players: {}", result.new_players.len());
    let _ = writeln!(out, "  Removed players: {}", result.removed_players.len());
    let _ = writeln!(out, "  New results: {}", result.new_results.len());
    let _ = writeln!(out, "  Fixture time changes: {}", result.fixture_changes.len());

    out
}

fn section_header(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(40));
    out.push('\n');
}

/// Stable sort by |delta| descending, capped. Ties keep upstream order.
fn top_by_magnitude<T>(entries: &[T], delta: impl Fn(&T) -> f64, limit: usize) -> Vec<&T> {
    let mut sorted: Vec<&T> = entries.iter().collect();
    sorted.sort_by(|a, b| delta(b).abs().total_cmp(&delta(a).abs()));
    sorted.truncate(limit);
    sorted
}

/// One decimal place, explicit leading + for positive values.
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn team_label(team: Option<i64>) -> String {
    team.map_or_else(|| "?".to_string(), |t| t.to_string())
}
