use fpl_snapshot::compare::{
    ComparisonResult, FixtureTimeChange, FormChange, InjuryUpdate, NewPlayer, NewResult,
    OwnershipChange, PriceChange, RemovedPlayer,
};
use fpl_snapshot::report::render;

fn price_change(name: &str, old: f64, new: f64) -> PriceChange {
    PriceChange {
        name: name.to_string(),
        old_price: old,
        new_price: new,
        change: new - old,
    }
}

#[test]
fn empty_result_still_renders_header_and_summary() {
    let rendered = render(&ComparisonResult::default(), "2025-08-29", "2025-08-30");

    assert!(rendered.contains("FPL DATA COMPARISON REPORT"));
    assert!(rendered.contains("Comparing: 2025-08-29 -> 2025-08-30"));
    assert!(rendered.contains("SUMMARY:"));
    assert!(rendered.contains("Price changes: 0"));
    assert!(rendered.contains("Ownership changes: 0"));
    assert!(rendered.contains("Injury updates: 0"));
    assert!(rendered.contains("Form changes: 0"));
    assert!(rendered.contains("New players: 0"));
    assert!(rendered.contains("Removed players: 0"));
    assert!(rendered.contains("New results: 0"));
    assert!(rendered.contains("Fixture time changes: 0"));
    // No empty sections.
    assert!(!rendered.contains("PRICE CHANGES:"));
    assert!(!rendered.contains("NEW MATCH RESULTS:"));
}

#[test]
fn price_section_caps_at_twenty_but_summary_counts_all() {
    let mut result = ComparisonResult::default();
    for i in 0..30 {
        result
            .price_changes
            .push(price_change(&format!("Player{:02}", i), 5.0, 5.1 + i as f64 * 0.1));
    }

    let rendered = render(&result, "a", "b");

    let listed = rendered
        .lines()
        .filter(|l| l.starts_with("  Player"))
        .count();
    assert_eq!(listed, 20);
    assert!(rendered.contains("Price changes: 30"));
}

#[test]
fn numeric_sections_sort_by_magnitude_descending() {
    let mut result = ComparisonResult::default();
    result.price_changes.push(price_change("Small", 5.0, 5.1));
    result.price_changes.push(price_change("Drop", 5.5, 5.0));
    result.price_changes.push(price_change("Mid", 5.0, 5.3));

    let rendered = render(&result, "a", "b");

    let drop = rendered.find("Drop").unwrap();
    let mid = rendered.find("Mid").unwrap();
    let small = rendered.find("Small").unwrap();
    assert!(drop < mid && mid < small, "report was: {}", rendered);
}

#[test]
fn deltas_are_signed_with_one_decimal() {
    let mut result = ComparisonResult::default();
    result.price_changes.push(price_change("Up", 5.0, 5.3));
    result.price_changes.push(price_change("Down", 5.5, 5.0));
    result.ownership_changes.push(OwnershipChange {
        name: "Gainer".to_string(),
        old_ownership: 10.0,
        new_ownership: 12.7,
        change: 2.7,
    });

    let rendered = render(&result, "a", "b");

    assert!(rendered.contains("Up: GBP5.0m -> GBP5.3m (+0.3)"), "report was: {}", rendered);
    assert!(rendered.contains("Down: GBP5.5m -> GBP5.0m (-0.5)"), "report was: {}", rendered);
    assert!(rendered.contains("Gainer: 10.0% -> 12.7% (+2.7%)"), "report was: {}", rendered);
}

#[test]
fn sections_appear_in_fixed_order() {
    let mut result = ComparisonResult::default();
    result.price_changes.push(price_change("P", 5.0, 5.1));
    result.ownership_changes.push(OwnershipChange {
        name: "O".to_string(),
        old_ownership: 1.0,
        new_ownership: 4.0,
        change: 3.0,
    });
    result.injury_updates.push(InjuryUpdate {
        name: "I".to_string(),
        old_status: "a".to_string(),
        new_status: "i".to_string(),
        news: String::new(),
    });
    result.form_changes.push(FormChange {
        name: "F".to_string(),
        old_form: 1.0,
        new_form: 3.0,
        change: 2.0,
    });
    result.new_players.push(NewPlayer {
        name: "N".to_string(),
        team: Some(7),
        price: 5.0,
    });
    result.removed_players.push(RemovedPlayer {
        name: "R".to_string(),
        team: Some(8),
    });
    result.new_results.push(NewResult {
        gameweek: 3,
        home_team: 1,
        away_team: 2,
        score: "2-1".to_string(),
    });

    let rendered = render(&result, "a", "b");

    let order = [
        "PRICE CHANGES:",
        "SIGNIFICANT OWNERSHIP CHANGES (>2%):",
        "INJURY STATUS UPDATES:",
        "SIGNIFICANT FORM CHANGES:",
        "NEW PLAYERS:",
        "REMOVED PLAYERS:",
        "NEW MATCH RESULTS:",
        "SUMMARY:",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|h| rendered.find(h).unwrap_or_else(|| panic!("missing section {}", h)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "report was: {}", rendered);
}

#[test]
fn injury_updates_keep_order_and_show_news() {
    let mut result = ComparisonResult::default();
    result.injury_updates.push(InjuryUpdate {
        name: "First".to_string(),
        old_status: "a".to_string(),
        new_status: "d".to_string(),
        news: "Knock - 75% chance of playing".to_string(),
    });
    result.injury_updates.push(InjuryUpdate {
        name: "Second".to_string(),
        old_status: "d".to_string(),
        new_status: "a".to_string(),
        news: String::new(),
    });

    let rendered = render(&result, "a", "b");

    assert!(rendered.contains("  First: a -> d\n    News: Knock - 75% chance of playing\n"));
    assert!(rendered.contains("  Second: d -> a\n"));
    assert!(rendered.find("First").unwrap() < rendered.find("Second").unwrap());
}

#[test]
fn fixture_time_changes_counted_without_their_own_section() {
    let mut result = ComparisonResult::default();
    result.fixture_changes.push(FixtureTimeChange {
        gameweek: 4,
        home_team: 1,
        away_team: 2,
        old_time: Some("2025-09-01T14:00:00Z".to_string()),
        new_time: Some("2025-09-02T14:00:00Z".to_string()),
    });

    let rendered = render(&result, "a", "b");

    assert!(rendered.contains("Fixture time changes: 1"));
    assert!(!rendered.contains("2025-09-02T14:00:00Z"));
}

#[test]
fn new_and_removed_players_render_team_and_price() {
    let mut result = ComparisonResult::default();
    result.new_players.push(NewPlayer {
        name: "Nypan".to_string(),
        team: Some(7),
        price: 5.0,
    });
    result.removed_players.push(RemovedPlayer {
        name: "Kelleher".to_string(),
        team: None,
    });

    let rendered = render(&result, "a", "b");

    assert!(rendered.contains("  Nypan - Team 7 - GBP5.0m"));
    assert!(rendered.contains("  Kelleher - Team ?"));
}
