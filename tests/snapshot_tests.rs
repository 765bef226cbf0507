use fpl_snapshot::compare::compare;
use fpl_snapshot::model::snapshot::Snapshot;
use fpl_snapshot::report::render;

fn load_samples() -> (Snapshot, Snapshot) {
    let before = Snapshot::from_json(include_str!("sample_before.json")).expect("before sample");
    let after = Snapshot::from_json(include_str!("sample_after.json")).expect("after sample");
    (before, after)
}

#[test]
fn full_comparison_over_sample_snapshots() {
    let (before, after) = load_samples();

    let result = compare(&before, &after);

    assert_eq!(result.price_changes.len(), 1);
    assert_eq!(result.price_changes[0].name, "Salah");

    assert_eq!(result.ownership_changes.len(), 1);
    assert_eq!(result.ownership_changes[0].name, "Salah");

    assert_eq!(result.injury_updates.len(), 1);
    assert_eq!(result.injury_updates[0].name, "Haaland");

    assert_eq!(result.form_changes.len(), 1);
    assert_eq!(result.form_changes[0].name, "Haaland");

    assert_eq!(result.new_players.len(), 1);
    assert_eq!(result.new_players[0].name, "Nypan");
    assert_eq!(result.removed_players.len(), 1);
    assert_eq!(result.removed_players[0].name, "Kelleher");

    assert_eq!(result.new_results.len(), 1);
    assert_eq!(result.new_results[0].score, "2-1");
    assert_eq!(result.fixture_changes.len(), 1);

    assert!(result.diagnostics.skipped_players.is_empty());
    assert!(result.diagnostics.skipped_fixtures.is_empty());
}

#[test]
fn rendered_sample_report_contains_expected_lines() {
    let (before, after) = load_samples();
    let result = compare(&before, &after);

    let rendered = render(&result, "2025-08-29", "2025-08-30");

    assert!(rendered.contains("Comparing: 2025-08-29 -> 2025-08-30"));
    assert!(rendered.contains("  Salah: GBP13.0m -> GBP13.1m (+0.1)"), "report was: {}", rendered);
    assert!(rendered.contains("  Salah: 45.3% -> 48.0% (+2.7%)"), "report was: {}", rendered);
    assert!(rendered.contains("  Haaland: a -> i"), "report was: {}", rendered);
    assert!(rendered.contains("    News: Knee injury - expected back 1 Sep"), "report was: {}", rendered);
    assert!(rendered.contains("  Haaland: 8.2 -> 5.0 (-3.2)"), "report was: {}", rendered);
    assert!(rendered.contains("  Nypan - Team 7 - GBP5.0m"), "report was: {}", rendered);
    assert!(rendered.contains("  Kelleher - Team 5"), "report was: {}", rendered);
    assert!(rendered.contains("  GW3: Team 1 vs Team 2 - Score: 2-1"), "report was: {}", rendered);
    assert!(rendered.contains("  Fixture time changes: 1"), "report was: {}", rendered);
}

#[test]
fn unknown_wire_fields_survive_a_round_trip() {
    let (before, _) = load_samples();

    let serialized = serde_json::to_string(&before).expect("serialize snapshot");
    let reparsed = Snapshot::from_json(&serialized).expect("reparse snapshot");

    let salah = &reparsed.players[0];
    assert_eq!(salah.web_name.as_deref(), Some("Salah"));
    assert_eq!(
        salah.extra.get("total_points").and_then(|v| v.as_i64()),
        Some(24)
    );
    assert_eq!(reparsed.fixtures.len(), before.fixtures.len());
}
