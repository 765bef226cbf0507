use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::model::fixture::Fixture;
use crate::model::numeric::Numeric;
use crate::model::player::Player;
use crate::model::snapshot::Snapshot;

/// Ownership swings at or below this many percentage points are noise and
/// are not reported.
const OWNERSHIP_THRESHOLD: f64 = 2.0;
/// Form swings at or below this are not reported.
const FORM_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChange {
    pub name: String,
    pub old_price: f64,
    pub new_price: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnershipChange {
    pub name: String,
    pub old_ownership: f64,
    pub new_ownership: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InjuryUpdate {
    pub name: String,
    pub old_status: String,
    pub new_status: String,
    pub news: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormChange {
    pub name: String,
    pub old_form: f64,
    pub new_form: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub team: Option<i64>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovedPlayer {
    pub name: String,
    pub team: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewResult {
    pub gameweek: i64,
    pub home_team: i64,
    pub away_team: i64,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureTimeChange {
    pub gameweek: i64,
    pub home_team: i64,
    pub away_team: i64,
    pub old_time: Option<String>,
    pub new_time: Option<String>,
}

/// Records skipped during indexing because a required field was missing.
/// Empty after a clean comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub skipped_players: Vec<i64>,
    pub skipped_fixtures: Vec<i64>,
    /// Records with no usable id at all; nothing to report beyond a count.
    pub unidentified_records: usize,
}

/// Everything that changed between two snapshots. Built fresh per call to
/// [`compare`], never mutated afterwards. Category order within each list
/// follows ascending identifier order; presentation order is the
/// renderer's business.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonResult {
    pub price_changes: Vec<PriceChange>,
    pub ownership_changes: Vec<OwnershipChange>,
    pub injury_updates: Vec<InjuryUpdate>,
    pub form_changes: Vec<FormChange>,
    pub new_players: Vec<NewPlayer>,
    pub removed_players: Vec<RemovedPlayer>,
    pub new_results: Vec<NewResult>,
    pub fixture_changes: Vec<FixtureTimeChange>,
    pub diagnostics: Diagnostics,
}

/// Validated view of a player record: every field the comparator needs,
/// with the required ones already unwrapped.
struct PlayerFields<'a> {
    name: &'a str,
    team: Option<i64>,
    now_cost: i64,
    ownership: &'a Numeric,
    status: &'a str,
    news: &'a str,
    form: Option<&'a Numeric>,
}

impl<'a> PlayerFields<'a> {
    fn from_record(p: &'a Player) -> Option<Self> {
        Some(Self {
            name: p.web_name.as_deref()?,
            team: p.team,
            now_cost: p.now_cost?,
            ownership: p.selected_by_percent.as_ref()?,
            status: p.status.as_deref()?,
            news: p.news.as_deref().unwrap_or(""),
            form: p.form.as_ref(),
        })
    }

    fn price(&self) -> f64 {
        self.now_cost as f64 / 10.0
    }
}

/// Validated view of a fixture record.
struct FixtureFields<'a> {
    gameweek: i64,
    team_h: i64,
    team_a: i64,
    finished: bool,
    team_h_score: Option<i64>,
    team_a_score: Option<i64>,
    kickoff_time: Option<&'a str>,
}

impl<'a> FixtureFields<'a> {
    fn from_record(f: &'a Fixture) -> Option<Self> {
        Some(Self {
            gameweek: f.event?,
            team_h: f.team_h?,
            team_a: f.team_a?,
            finished: f.finished,
            team_h_score: f.team_h_score,
            team_a_score: f.team_a_score,
            kickoff_time: f.kickoff_time.as_deref(),
        })
    }
}

/// Index records by id, validating required fields as we go. Malformed
/// records are skipped and noted in `diagnostics`; a duplicate id keeps
/// the later record (last write wins, matching map construction over the
/// raw feed).
fn index_by_id<'a, T, F, V>(
    records: &'a [T],
    id_of: impl Fn(&T) -> Option<i64>,
    validate: F,
    skipped: &mut Vec<i64>,
    unidentified: &mut usize,
    kind: &'static str,
) -> BTreeMap<i64, V>
where
    F: Fn(&'a T) -> Option<V>,
{
    let mut map = BTreeMap::new();
    for record in records {
        let Some(id) = id_of(record) else {
            warn!(kind, "record without id, skipping");
            *unidentified += 1;
            continue;
        };
        let Some(fields) = validate(record) else {
            warn!(kind, id, "record missing required fields, skipping");
            skipped.push(id);
            continue;
        };
        if map.insert(id, fields).is_some() {
            debug!(kind, id, "duplicate id, keeping the later record");
        }
    }
    map
}

fn index_players<'a>(
    players: &'a [Player],
    diagnostics: &mut Diagnostics,
) -> BTreeMap<i64, PlayerFields<'a>> {
    index_by_id(
        players,
        |p| p.id,
        PlayerFields::from_record,
        &mut diagnostics.skipped_players,
        &mut diagnostics.unidentified_records,
        "player",
    )
}

fn index_fixtures<'a>(
    fixtures: &'a [Fixture],
    diagnostics: &mut Diagnostics,
) -> BTreeMap<i64, FixtureFields<'a>> {
    index_by_id(
        fixtures,
        |f| f.id,
        FixtureFields::from_record,
        &mut diagnostics.skipped_fixtures,
        &mut diagnostics.unidentified_records,
        "fixture",
    )
}

fn compare_players(
    before: &BTreeMap<i64, PlayerFields<'_>>,
    after: &BTreeMap<i64, PlayerFields<'_>>,
    result: &mut ComparisonResult,
) {
    for (id, new_p) in after {
        let Some(old_p) = before.get(id) else {
            result.new_players.push(NewPlayer {
                name: new_p.name.to_string(),
                team: new_p.team,
                price: new_p.price(),
            });
            continue;
        };

        if old_p.now_cost != new_p.now_cost {
            result.price_changes.push(PriceChange {
                name: new_p.name.to_string(),
                old_price: old_p.price(),
                new_price: new_p.price(),
                change: (new_p.now_cost - old_p.now_cost) as f64 / 10.0,
            });
        }

        // An unparseable ownership figure on either side skips this check
        // for this player only.
        if let (Some(old_own), Some(new_own)) =
            (old_p.ownership.as_f64(), new_p.ownership.as_f64())
        {
            if (new_own - old_own).abs() > OWNERSHIP_THRESHOLD {
                result.ownership_changes.push(OwnershipChange {
                    name: new_p.name.to_string(),
                    old_ownership: old_own,
                    new_ownership: new_own,
                    change: new_own - old_own,
                });
            }
        } else {
            debug!(id, "unparseable ownership, skipping ownership check");
        }

        if old_p.status != new_p.status {
            result.injury_updates.push(InjuryUpdate {
                name: new_p.name.to_string(),
                old_status: old_p.status.to_string(),
                new_status: new_p.status.to_string(),
                news: new_p.news.to_string(),
            });
        }

        // Absent or unparseable form counts as 0.
        let old_form = old_p.form.and_then(Numeric::as_f64).unwrap_or(0.0);
        let new_form = new_p.form.and_then(Numeric::as_f64).unwrap_or(0.0);
        if (new_form - old_form).abs() > FORM_THRESHOLD {
            result.form_changes.push(FormChange {
                name: new_p.name.to_string(),
                old_form,
                new_form,
                change: new_form - old_form,
            });
        }
    }

    for (id, old_p) in before {
        if !after.contains_key(id) {
            result.removed_players.push(RemovedPlayer {
                name: old_p.name.to_string(),
                team: old_p.team,
            });
        }
    }
}

/// Fixtures are compared only where the id exists on both sides; the
/// fixture list is stable once ids are assigned, so additions and removals
/// are deliberately not reported.
fn compare_fixtures(
    before: &BTreeMap<i64, FixtureFields<'_>>,
    after: &BTreeMap<i64, FixtureFields<'_>>,
    result: &mut ComparisonResult,
) {
    for (id, new_f) in after {
        let Some(old_f) = before.get(id) else {
            continue;
        };

        if !old_f.finished && new_f.finished {
            if let (Some(h), Some(a)) = (new_f.team_h_score, new_f.team_a_score) {
                result.new_results.push(NewResult {
                    gameweek: new_f.gameweek,
                    home_team: new_f.team_h,
                    away_team: new_f.team_a,
                    score: format!("{}-{}", h, a),
                });
            } else {
                debug!(id, "fixture finished without scores, skipping result");
            }
        }

        if old_f.kickoff_time != new_f.kickoff_time {
            result.fixture_changes.push(FixtureTimeChange {
                gameweek: new_f.gameweek,
                home_team: new_f.team_h,
                away_team: new_f.team_a,
                old_time: old_f.kickoff_time.map(str::to_string),
                new_time: new_f.kickoff_time.map(str::to_string),
            });
        }
    }
}

/// Compare two snapshots and collect every change worth reporting. Borrows
/// both inputs for the duration of the call and retains nothing. An empty
/// snapshot on either side is valid and yields all-new or all-removed
/// players.
pub fn compare(before: &Snapshot, after: &Snapshot) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    let before_players = index_players(&before.players, &mut result.diagnostics);
    let after_players = index_players(&after.players, &mut result.diagnostics);
    compare_players(&before_players, &after_players, &mut result);

    let before_fixtures = index_fixtures(&before.fixtures, &mut result.diagnostics);
    let after_fixtures = index_fixtures(&after.fixtures, &mut result.diagnostics);
    compare_fixtures(&before_fixtures, &after_fixtures, &mut result);

    result
}
