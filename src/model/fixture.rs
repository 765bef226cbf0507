use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry from the FPL `fixtures/` list. Scores are null until the
/// fixture finishes; `kickoff_time` is null before the match is scheduled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    pub id: Option<i64>,
    /// Gameweek number.
    pub event: Option<i64>,
    pub team_h: Option<i64>,
    pub team_a: Option<i64>,
    #[serde(default)]
    pub finished: bool,
    pub team_h_score: Option<i64>,
    pub team_a_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kickoff_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
