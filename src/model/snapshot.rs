use serde::{Deserialize, Serialize};

use crate::model::fixture::Fixture;
use crate::model::player::Player;
use crate::model::team::Team;

/// One full capture of the FPL API at a point in time. This is the shape
/// persisted to disk and the input to the comparison engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl Snapshot {
    /// Build a snapshot from a raw JSON body (no network, no filesystem).
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Wire document for the `bootstrap-static/` endpoint. Only the parts this
/// crate consumes; the rest of the document is ignored.
#[derive(Debug, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub elements: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}
