use tracing::{info, info_span, instrument};

use crate::error::SnapshotError;
use crate::model::fixture::Fixture;
use crate::model::snapshot::{Bootstrap, Snapshot};

const BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Client for the public FPL API. Holds the base URL so tests can point it
/// at a local server.
#[derive(Debug)]
pub struct FplClient {
    base_url: String,
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FplClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch players, teams and fixtures and assemble a snapshot.
    #[instrument(level = "info", skip(self))]
    pub fn collect(&self) -> Result<Snapshot, SnapshotError> {
        let bootstrap: Bootstrap =
            serde_json::from_str(&self.get("bootstrap-static/")?)?;
        info!(
            players = bootstrap.elements.len(),
            teams = bootstrap.teams.len(),
            "Fetched bootstrap data"
        );

        let fixtures: Vec<Fixture> = serde_json::from_str(&self.get("fixtures/")?)?;
        let finished = fixtures.iter().filter(|f| f.finished).count();
        info!(
            fixtures = fixtures.len(),
            finished,
            upcoming = fixtures.len() - finished,
            "Fetched fixtures"
        );

        Ok(Snapshot {
            players: bootstrap.elements,
            teams: bootstrap.teams,
            fixtures,
        })
    }

    fn get(&self, path: &str) -> Result<String, SnapshotError> {
        let url = format!("{}/{}", self.base_url, path);
        let _span = info_span!("fpl_fetch", url = %url).entered();
        let response = ureq::get(&url).call().map_err(|e| SnapshotError::Http {
            url: url.clone(),
            source: Box::new(e),
        })?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| SnapshotError::Http {
                url,
                source: Box::new(e),
            })
    }
}
