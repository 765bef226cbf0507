use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::error::SnapshotError;
use crate::model::player::Player;
use crate::model::snapshot::Snapshot;

/// Dated snapshot archive on disk. Layout:
/// `<data_dir>/<YYYY-MM-DD>/fpl_data_<YYYYMMDD_HHMMSS>.json`, with a
/// players CSV alongside for convenience.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

/// Paths written by one save.
#[derive(Debug, Clone)]
pub struct SavedFiles {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// List available snapshots as `(date, path)`, sorted by date. Each
    /// date folder contributes its most recent data file.
    pub fn find_snapshots(&self) -> Result<Vec<(String, PathBuf)>, SnapshotError> {
        if !self.data_dir.is_dir() {
            return Err(SnapshotError::DataDirNotFound(self.data_dir.clone()));
        }

        let mut dates: Vec<PathBuf> = fs::read_dir(&self.data_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_dir())
            .collect();
        dates.sort();

        let mut found = Vec::new();
        for date_dir in dates {
            let mut data_files: Vec<PathBuf> = fs::read_dir(&date_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| is_data_file(p))
                .collect();
            data_files.sort();
            if let (Some(latest), Some(date)) = (
                data_files.pop(),
                date_dir.file_name().and_then(|n| n.to_str()),
            ) {
                found.push((date.to_string(), latest));
            }
        }
        Ok(found)
    }

    /// Load the most recent snapshot for a date folder name.
    pub fn load(&self, date: &str) -> Result<Snapshot, SnapshotError> {
        let snapshots = self.find_snapshots()?;
        let path = snapshots
            .into_iter()
            .find(|(d, _)| d == date)
            .map(|(_, p)| p)
            .ok_or_else(|| SnapshotError::SnapshotNotFound(date.to_string()))?;
        Self::load_file(&path)
    }

    /// Load a snapshot from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Snapshot, SnapshotError> {
        let body = fs::read_to_string(path)?;
        Ok(Snapshot::from_json(&body)?)
    }

    /// Persist a snapshot under its dated folder. The timestamp is a
    /// parameter so tests control it.
    #[instrument(level = "info", skip(self, snapshot))]
    pub fn save(
        &self,
        snapshot: &Snapshot,
        now: DateTime<Utc>,
    ) -> Result<SavedFiles, SnapshotError> {
        let date_dir = self.data_dir.join(now.format("%Y-%m-%d").to_string());
        fs::create_dir_all(&date_dir)?;

        let stamp = now.format("%Y%m%d_%H%M%S");

        let json_path = date_dir.join(format!("fpl_data_{}.json", stamp));
        fs::write(&json_path, serde_json::to_string_pretty(snapshot)?)?;

        let csv_path = date_dir.join(format!("fpl_players_{}.csv", stamp));
        fs::write(&csv_path, players_csv(&snapshot.players))?;

        info!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            players = snapshot.players.len(),
            fixtures = snapshot.fixtures.len(),
            "Saved snapshot"
        );
        Ok(SavedFiles {
            json: json_path,
            csv: csv_path,
        })
    }
}

fn is_data_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("fpl_data_") && n.ends_with(".json"))
            .unwrap_or(false)
}

/// Flat players export with the fields the comparator cares about. All
/// fields quoted, embedded quotes doubled.
pub fn players_csv(players: &[Player]) -> String {
    let mut out = String::new();
    out.push_str("id,web_name,team,now_cost,selected_by_percent,status,form,news\n");

    for p in players {
        let row = [
            opt_i64(p.id),
            p.web_name.clone().unwrap_or_default(),
            opt_i64(p.team),
            opt_i64(p.now_cost),
            p.selected_by_percent
                .as_ref()
                .and_then(|n| n.as_f64())
                .map(|v| v.to_string())
                .unwrap_or_default(),
            p.status.clone().unwrap_or_default(),
            p.form
                .as_ref()
                .and_then(|n| n.as_f64())
                .map(|v| v.to_string())
                .unwrap_or_default(),
            p.news.clone().unwrap_or_default(),
        ]
        .into_iter()
        .map(|s| format!("\"{}\"", s.replace('"', "\"\"")))
        .collect::<Vec<String>>()
        .join(",");

        out.push_str(&row);
        out.push('\n');
    }

    out
}

fn opt_i64(v: Option<i64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}
