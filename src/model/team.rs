use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One club from `bootstrap-static/`. Stored in snapshots for reference;
/// the comparator itself only works with team ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
