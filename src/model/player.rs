use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::numeric::Numeric;

/// One element from the FPL `bootstrap-static/` players list.
///
/// Every field the comparator reads is optional here; required-field
/// validation happens at indexing time so a single malformed record can be
/// skipped instead of failing the whole document. Fields this crate does
/// not read are preserved verbatim in `extra` so saved snapshots keep the
/// complete raw record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<i64>,
    pub web_name: Option<String>,
    pub team: Option<i64>,
    pub now_cost: Option<i64>,
    pub selected_by_percent: Option<Numeric>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Numeric>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
