//! Player name search and candidate resolution.

use crate::cricbuzz::PlayerApi;
use crate::error::CricError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One search hit, before the full profile is fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub team_name: Option<String>,
    pub dob: Option<String>,
    pub face_image_id: Option<String>,
}

/// Display name -> candidate, in the API's order.
///
/// A later candidate with the same display name replaces the earlier value
/// while the name keeps its first position.
pub type CandidateSet = IndexMap<String, Candidate>;

/// Build the candidate set from a search payload `{"player": [...]}`.
///
/// Anything unexpected yields an empty set.
pub fn resolve_candidates(payload: &Value) -> CandidateSet {
    let mut set = CandidateSet::new();
    let Some(players) = payload.get("player").and_then(Value::as_array) else {
        return set;
    };

    for entry in players {
        let (Some(id), Some(name)) = (
            entry.get("id").and_then(scalar_text),
            entry.get("name").and_then(scalar_text),
        ) else {
            tracing::debug!(?entry, "skipping search entry without id or name");
            continue;
        };
        let candidate = Candidate {
            id,
            name: name.clone(),
            team_name: entry.get("teamName").and_then(scalar_text),
            dob: entry.get("dob").and_then(scalar_text),
            face_image_id: entry.get("faceImageId").and_then(scalar_text),
        };
        set.insert(name, candidate);
    }
    set
}

/// Search by free-text name.
///
/// Malformed or non-success responses are treated as no results. Transport and
/// credential failures are returned so the caller can show them. A blank query
/// returns an empty set without calling the API.
pub async fn search<A: PlayerApi>(api: &A, name: &str) -> Result<CandidateSet, CricError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(CandidateSet::new());
    }
    match api.search_players(name).await {
        Ok(payload) => {
            let set = resolve_candidates(&payload);
            tracing::info!(query = name, candidates = set.len(), "player search");
            Ok(set)
        }
        Err(err @ (CricError::Connection { .. } | CricError::Auth { .. })) => Err(err),
        Err(err) => {
            tracing::warn!(query = name, error = %err, "player search failed, showing no results");
            Ok(CandidateSet::new())
        }
    }
}

/// Accept only numeric Cricbuzz ids, since they are spliced into request paths.
pub fn parse_player_id(raw: &str) -> Result<String, CricError> {
    let id = raw.trim();
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(id.to_string())
    } else {
        Err(CricError::Config {
            message: format!("invalid player id '{}' (expected digits)", raw),
        })
    }
}

/// Text of a JSON string or number; `None` for null, empty strings, and containers.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
