//! Assembling a player's profile, rankings, career and stats from independent fetches.
//!
//! Each fetch fails on its own: a broken career call still leaves the profile
//! and rankings on screen, and so on.

use crate::cricbuzz::{PlayerApi, StatKind};
use crate::error::CricError;
use crate::normalize::{self, StatsTable};
use crate::players::{Candidate, scalar_text};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/150x150/800000/FFFFFF?text=No+Image";
const FACE_IMAGE_BASE: &str = "https://www.cricbuzz.com/a/img/v1/152x152/i1";

/// Render an optional field, using the not-available marker for absence.
pub fn display(field: Option<&str>) -> &str {
    field.unwrap_or(NOT_AVAILABLE)
}

/// Flat profile fields; any of them may be missing from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: Option<String>,
    pub teams: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub birth_place: Option<String>,
    pub dob: Option<String>,
    pub web_url: Option<String>,
    pub image: Option<String>,
}

impl PlayerRecord {
    pub fn from_json(payload: &Value) -> Self {
        let field = |key: &str| payload.get(key).and_then(scalar_text);
        PlayerRecord {
            name: field("name"),
            teams: field("teams"),
            role: field("role"),
            batting_style: field("bat"),
            bowling_style: field("bowl"),
            birth_place: field("birthPlace"),
            dob: field("DoB"),
            web_url: field("webURL"),
            image: field("image"),
        }
    }

    /// Labelled display pairs in profile-page order, absent fields as `N/A`.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("Role", &self.role),
            ("Batting Style", &self.batting_style),
            ("Bowling Style", &self.bowling_style),
            ("Teams", &self.teams),
            ("Birth Place", &self.birth_place),
        ]
        .into_iter()
        .map(|(label, value)| (label, display(value.as_deref()).to_string()))
        .collect()
    }
}

/// Category label -> value for one discipline, in payload order.
pub type RankingTable = IndexMap<String, String>;

/// ICC rankings by discipline. A missing discipline stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rankings {
    pub bat: Option<RankingTable>,
    pub bowl: Option<RankingTable>,
    pub all: Option<RankingTable>,
}

impl Rankings {
    pub fn from_json(rankings: Option<&Value>) -> Self {
        let discipline = |key: &str| -> Option<RankingTable> {
            let obj = rankings?.get(key)?.as_object()?;
            Some(
                obj.iter()
                    .map(|(k, v)| {
                        let text = match v {
                            Value::Null => NOT_AVAILABLE.to_string(),
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        (k.clone(), text)
                    })
                    .collect(),
            )
        };
        Rankings {
            bat: discipline("bat"),
            bowl: discipline("bowl"),
            all: discipline("all"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.disciplines().all(|(_, table)| table.is_none_or(|t| t.is_empty()))
    }

    /// `(heading, table)` for batting, bowling and all-rounder, in that order.
    pub fn disciplines(&self) -> impl Iterator<Item = (&'static str, Option<&RankingTable>)> {
        [
            ("Batting", self.bat.as_ref()),
            ("Bowling", self.bowl.as_ref()),
            ("All-Rounder", self.all.as_ref()),
        ]
        .into_iter()
    }
}

/// Debut and last-played markers for one format.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerEntry {
    pub format: Option<String>,
    pub debut: Option<String>,
    pub last_played: Option<String>,
}

/// Parse `{"values": [{"name", "debut", "lastPlayed"}, ..]}`; anything else is an empty career.
pub fn parse_career(payload: &Value) -> Vec<CareerEntry> {
    payload
        .get("values")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter(|e| e.is_object())
                .map(|e| CareerEntry {
                    format: e.get("name").and_then(scalar_text),
                    debut: e.get("debut").and_then(scalar_text),
                    last_played: e.get("lastPlayed").and_then(scalar_text),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Everything on the profile tab.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub candidate: Candidate,
    pub record: PlayerRecord,
    pub rankings: Rankings,
    pub career: Vec<CareerEntry>,
    pub image_url: String,
}

impl PlayerProfile {
    /// Heading name: the profile's own name, else the search hit's, else `N/A`.
    pub fn display_name(&self) -> &str {
        let from_search = Some(self.candidate.name.as_str()).filter(|name| !name.trim().is_empty());
        display(self.record.name.as_deref().or(from_search))
    }

    pub fn dob(&self) -> &str {
        display(self.candidate.dob.as_deref().or(self.record.dob.as_deref()))
    }
}

/// Profile plus the batting and bowling tabs.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub profile: PlayerProfile,
    pub batting: StatsTable,
    pub bowling: StatsTable,
}

/// Pick the profile image: payload URL (forced to https), then face image id, then placeholder.
pub fn image_url(record: &PlayerRecord, candidate: &Candidate) -> String {
    if let Some(ref url) = record.image {
        return match url.strip_prefix("http://") {
            Some(rest) => format!("https://{}", rest),
            None => url.clone(),
        };
    }
    if let Some(ref face) = candidate.face_image_id {
        return format!("{}/c{}.jpg", FACE_IMAGE_BASE, face);
    }
    PLACEHOLDER_IMAGE.to_string()
}

fn degrade<T: Default>(what: &str, player_id: &str, result: Result<T, CricError>) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(player_id, error = %err, "{} unavailable", what);
        T::default()
    })
}

/// Fetch profile (with rankings) and career for `candidate`, isolating each failure.
pub async fn assemble_profile<A: PlayerApi>(api: &A, candidate: &Candidate) -> PlayerProfile {
    let id = candidate.id.as_str();

    let details = degrade("profile", id, api.player_profile(id).await.map(Some));
    let record = details
        .as_ref()
        .map(PlayerRecord::from_json)
        .unwrap_or_default();
    let rankings = Rankings::from_json(details.as_ref().and_then(|d| d.get("rankings")));

    let career = degrade(
        "career",
        id,
        api.player_career(id).await.map(|payload| parse_career(&payload)),
    );

    let image_url = image_url(&record, candidate);
    PlayerProfile {
        candidate: candidate.clone(),
        record,
        rankings,
        career,
        image_url,
    }
}

/// Fetch one stats table; absence and failure both give an empty table.
pub async fn fetch_stats<A: PlayerApi>(api: &A, player_id: &str, kind: StatKind) -> StatsTable {
    let payload = degrade(
        &format!("{} stats", kind),
        player_id,
        api.player_stats(player_id, kind).await.map(Some),
    );
    let outcome = normalize::normalize(payload.as_ref());
    if outcome.is_absent() {
        tracing::debug!(player_id, %kind, "stats payload missing headers/values");
    }
    outcome.into_table()
}

/// Full report: profile tab, then batting and bowling tables.
pub async fn assemble_report<A: PlayerApi>(api: &A, candidate: &Candidate) -> PlayerReport {
    let profile = assemble_profile(api, candidate).await;
    let batting = fetch_stats(api, &candidate.id, StatKind::Batting).await;
    let bowling = fetch_stats(api, &candidate.id, StatKind::Bowling).await;
    PlayerReport {
        profile,
        batting,
        bowling,
    }
}
