use crate::stubs::StubApi;
use cricstats::players::Candidate;
use cricstats::profile::{
    NOT_AVAILABLE, PLACEHOLDER_IMAGE, PlayerRecord, Rankings, assemble_profile, assemble_report,
    display, image_url, parse_career,
};
use serde_json::{Value, json};

fn kohli() -> Candidate {
    Candidate {
        id: "1413".to_string(),
        name: "Virat Kohli".to_string(),
        team_name: Some("India".to_string()),
        dob: Some("1988-11-05".to_string()),
        face_image_id: Some("332891".to_string()),
    }
}

fn profile_payload() -> Value {
    json!({
        "name": "Virat Kohli",
        "teams": "India, Royal Challengers Bengaluru",
        "role": "Batsman",
        "bat": "Right Handed Bat",
        "bowl": "Right-arm medium",
        "birthPlace": "Delhi",
        "DoB": "November 05, 1988",
        "webURL": "http://www.cricbuzz.com/profiles/1413/virat-kohli",
        "image": "http://i.cricketcb.com/stats/img/faceImages/1413.jpg",
        "rankings": {
            "bat": {"testRank": "4", "odiRank": "1", "t20Rank": null},
            "bowl": {}
        }
    })
}

fn career_payload() -> Value {
    json!({
        "values": [
            {"name": "test", "debut": "2011-06-20", "lastPlayed": "2025-01-03"},
            {"name": "odi", "debut": "2008-08-18"}
        ]
    })
}

fn batting_payload() -> Value {
    json!({
        "headers": ["ROWHEADER", "Test", "ODI"],
        "values": [{"values": ["Matches", "123", "302"]}]
    })
}

#[test]
fn record_fields_map_from_payload_keys() {
    let record = PlayerRecord::from_json(&profile_payload());
    assert_eq!(record.role.as_deref(), Some("Batsman"));
    assert_eq!(record.batting_style.as_deref(), Some("Right Handed Bat"));
    assert_eq!(record.bowling_style.as_deref(), Some("Right-arm medium"));
    assert_eq!(record.birth_place.as_deref(), Some("Delhi"));
    assert_eq!(record.dob.as_deref(), Some("November 05, 1988"));
}

#[test]
fn missing_fields_display_as_not_available() {
    let record = PlayerRecord::from_json(&json!({"name": "Unknown"}));
    let fields = record.display_fields();
    let labels: Vec<&str> = fields.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, vec!["Role", "Batting Style", "Bowling Style", "Teams", "Birth Place"]);
    assert!(fields.iter().all(|(_, v)| v == NOT_AVAILABLE));
    assert_eq!(display(None), "N/A");
}

#[test]
fn rankings_keep_payload_order_and_mark_nulls() {
    let payload = profile_payload();
    let rankings = Rankings::from_json(payload.get("rankings"));

    let bat = rankings.bat.as_ref().unwrap();
    let keys: Vec<&str> = bat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["testRank", "odiRank", "t20Rank"]);
    assert_eq!(bat["t20Rank"], NOT_AVAILABLE);
    assert!(rankings.bowl.as_ref().unwrap().is_empty());
    assert!(rankings.all.is_none());
    assert!(!rankings.is_empty());
}

#[test]
fn missing_rankings_are_empty() {
    let rankings = Rankings::from_json(None);
    assert!(rankings.is_empty());
    let headings: Vec<&str> = rankings.disciplines().map(|(h, _)| h).collect();
    assert_eq!(headings, vec!["Batting", "Bowling", "All-Rounder"]);
}

#[test]
fn career_entries_parse() {
    let career = parse_career(&career_payload());
    assert_eq!(career.len(), 2);
    assert_eq!(career[0].format.as_deref(), Some("test"));
    assert_eq!(career[0].last_played.as_deref(), Some("2025-01-03"));
    assert_eq!(career[1].last_played, None);
    assert!(parse_career(&json!({"values": "nope"})).is_empty());
}

#[test]
fn image_prefers_payload_url_upgraded_to_https() {
    let record = PlayerRecord::from_json(&profile_payload());
    assert_eq!(
        image_url(&record, &kohli()),
        "https://i.cricketcb.com/stats/img/faceImages/1413.jpg"
    );
}

#[test]
fn image_falls_back_to_face_image_then_placeholder() {
    let record = PlayerRecord::default();
    assert_eq!(
        image_url(&record, &kohli()),
        "https://www.cricbuzz.com/a/img/v1/152x152/i1/c332891.jpg"
    );

    let bare = Candidate {
        face_image_id: None,
        ..kohli()
    };
    assert_eq!(image_url(&record, &bare), PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn assembles_full_profile() {
    let api = StubApi {
        profile: Some(profile_payload()),
        career: Some(career_payload()),
        ..Default::default()
    };

    let profile = assemble_profile(&api, &kohli()).await;
    assert_eq!(profile.display_name(), "Virat Kohli");
    assert_eq!(profile.dob(), "1988-11-05");
    assert_eq!(profile.career.len(), 2);
    assert!(profile.rankings.bat.is_some());
    assert!(profile.image_url.starts_with("https://"));
}

#[tokio::test]
async fn failed_profile_keeps_career() {
    let api = StubApi {
        profile: None,
        career: Some(career_payload()),
        ..Default::default()
    };

    let profile = assemble_profile(&api, &kohli()).await;
    assert_eq!(profile.record, PlayerRecord::default());
    assert!(profile.rankings.is_empty());
    assert_eq!(profile.career.len(), 2);
    // Search-hit fields fill in for the missing profile.
    assert_eq!(profile.display_name(), "Virat Kohli");
    assert!(profile.image_url.ends_with("c332891.jpg"));
}

#[tokio::test]
async fn failed_career_keeps_profile_and_rankings() {
    let api = StubApi {
        profile: Some(profile_payload()),
        career: None,
        ..Default::default()
    };

    let profile = assemble_profile(&api, &kohli()).await;
    assert!(profile.career.is_empty());
    assert_eq!(profile.record.role.as_deref(), Some("Batsman"));
    assert!(!profile.rankings.is_empty());
}

#[tokio::test]
async fn report_isolates_stats_failures() {
    let api = StubApi {
        profile: Some(profile_payload()),
        career: Some(career_payload()),
        batting: Some(batting_payload()),
        bowling: None,
        ..Default::default()
    };

    let report = assemble_report(&api, &kohli()).await;
    assert_eq!(report.batting.headers, vec!["ROWHEADER", "Test", "ODI"]);
    assert_eq!(report.batting.rows.len(), 1);
    assert!(report.bowling.is_empty());
    assert_eq!(
        api.requested(),
        vec!["profile:1413", "career:1413", "batting:1413", "bowling:1413"]
    );
}

#[tokio::test]
async fn report_with_everything_failing_is_still_renderable() {
    let api = StubApi::default();
    let report = assemble_report(&api, &kohli()).await;

    assert!(report.batting.is_empty());
    assert!(report.bowling.is_empty());
    assert!(report.profile.career.is_empty());
    assert_eq!(report.profile.dob(), "1988-11-05");
}

#[tokio::test]
async fn malformed_stats_payload_is_empty_table() {
    let api = StubApi {
        batting: Some(json!({"unexpected": true})),
        ..Default::default()
    };
    let report = assemble_report(&api, &kohli()).await;
    assert!(report.batting.is_empty());
}

#[tokio::test]
async fn malformed_rankings_keep_profile_and_career() {
    let mut payload = profile_payload();
    payload["rankings"] = json!("not a mapping");
    let api = StubApi {
        profile: Some(payload),
        career: Some(career_payload()),
        ..Default::default()
    };

    let profile = assemble_profile(&api, &kohli()).await;
    assert!(profile.rankings.is_empty());
    assert_eq!(profile.record.role.as_deref(), Some("Batsman"));
    assert_eq!(profile.career.len(), 2);
}

#[tokio::test]
async fn id_only_lookup_without_profile_name_shows_not_available() {
    let api = StubApi::default();
    let candidate = Candidate {
        id: "1413".to_string(),
        ..Default::default()
    };

    let report = assemble_report(&api, &candidate).await;
    assert_eq!(report.profile.display_name(), NOT_AVAILABLE);
    assert_eq!(report.profile.dob(), NOT_AVAILABLE);
}

#[tokio::test]
async fn id_only_lookup_uses_profile_name() {
    let api = StubApi {
        profile: Some(profile_payload()),
        ..Default::default()
    };
    let candidate = Candidate {
        id: "1413".to_string(),
        ..Default::default()
    };

    let profile = assemble_profile(&api, &candidate).await;
    assert_eq!(profile.display_name(), "Virat Kohli");
}
