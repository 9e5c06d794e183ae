use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A registered team. `status` is always "Active"; nothing moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub team_name: String,
    pub member_count: u32,
    pub event_name: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

pub const DEFAULT_EVENT_NAME: &str = "General";
pub const ACTIVE: &str = "Active";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub team_name: Option<String>,
    /// The browser form posts this as the raw input text.
    #[serde(default, deserialize_with = "lenient_count")]
    pub member_count: u32,
    pub event_name: Option<String>,
}

/// Accepts a JSON number or a numeric string; anything else counts as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let count = match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.min(u32::MAX as f64) as u32)
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CreateTeamRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn member_count_accepts_numbers_and_form_text() {
        assert_eq!(parse(r#"{"teamName":"A","memberCount":4}"#).member_count, 4);
        assert_eq!(parse(r#"{"teamName":"A","memberCount":"7"}"#).member_count, 7);
        assert_eq!(parse(r#"{"teamName":"A","memberCount":""}"#).member_count, 0);
        assert_eq!(parse(r#"{"teamName":"A","memberCount":-2}"#).member_count, 0);
        assert_eq!(parse(r#"{"teamName":"A","memberCount":null}"#).member_count, 0);
        assert_eq!(parse(r#"{"teamName":"A"}"#).member_count, 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let team = Team {
            id: "t1".to_string(),
            team_name: "Alpha".to_string(),
            member_count: 4,
            event_name: DEFAULT_EVENT_NAME.to_string(),
            created_at: Utc::now(),
            status: ACTIVE.to_string(),
        };
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["teamName"], "Alpha");
        assert_eq!(json["memberCount"], 4);
        assert_eq!(json["eventName"], "General");
        assert!(json.get("createdAt").is_some());
    }
}
