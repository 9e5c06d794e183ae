use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text status post. `updateType` is conventionally one of
/// Progress, Achievement, Blocker or General.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub id: String,
    pub team_name: String,
    pub update_text: String,
    pub update_type: String,
    pub timestamp: DateTime<Utc>,
    pub date: String,
    pub time: String,
}

pub const DEFAULT_UPDATE_TYPE: &str = "General";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateRequest {
    pub team_name: Option<String>,
    pub update_text: Option<String>,
    pub update_type: Option<String>,
}

/// Query for `GET /api/updates`. `limit` stays text until
/// [`UpdateQuery::limit_or`] so a bad value never rejects the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuery {
    pub team_name: Option<String>,
    pub limit: Option<String>,
}

impl UpdateQuery {
    pub fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Reads the leading digits of `limit` ("2x" is 2, "1.5" is 1). No
    /// leading digit, or a minus sign, means `default`.
    pub fn limit_or(&self, default: usize) -> usize {
        let Some(raw) = self.limit.as_deref() else {
            return default;
        };
        let raw = raw.trim_start();
        let raw = raw.strip_prefix('+').unwrap_or(raw);
        let digits_end = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let digits = &raw[..digits_end];
        if digits.is_empty() {
            return default;
        }
        digits.parse().unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> UpdateQuery {
        UpdateQuery {
            team_name: None,
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn limit_parses_text_and_falls_back() {
        assert_eq!(query(None).limit_or(50), 50);
        assert_eq!(query(Some("5")).limit_or(50), 5);
        assert_eq!(query(Some(" 0 ")).limit_or(50), 0);
        assert_eq!(query(Some("ten")).limit_or(50), 50);
        assert_eq!(query(Some("-1")).limit_or(50), 50);
        assert_eq!(query(Some("2x")).limit_or(50), 2);
        assert_eq!(query(Some("1.5")).limit_or(50), 1);
        assert_eq!(query(Some("+3")).limit_or(50), 3);
        assert_eq!(query(Some("")).limit_or(50), 50);
        assert_eq!(query(Some("99999999999999999999999")).limit_or(50), usize::MAX);
    }
}
