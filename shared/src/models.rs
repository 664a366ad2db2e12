use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier. Only used as a rendering key, so any JSON
/// number or string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrategyId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for StrategyId {
    fn from(id: i64) -> Self {
        StrategyId::Number(id.into())
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyId::Number(n) => write!(f, "{}", n),
            StrategyId::Text(s) => f.write_str(s),
        }
    }
}

/// Display state of a strategy. Only `active` gets its own styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum StrategyStatus {
    Active,
    Other(String),
}

impl StrategyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, StrategyStatus::Active)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StrategyStatus::Active => "active",
            StrategyStatus::Other(raw) => raw,
        }
    }
}

impl Default for StrategyStatus {
    fn default() -> Self {
        StrategyStatus::Other(String::new())
    }
}

impl From<Option<String>> for StrategyStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(StrategyStatus::from).unwrap_or_default()
    }
}

impl From<String> for StrategyStatus {
    fn from(raw: String) -> Self {
        if raw == "active" {
            StrategyStatus::Active
        } else {
            StrategyStatus::Other(raw)
        }
    }
}

impl From<StrategyStatus> for String {
    fn from(status: StrategyStatus) -> Self {
        match status {
            StrategyStatus::Active => "active".to_string(),
            StrategyStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: StrategyId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub risk_per_trade: Option<f64>,
    #[serde(default)]
    pub status: StrategyStatus,
}

impl Strategy {
    /// Description to render, if any. Blank descriptions are treated as absent.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    pub fn has_description(&self) -> bool {
        self.description_text().is_some()
    }

    /// "BTCUSDT • 1h"
    pub fn market_label(&self) -> String {
        format!("{} • {}", self.symbol, self.timeframe)
    }
}

/// Payload for `POST /strategies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStrategy {
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub timeframe: String,
    pub risk_per_trade: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strategy_from_backend_json() {
        let strategy: Strategy = serde_json::from_value(json!({
            "id": 1,
            "name": "Trend Follower",
            "symbol": "BTCUSDT",
            "timeframe": "1h",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(strategy.id, StrategyId::from(1));
        assert!(strategy.status.is_active());
        assert_eq!(strategy.description_text(), None);
        assert_eq!(strategy.risk_per_trade, None);
        assert_eq!(strategy.market_label(), "BTCUSDT • 1h");
    }

    #[test]
    fn test_string_ids_and_other_statuses() {
        let strategy: Strategy = serde_json::from_value(json!({
            "id": "65f0c2",
            "name": "Mean Revert",
            "description": "",
            "symbol": "ETHUSDT",
            "timeframe": "4h",
            "risk_per_trade": 0.02,
            "status": "paused"
        }))
        .unwrap();

        assert_eq!(strategy.id.to_string(), "65f0c2");
        assert_eq!(strategy.status, StrategyStatus::Other("paused".to_string()));
        assert!(!strategy.status.is_active());
        assert!(!strategy.has_description());
        assert_eq!(strategy.risk_per_trade, Some(0.02));
    }

    #[test]
    fn test_missing_status_is_not_active() {
        let strategy: Strategy = serde_json::from_value(json!({
            "id": 7,
            "name": "No Status",
            "description": null,
            "symbol": "SOLUSDT",
            "timeframe": "15m"
        }))
        .unwrap();

        assert_eq!(strategy.status.as_str(), "");
        assert!(!strategy.status.is_active());
    }

    #[test]
    fn test_odd_record_does_not_fail_the_list() {
        let strategies: Vec<Strategy> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Trend Follower", "symbol": "BTCUSDT", "timeframe": "1h", "status": "active"},
                {"id": 2.0, "name": "Half Built", "status": null},
                {"id": 18446744073709551615, "name": "Big Id", "symbol": "ETHUSDT", "timeframe": "4h", "status": "draft"}
            ]"#,
        )
        .unwrap();

        assert_eq!(strategies.len(), 3);
        assert_eq!(strategies[1].id.to_string(), "2.0");
        assert_eq!(strategies[1].symbol, "");
        assert_eq!(strategies[1].timeframe, "");
        assert!(!strategies[1].status.is_active());
        assert_eq!(strategies[2].id.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_new_strategy_body_shape() {
        let body = serde_json::to_value(NewStrategy {
            name: "Breakout".to_string(),
            description: String::new(),
            symbol: "BTCUSDT".to_string(),
            timeframe: "1h".to_string(),
            risk_per_trade: 0.01,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Breakout",
                "description": "",
                "symbol": "BTCUSDT",
                "timeframe": "1h",
                "risk_per_trade": 0.01
            })
        );
    }
}
