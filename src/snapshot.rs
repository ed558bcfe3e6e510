//! Dashboard snapshot - the payload returned by the backend on every poll
//!
//! A snapshot is always complete: missing top-level keys decode to empty
//! defaults, and the poller replaces it wholesale rather than merging.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Complete dashboard payload for one poll cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    pub signals: Vec<Signal>,
    pub queue_lengths: Vec<QueueLength>,
    pub agent_performance: AgentPerformance,
    pub alerts: Vec<Alert>,
}

/// Traffic light state at one intersection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub status: SignalStatus,
    /// Seconds the current phase has been (or will be) held
    pub duration: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub cars_passed: u64,
}

/// Light phase reported by the backend
///
/// Anything other than the three known phases is kept verbatim so it can be
/// displayed, and renders with the neutral indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalStatus {
    Green,
    Yellow,
    Red,
    Other(String),
}

impl From<String> for SignalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Green" => Self::Green,
            "Yellow" => Self::Yellow,
            "Red" => Self::Red,
            _ => Self::Other(value),
        }
    }
}

impl From<SignalStatus> for String {
    fn from(status: SignalStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "Green"),
            Self::Yellow => write!(f, "Yellow"),
            Self::Red => write!(f, "Red"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Vehicles waiting at one intersection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueLength {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub length: u64,
}

/// Aggregate metrics of the external RL controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentPerformance {
    pub reward: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub episodes: u64,
    /// Reward history, oldest first
    pub metrics: Vec<f64>,
}

/// Operator-facing alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub timestamp: String,
}

/// Accept identifiers as JSON strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

/// Accept counts as JSON integers or integral floats (`12.0`).
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Unsigned(u64),
        Float(f64),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Unsigned(n) => Ok(n),
        RawCount::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        RawCount::Float(f) => Err(serde::de::Error::custom(format!(
            "expected a non-negative whole count, got {}",
            f
        ))),
    }
}
