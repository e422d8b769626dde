use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepeatType::None => write!(f, "none"),
            RepeatType::Daily => write!(f, "daily"),
            RepeatType::Weekly => write!(f, "weekly"),
            RepeatType::Monthly => write!(f, "monthly"),
            RepeatType::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repeat type: {0}")]
pub struct ParseRepeatTypeError(String);

impl FromStr for RepeatType {
    type Err = ParseRepeatTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            _ => Err(ParseRepeatTypeError(s.to_string())),
        }
    }
}

/// How an event repeats: the unit, the step count in that unit, and an
/// optional end date. Expansion is additionally capped by the configured
/// planning horizon regardless of `end_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    /// Rule for a one-off event.
    pub fn once() -> Self {
        Self {
            repeat_type: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat_type != RepeatType::None
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_repeating() && self.interval == 0 {
            return Err(CoreError::InvalidRepeatRule(
                "interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A calendar event as entered by the user. `date` anchors the (possibly
/// repeating) event; every other field is payload carried unchanged into
/// each generated occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEventData {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub category: String,
    pub repeat: RepeatRule,
    /// Minutes before `start_time` at which a reminder would fire.
    /// Opaque here; notification scheduling lives outside this crate.
    pub notification_time: u32,
}

impl NewEventData {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start_time >= self.end_time {
            return Err(CoreError::InvalidInput(format!(
                "start time {} must be before end time {}",
                self.start_time.format("%H:%M"),
                self.end_time.format("%H:%M")
            )));
        }
        self.repeat.validate()
    }
}

/// Wire format for event times ("14:00"); seconds are accepted on input
/// but never emitted.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
