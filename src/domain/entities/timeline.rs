use std::{fmt, str::FromStr};

use chrono::Month;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use crate::entities::validation::{validate_asset_path, validate_not_blank, validate_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum TimelineEventType {
    #[display("work")]
    Work,
    #[display("education")]
    Education,
    #[display("project")]
    Project,
    #[display("award")]
    Award,
    #[display("certification")]
    Certification,
    #[display("milestone")]
    Milestone,
}

impl FromStr for TimelineEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(TimelineEventType::Work),
            "education" => Ok(TimelineEventType::Education),
            "project" => Ok(TimelineEventType::Project),
            "award" => Ok(TimelineEventType::Award),
            "certification" => Ok(TimelineEventType::Certification),
            "milestone" => Ok(TimelineEventType::Milestone),
            other => Err(format!("Unknown timeline event type: {}", other)),
        }
    }
}

/// A calendar month written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(YearMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Short display form, e.g. `Jan 2022`.
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("???");
        format!("{} {}", &name[..3], self.year)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Expected YYYY-MM, got {:?}", s))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(format!("Expected YYYY-MM, got {:?}", s));
        }
        let year = year.parse::<i32>().map_err(|_| format!("Invalid year in {:?}", s))?;
        let month = month.parse::<u32>().map_err(|_| format!("Invalid month in {:?}", s))?;
        YearMonth::new(year, month).ok_or_else(|| format!("Month out of range in {:?}", s))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// End of a timeline period: a month, or still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDate {
    Month(YearMonth),
    Present,
}

const PRESENT: &str = "present";

impl EndDate {
    pub fn label(&self) -> String {
        match self {
            EndDate::Month(month) => month.label(),
            EndDate::Present => "Present".to_string(),
        }
    }
}

impl FromStr for EndDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == PRESENT {
            Ok(EndDate::Present)
        } else {
            s.parse().map(EndDate::Month)
        }
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Month(month) => month.fmt(f),
            EndDate::Present => f.write_str(PRESENT),
        }
    }
}

impl Serialize for EndDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EndDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[serde(rename = "type")]
    pub event_type: TimelineEventType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub start_date: YearMonth,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<EndDate>,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_asset_path"))]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url"))]
    pub url: Option<String>,

    #[serde(default)]
    pub is_milestone: bool,
}

impl TimelineEvent {
    /// False only when the end month is earlier than the start month.
    pub fn has_ordered_period(&self) -> bool {
        match self.end_date {
            Some(EndDate::Month(end)) => end >= self.start_date,
            _ => true,
        }
    }

    /// e.g. `Jan 2022 – Present`, or just `Jan 2022` for single-point events.
    pub fn period_label(&self) -> String {
        match &self.end_date {
            Some(end) => format!("{} – {}", self.start_date.label(), end.label()),
            None => self.start_date.label(),
        }
    }

    pub fn to_response(&self) -> TimelineEventResponse<'_> {
        TimelineEventResponse {
            event: self,
            period_label: self.period_label(),
        }
    }
}

/// An event as served, with its period already rendered.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventResponse<'a> {
    #[serde(flatten)]
    pub event: &'a TimelineEvent,
    pub period_label: String,
}
