use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Patch {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Reddit {
    pub campaign: Option<String>,
    pub launch: Option<String>,
    pub media: Option<String>,
    pub recovery: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Flickr {
    pub small: Vec<String>,
    pub original: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Links {
    pub patch: Patch,
    pub reddit: Reddit,
    pub flickr: Flickr,
    pub presskit: Option<String>,
    pub webcast: Option<String>,
    pub youtube_id: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub flight_number: Option<u32>,
    pub date_utc: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub date_unix: Option<DateTime<Utc>>,
    pub date_precision: Option<String>,
    pub launchpad: String,
    pub rocket: Option<String>,
    pub details: Option<String>,
    pub links: Option<Links>,
    #[serde(default)]
    pub upcoming: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Launchpad {
    pub id: String,
    pub name: Option<String>,
    pub full_name: String,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<String>,
    #[serde(default)]
    pub launch_attempts: u32,
    #[serde(default)]
    pub launch_successes: u32,
}

impl Launchpad {
    /// `"locality, region"`. A missing part renders as `unknown` instead of
    /// leaking an empty or `undefined` fragment into the display string.
    pub fn location(&self) -> String {
        format!(
            "{}, {}",
            self.locality.as_deref().unwrap_or("unknown"),
            self.region.as_deref().unwrap_or("unknown"),
        )
    }
}

impl Display for Launchpad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.full_name, self.location())
    }
}

/// The selected launch together with the pad it flies from.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub launch: Launch,
    pub launchpad: Launchpad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Launches,
    Launchpad,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Launches => f.write_str("Launch API"),
            Endpoint::Launchpad => f.write_str("Launchpad API"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{endpoint} responded with status: {status}")]
    HttpStatus {
        endpoint: Endpoint,
        status: StatusCode,
    },

    #[error("no upcoming launches found")]
    NoUpcomingLaunches,

    #[error("no future launches found in upcoming launches")]
    NoFutureLaunches,

    #[error("reqwest -> {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("json -> {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to fetch SpaceX launch data")]
    Exhausted,
}
