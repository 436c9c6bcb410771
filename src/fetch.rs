use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DurationMilliSeconds};
use tracing::{info, warn};

use crate::{
    api::LaunchApi,
    types::{FetchError, FetchResult, Launch},
};

/// Bounded retry with linear backoff: attempt `n` is followed by `delay * n`.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub attempts: u32,
    #[serde(rename = "delay_ms")]
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.delay.saturating_mul(attempt)
    }
}

/// Earliest launch strictly after `now`; undated launches are skipped and
/// ties keep collection order.
pub fn select_next_launch(
    launches: Vec<Launch>,
    now: DateTime<Utc>,
) -> Result<Launch, FetchError> {
    if launches.is_empty() {
        return Err(FetchError::NoUpcomingLaunches);
    }
    launches
        .into_iter()
        .filter_map(|launch| match launch.date_utc {
            Some(date) if date > now => Some((date, launch)),
            _ => None,
        })
        .min_by_key(|(date, _)| *date)
        .map(|(_, launch)| launch)
        .ok_or(FetchError::NoFutureLaunches)
}

#[derive(Debug, Clone)]
pub struct LaunchFetcher<A> {
    api: A,
    retry: RetryPolicy,
}

impl<A> LaunchFetcher<A>
where
    A: LaunchApi,
{
    pub fn new(api: A, retry: RetryPolicy) -> Self {
        Self { api, retry }
    }

    #[tracing::instrument(skip_all)]
    pub async fn fetch_next_launch(&self) -> Result<FetchResult, FetchError> {
        let mut last_error = None;

        for attempt in 1..=self.retry.attempts {
            match self.attempt().await {
                Ok(result) => {
                    info!(
                        "next launch: {} from {}",
                        result.launch.name, result.launchpad.full_name
                    );
                    return Ok(result);
                }
                Err(err) => {
                    warn!("SpaceX API attempt {} failed: {}", attempt, err);
                    if attempt < self.retry.attempts {
                        tokio::time::sleep(self.retry.delay_for(attempt)).await;
                    }
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(FetchError::Exhausted))
    }

    async fn attempt(&self) -> Result<FetchResult, FetchError> {
        info!("fetching upcoming launches");
        let launches = self.api.upcoming_launches().await?;
        let launch = select_next_launch(launches, Utc::now())?;
        let launchpad = self.api.launchpad(&launch.launchpad).await?;
        Ok(FetchResult { launch, launchpad })
    }
}
