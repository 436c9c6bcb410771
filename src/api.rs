use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{Endpoint, FetchError, Launch, Launchpad};

pub const SPACEX_API_URL: &str = "https://api.spacexdata.com/v4";

/// Remote source of launch data.
#[async_trait]
pub trait LaunchApi {
    async fn upcoming_launches(&self) -> Result<Vec<Launch>, FetchError>;

    async fn launchpad(&self, id: &str) -> Result<Launchpad, FetchError>;
}

#[derive(Debug, Clone)]
pub struct SpaceXApi {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceXApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    async fn get<T>(&self, endpoint: Endpoint, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("requesting {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { endpoint, status });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl LaunchApi for SpaceXApi {
    async fn upcoming_launches(&self) -> Result<Vec<Launch>, FetchError> {
        self.get(Endpoint::Launches, "launches/upcoming").await
    }

    async fn launchpad(&self, id: &str) -> Result<Launchpad, FetchError> {
        self.get(Endpoint::Launchpad, &format!("launchpads/{}", id))
            .await
    }
}
