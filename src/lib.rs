pub mod api;
pub mod config;
pub mod fetch;
pub mod format;
pub mod types;

pub use api::{LaunchApi, SpaceXApi};
pub use fetch::{LaunchFetcher, RetryPolicy};
pub use format::{format_launch_data, DisplayRecord};
pub use types::{FetchError, FetchResult, Launch, Launchpad};
