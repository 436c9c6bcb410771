use next_launch::{api::SPACEX_API_URL, LaunchApi, SpaceXApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SPACEX_API_URL.to_owned());
    let api = SpaceXApi::new(base_url)?;

    let mut launches = api.upcoming_launches().await?;
    launches.sort_by_key(|launch| launch.date_utc);
    println!("{:#?}", launches);

    if let Some(launch) = launches.first() {
        let launchpad = api.launchpad(&launch.launchpad).await?;
        println!("{:#?}", launchpad);
    }

    Ok(())
}
