//! Watershed listing command.

use log::info;
use sca_ee::client::EngineClient;
use sca_ee::ClientConfig;

/// Fetch and print the watershed names available in the boundary asset.
pub async fn run_watersheds(config: ClientConfig) -> anyhow::Result<()> {
    let client = EngineClient::new(config)?;
    let watersheds = client.list_watersheds().await?;
    info!("loaded {} watersheds", watersheds.len());
    for name in &watersheds {
        println!("{name}");
    }
    Ok(())
}
