use devchain_config::{ConfigLoader, ConfigUtils, EnvLoader, FileLoader};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Devchain Configuration Basic Usage Example");
    println!("==========================================\n");

    // Example 1: Built-in profiles with environment overrides
    println!("1. Built-in profiles:");
    let config = ConfigLoader::new().load(None::<&Path>).await?;
    for (name, profile) in &config.networks {
        println!("   {:<12} {} (network_id {})", name, profile.rpc_url(), profile.network_id);
    }

    // Example 2: Resolve the network selected by DEVCHAIN_NETWORK
    let selected = EnvLoader::selected_network();
    let profile = config.network(&selected)?;
    println!("\n2. Selected '{}': gas limit {}", selected, profile.gas);

    // Example 3: Save and reload
    let dir = std::env::temp_dir().join("devchain-example");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("devchain.json");
    FileLoader::save_json(&config, &path).await?;
    let reloaded = FileLoader::load_auto(&path).await?;
    println!("\n3. Reloaded from {}: identical = {}", path.display(), reloaded == config);
    println!("   Fingerprint: {}", ConfigUtils::fingerprint(&reloaded)?);

    Ok(())
}
