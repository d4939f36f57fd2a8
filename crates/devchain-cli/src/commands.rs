//! CLI subcommand implementations.

use anyhow::{Context, Result};
use devchain_config::{
    ConfigFormat, ConfigLoader, ConfigUtils, DevchainConfig, EnvLoader, FileLoader, NetworkProfile,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Explicit `--config` path, else the first `devchain.{toml,json}` in `search_paths`
pub fn resolve_config(explicit: Option<&Path>, search_paths: &[PathBuf]) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    match ConfigUtils::find_config_file_in(search_paths, "devchain") {
        Ok(found) => {
            info!(path = %found.display(), "discovered configuration file");
            Some(found)
        }
        Err(e) => {
            debug!(error = %e, "no configuration file discovered");
            None
        }
    }
}

async fn load(config: Option<&Path>) -> Result<DevchainConfig> {
    let loader = ConfigLoader::new();
    let loaded = loader
        .load(config)
        .await
        .context("failed to load configuration")?;
    Ok(loaded)
}

pub(crate) fn describe(name: &str, profile: &NetworkProfile) -> String {
    let mut out = format!(
        "{name}: {url} network_id={id} gas={gas}",
        url = profile.rpc_url(),
        id = profile.network_id,
        gas = profile.gas
    );
    if let Some(gas_price) = profile.gas_price {
        out.push_str(&format!(" gas_price={gas_price}"));
    }
    if let Some(from) = &profile.from {
        out.push_str(&format!(" from={from}"));
    }
    out
}

pub async fn show(config: Option<&Path>, network: Option<&str>) -> Result<()> {
    let loaded = load(config).await?;

    match network {
        Some(name) => {
            let profile = loaded.network(&EnvLoader::canonical_network(name))?;
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
        None => {
            println!("{}", FileLoader::render(&loaded, ConfigFormat::Toml)?);
        }
    }
    Ok(())
}

pub async fn validate(config: Option<&Path>) -> Result<()> {
    if let Some(path) = config {
        ConfigUtils::validate_syntax(path)
            .with_context(|| format!("syntax check failed for {}", path.display()))?;
    }
    let loaded = load(config).await?;

    if let Some(selected) = EnvLoader::requested_network() {
        let profile = loaded
            .network(&selected)
            .with_context(|| format!("DEVCHAIN_NETWORK selects '{}'", selected))?;
        info!(network = %selected, url = %profile.rpc_url(), "selected network resolves");
    }

    println!("configuration is valid ({} networks)", loaded.networks.len());
    Ok(())
}

pub async fn networks(config: Option<&Path>) -> Result<()> {
    let loaded = load(config).await?;
    for (name, profile) in &loaded.networks {
        println!("{}", describe(name, profile));
    }
    Ok(())
}

pub async fn fingerprint(config: Option<&Path>) -> Result<()> {
    let loaded = load(config).await?;
    println!("{}", ConfigUtils::fingerprint(&loaded)?);
    Ok(())
}

pub fn template(name: &str) -> Result<()> {
    print!("{}", ConfigUtils::generate_template(name)?);
    Ok(())
}

pub async fn convert(input: &Path, output: &Path, format: ConfigFormat) -> Result<()> {
    ConfigUtils::convert_format(input, output, format)
        .await
        .with_context(|| format!("failed to convert {}", input.display()))?;
    info!(input = %input.display(), output = %output.display(), ?format, "converted configuration");
    Ok(())
}
