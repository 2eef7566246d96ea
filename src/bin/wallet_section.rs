use dotenv::dotenv;
use eyre::{eyre, Result, WrapErr};
use tracing::info;

use contributor_reputation::models::LinkedWallet;
use contributor_reputation::{parse_wallet_section, telemetry::init_tracing, EngineConfig};

/// Print the wallets linked in a profile README as JSON.
///
/// Usage: wallet_section <README.md>
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing(EngineConfig::from_env().log_format);

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: wallet_section <README.md>"))?;

    let readme = tokio::fs::read_to_string(&path)
        .await
        .wrap_err_with(|| format!("reading {}", path))?;

    let wallets: Vec<LinkedWallet> = parse_wallet_section(&readme)
        .iter()
        .map(LinkedWallet::from)
        .collect();
    info!(path = %path, wallets = wallets.len(), "Parsed wallet section");

    println!("{}", serde_json::to_string_pretty(&wallets)?);
    Ok(())
}
