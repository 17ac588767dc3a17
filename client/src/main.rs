use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use solana_sdk::signature::read_keypair_file;
use zk_port_client::{BlockchainClient, ClientConfig, Commitment, Environment, SolanaClient};

/// Invoke the zk_port_solana program's initialize() method once and print
/// the confirmed transaction signature.
#[derive(Parser)]
struct Options {
    /// RPC endpoint of the target cluster.
    #[clap(long, env = "ANCHOR_PROVIDER_URL")]
    url: String,

    /// Path to the fee payer keypair file.
    #[clap(long, env = "ANCHOR_WALLET")]
    wallet: PathBuf,

    /// Commitment level: processed, confirmed or finalized.
    #[clap(long, default_value = "confirmed")]
    commitment: Commitment,

    /// RPC request timeout in milliseconds.
    #[clap(long, default_value_t = 5_000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Options::parse();

    let wallet = read_keypair_file(&opt.wallet)
        .map_err(|e| anyhow::anyhow!("cannot read wallet {}: {e}", opt.wallet.display()))?;

    let config = ClientConfig::new_with_rpc(Environment::infer(&opt.url), opt.url.clone())
        .with_commitment(opt.commitment)
        .with_timeout(opt.timeout_ms);

    let client = SolanaClient::new(config).await?;
    client
        .health_check()
        .await
        .with_context(|| format!("cluster at {} not reachable", opt.url))?;

    let signature = client.initialize(&wallet).await?;
    println!("Your transaction signature {signature}");

    Ok(())
}
