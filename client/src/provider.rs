// ==============================
// src/provider.rs
// ==============================
#![forbid(unsafe_code)]

use std::env;
use std::fmt;

use solana_sdk::signature::{read_keypair_file, Keypair, Signer};

use crate::{
    config::{ClientConfig, Environment},
    error::ClientError,
};

/// Environment variable naming the RPC endpoint.
pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
/// Environment variable naming the fee payer keypair file.
pub const WALLET_ENV: &str = "ANCHOR_WALLET";

/// Endpoint plus fee payer, resolved from the process environment.
pub struct Provider {
    pub config: ClientConfig,
    pub wallet: Keypair,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("config", &self.config)
            .field("wallet", &self.wallet.pubkey())
            .finish()
    }
}

impl Provider {
    /// Reads `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`. Both must be set;
    /// there is no default cluster to fall back to.
    pub fn env() -> Result<Self, ClientError> {
        let url = env::var(PROVIDER_URL_ENV)
            .map_err(|_| ClientError::MissingEnvVar(PROVIDER_URL_ENV))?;
        let wallet_path =
            env::var(WALLET_ENV).map_err(|_| ClientError::MissingEnvVar(WALLET_ENV))?;

        let wallet = read_keypair_file(&wallet_path)
            .map_err(|e| ClientError::Wallet(format!("{WALLET_ENV}: {wallet_path}: {e}")))?;

        let config = ClientConfig::new_with_rpc(Environment::infer(&url), url);
        Ok(Self { config, wallet })
    }
}
