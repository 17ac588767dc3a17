// ==============================
// src/lib.rs
// ==============================
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod provider;
pub mod retry;
pub mod solana;

use std::fmt::Debug;

use async_trait::async_trait;

pub use config::{ClientConfig, Commitment, Environment};
pub use error::ClientError;
pub use provider::Provider;
pub use retry::{execute_with_retry, RetryPolicy};
pub use solana::SolanaClient;

/// Info about an account on the target chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Asset symbol, e.g. SOL.
    pub symbol: String,
    /// Balance in the chain's base units.
    pub amount: u64,
    /// Program that owns the account.
    pub address: [u8; 32],
}

impl AccountInfo {
    pub fn new(symbol: impl AsRef<str>, amount: u64, address: [u8; 32]) -> Result<Self, ClientError> {
        let symbol = symbol.as_ref();
        if symbol.is_empty() {
            return Err(ClientError::InvalidAccountInfo("symbol cannot be empty"));
        }
        Ok(Self {
            symbol: symbol.to_owned(),
            amount,
            address,
        })
    }
}

/// Common surface for chain clients.
#[async_trait]
pub trait BlockchainClient: Send + Sync + Debug {
    /// Builds a client bound to the endpoint named in `config`.
    async fn new(config: ClientConfig) -> Result<Self, ClientError>
    where
        Self: Sized;

    /// Fetches balance and ownership info for the account at `pubkey`.
    async fn get_account_info(&self, pubkey: [u8; 32]) -> Result<AccountInfo, ClientError>;

    /// Cheap connectivity probe against the configured endpoint.
    async fn health_check(&self) -> Result<(), ClientError>;

    /// Stable identifier of the network the client is connected to.
    async fn get_chain_id(&self) -> Result<String, ClientError>;

    /// Re-establishes the connection. Clients over stateless transports
    /// have nothing to do here.
    async fn reconnect(&self) -> Result<(), ClientError> {
        Ok(())
    }
}
