// ==============================
// src/error.rs
// ==============================
#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("environment variable `{0}` is not set")]
    MissingEnvVar(&'static str),

    #[error("wallet keypair unusable: {0}")]
    Wallet(String),

    #[error("client config carries no rpc url")]
    MissingRpcUrl,

    #[error("unknown commitment level `{0}`")]
    UnknownCommitment(String),

    #[error("invalid account info: {0}")]
    InvalidAccountInfo(&'static str),

    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}
