// ==============================
// src/config.rs
// ==============================
#![forbid(unsafe_code)]

use std::str::FromStr;

use crate::{error::ClientError, retry::RetryPolicy};

/// Cluster flavor the client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Localnet,
    Devnet,
    Mainnet,
}

impl Environment {
    /// Cluster name as it appears in chain identifiers.
    pub fn cluster_name(&self) -> &'static str {
        match self {
            Self::Localnet => "localnet",
            Self::Devnet => "devnet",
            Self::Mainnet => "mainnet-beta",
        }
    }

    /// Guesses the environment from an RPC endpoint. Anything naming
    /// neither devnet nor mainnet is treated as a local validator.
    pub fn infer(rpc_url: &str) -> Self {
        let url = rpc_url.to_ascii_lowercase();
        if url.contains("mainnet") {
            Self::Mainnet
        } else if url.contains("devnet") {
            Self::Devnet
        } else {
            Self::Localnet
        }
    }
}

/// Confirmation depth for reads and sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl FromStr for Commitment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            other => Err(ClientError::UnknownCommitment(other.to_owned())),
        }
    }
}

/// Connection settings for a chain client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Endpoint to connect to. Clients refuse to start without one.
    pub rpc_url: Option<String>,
    pub timeout_milliseconds: u64,
    pub commitment_level: Commitment,
    pub retry_policy: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Localnet,
            rpc_url: None,
            timeout_milliseconds: 5_000,
            commitment_level: Commitment::Confirmed,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn new_with_rpc(environment: Environment, rpc_url: impl Into<String>) -> Self {
        Self {
            environment,
            rpc_url: Some(rpc_url.into()),
            ..Self::default()
        }
    }

    pub fn with_commitment(mut self, commitment_level: Commitment) -> Self {
        self.commitment_level = commitment_level;
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_timeout(mut self, timeout_milliseconds: u64) -> Self {
        self.timeout_milliseconds = timeout_milliseconds;
        self
    }
}
