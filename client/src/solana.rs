// ==============================
// src/solana.rs
// ==============================
#![forbid(unsafe_code)]

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    config::{ClientConfig, Commitment, Environment},
    error::ClientError,
    retry::execute_with_retry,
    AccountInfo, BlockchainClient,
};

/// Chain identifier for a cluster and its genesis hash.
pub fn chain_id(environment: Environment, genesis_hash: &str) -> String {
    format!("solana-{}-{}", environment.cluster_name(), genesis_hash)
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Solana JSON-RPC client speaking the program's wire format.
pub struct SolanaClient {
    client: RpcClient,
    config: ClientConfig,
}

impl fmt::Debug for SolanaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BlockchainClient for SolanaClient {
    async fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let Some(rpc_url) = config.rpc_url.clone() else {
            return Err(ClientError::MissingRpcUrl);
        };

        let client = RpcClient::new_with_timeout_and_commitment(
            rpc_url.clone(),
            Duration::from_millis(config.timeout_milliseconds),
            config.commitment_level.into(),
        );
        debug!("solana client bound to {rpc_url} ({:?})", config.environment);

        Ok(Self { client, config })
    }

    async fn get_account_info(&self, pubkey: [u8; 32]) -> Result<AccountInfo, ClientError> {
        let pubkey = Pubkey::from(pubkey);
        let account = self.client.get_account(&pubkey).await?;
        AccountInfo::new("SOL", account.lamports, account.owner.to_bytes())
    }

    async fn health_check(&self) -> Result<(), ClientError> {
        self.client.get_health().await?;
        Ok(())
    }

    async fn get_chain_id(&self) -> Result<String, ClientError> {
        let genesis_hash = self.client.get_genesis_hash().await?;
        Ok(chain_id(self.config.environment, &genesis_hash.to_string()))
    }
}

impl SolanaClient {
    /// Invokes the program's initialize() method and returns the confirmed
    /// transaction signature.
    pub async fn initialize(&self, payer: &Keypair) -> Result<Signature, ClientError> {
        self.invoke_method(payer, &zk_port_solana::id(), "initialize").await
    }

    /// Invokes a no-argument method by name; the instruction carries the
    /// method discriminator and nothing else.
    pub async fn invoke_method(
        &self,
        payer: &Keypair,
        program_id: &Pubkey,
        method: &str,
    ) -> Result<Signature, ClientError> {
        debug!("invoking `{method}` on {program_id}");
        let instruction = Instruction {
            program_id: *program_id,
            accounts: Vec::new(),
            data: zk_port_solana::instruction::method_discriminator(method).to_vec(),
        };
        self.send_instruction(payer, instruction).await
    }

    async fn send_instruction(
        &self,
        payer: &Keypair,
        instruction: Instruction,
    ) -> Result<Signature, ClientError> {
        let client = &self.client;
        execute_with_retry(
            || {
                let instruction = instruction.clone();
                async move {
                    // A fresh blockhash per attempt; one fetched before a
                    // failed send may have expired by the retry.
                    let blockhash = client.get_latest_blockhash().await?;
                    let transaction = Transaction::new_signed_with_payer(
                        &[instruction],
                        Some(&payer.pubkey()),
                        &[payer],
                        blockhash,
                    );
                    Ok(client.send_and_confirm_transaction(&transaction).await?)
                }
            },
            self.config.retry_policy,
        )
        .await
    }
}
