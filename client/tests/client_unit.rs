// tests/client_unit.rs

use zk_port_client::{
    solana::chain_id, AccountInfo, BlockchainClient, ClientConfig, ClientError, Environment,
    SolanaClient,
};

#[test]
fn account_info_requires_symbol() {
    let err = AccountInfo::new("", 10, [0u8; 32]).unwrap_err();
    assert!(matches!(err, ClientError::InvalidAccountInfo(_)));
}

#[test]
fn account_info_carries_balance_and_owner() {
    let info = AccountInfo::new("SOL", 10, [7u8; 32]).unwrap();
    assert_eq!(info.symbol, "SOL");
    assert_eq!(info.amount, 10);
    assert_eq!(info.address, [7u8; 32]);
}

#[test]
fn chain_id_embeds_cluster_and_genesis() {
    let id = chain_id(Environment::Devnet, "EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG");
    assert_eq!(id, "solana-devnet-EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG");
}

#[tokio::test]
async fn client_refuses_config_without_rpc_url() {
    let err = SolanaClient::new(ClientConfig::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingRpcUrl));
}

#[tokio::test]
async fn client_binds_to_configured_endpoint() {
    let config = ClientConfig::new_with_rpc(Environment::Localnet, "http://127.0.0.1:8899");
    let client = SolanaClient::new(config).await.unwrap();

    // Construction opens no sockets, so this passes offline.
    let rendered = format!("{client:?}");
    assert!(rendered.contains("SolanaClient"));
    assert!(rendered.contains("127.0.0.1"));
}
