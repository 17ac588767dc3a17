// tests/instruction_unit.rs

use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use zk_port_solana::{
    error::ZkPortError,
    instruction::{
        initialize, method_discriminator, ZkPortInstruction, DISCRIMINATOR_LEN,
        INITIALIZE_DISCRIMINATOR,
    },
    processor::Processor,
};

// -----------------------------
// Discriminators
// -----------------------------
#[test]
fn initialize_discriminator_matches_derivation() {
    assert_eq!(INITIALIZE_DISCRIMINATOR.len(), DISCRIMINATOR_LEN);
    assert_eq!(method_discriminator("initialize"), INITIALIZE_DISCRIMINATOR);
}

#[test]
fn discriminators_differ_across_method_names() {
    assert_ne!(method_discriminator("initialize"), method_discriminator("shutdown"));
    assert_ne!(method_discriminator("initialize"), method_discriminator("Initialize"));
}

// -----------------------------
// Unpack
// -----------------------------
#[test]
fn unpack_accepts_exact_discriminator() {
    let ix = ZkPortInstruction::unpack(&INITIALIZE_DISCRIMINATOR).unwrap();
    assert_eq!(ix, ZkPortInstruction::Initialize);
}

#[test]
fn unpack_tolerates_trailing_bytes() {
    let mut data = INITIALIZE_DISCRIMINATOR.to_vec();
    data.extend_from_slice(&[0xde, 0xad]);
    assert_eq!(ZkPortInstruction::unpack(&data).unwrap(), ZkPortInstruction::Initialize);
}

#[test]
fn unpack_rejects_short_data() {
    for len in [0usize, 1, 7] {
        let data = vec![0u8; len];
        let err = ZkPortInstruction::unpack(&data).unwrap_err();
        assert_eq!(
            err,
            ProgramError::Custom(ZkPortError::TruncatedInstructionData as u32),
            "len = {len}"
        );
    }
}

#[test]
fn unpack_rejects_unknown_discriminator() {
    let data = method_discriminator("finalize");
    let err = ZkPortInstruction::unpack(&data).unwrap_err();
    assert_eq!(err, ProgramError::Custom(ZkPortError::UnknownMethod as u32));
}

#[test]
fn pack_round_trips_through_unpack() {
    let data = ZkPortInstruction::Initialize.pack();
    assert_eq!(ZkPortInstruction::unpack(&data).unwrap(), ZkPortInstruction::Initialize);
}

// -----------------------------
// Builder
// -----------------------------
#[test]
fn initialize_builder_has_no_accounts() {
    let ix = initialize(&zk_port_solana::id());
    assert_eq!(ix.program_id, zk_port_solana::id());
    assert!(ix.accounts.is_empty());
    assert_eq!(ix.data, INITIALIZE_DISCRIMINATOR.to_vec());
}

// -----------------------------
// Processor (direct calls; initialize touches no accounts or sysvars)
// -----------------------------
#[test]
fn process_rejects_foreign_program_id() {
    let foreign = Pubkey::new_unique();
    let err = Processor::process(&foreign, &[], &INITIALIZE_DISCRIMINATOR).unwrap_err();
    assert_eq!(
        err,
        ProgramError::Custom(ZkPortError::DeclaredProgramIdMismatch as u32)
    );
}

#[test]
fn process_handles_initialize_under_declared_id() {
    let program_id = zk_port_solana::id();
    Processor::process(&program_id, &[], &INITIALIZE_DISCRIMINATOR).unwrap();
}
