// ==============================
// src/instruction.rs (8-byte method discriminators)
// ==============================
#![forbid(unsafe_code)]

use solana_program::{
    hash::hashv,
    instruction::Instruction,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::error::ZkPortError;

/// Every instruction starts with an 8-byte method discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;

/// First 8 bytes of sha256("global:initialize").
pub const INITIALIZE_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] =
    [175, 175, 109, 31, 13, 152, 155, 237];

/// Derives the discriminator for a method name in the global namespace.
pub fn method_discriminator(method: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = hashv(&[b"global:", method.as_bytes()]);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest.to_bytes()[..DISCRIMINATOR_LEN]);
    discriminator
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ZkPortInstruction {
    /// initialize()
    /// No arguments, no required accounts.
    Initialize,
}

impl ZkPortInstruction {
    /// Bytes past the discriminator carry the method's argument encoding;
    /// initialize() takes none and ignores them.
    pub fn unpack(ix_data: &[u8]) -> Result<Self, ProgramError> {
        if ix_data.len() < DISCRIMINATOR_LEN {
            return Err(ZkPortError::TruncatedInstructionData.into());
        }
        let discriminator = &ix_data[..DISCRIMINATOR_LEN];
        if discriminator == INITIALIZE_DISCRIMINATOR {
            return Ok(Self::Initialize);
        }
        Err(ZkPortError::UnknownMethod.into())
    }

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Initialize => INITIALIZE_DISCRIMINATOR.to_vec(),
        }
    }
}

/// Builds the initialize() instruction. The method reads no accounts, so
/// the account list stays empty.
pub fn initialize(program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: Vec::new(),
        data: ZkPortInstruction::Initialize.pack(),
    }
}
