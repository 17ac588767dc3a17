// ==============================
// src/error.rs
// ==============================
#![forbid(unsafe_code)]

use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[repr(u32)]
pub enum ZkPortError {
    // 0–9: Dispatch
    #[error("Unknown method discriminator")]
    UnknownMethod = 0,
    #[error("Instruction data shorter than a discriminator")]
    TruncatedInstructionData = 1,

    // 10–19: Identity
    #[error("Program id does not match the declared id")]
    DeclaredProgramIdMismatch = 10,
}

impl From<ZkPortError> for ProgramError {
    fn from(e: ZkPortError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
