// ==============================
// src/processor.rs (method dispatch)
// ==============================
#![forbid(unsafe_code)]

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{error::ZkPortError, instruction::ZkPortInstruction};

pub struct Processor;

impl Processor {
    pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], ix_data: &[u8]) -> ProgramResult {
        // Identity gate before anything else; a proxy invocation under a
        // foreign id must not reach a handler.
        if program_id != &crate::id() {
            return Err(ZkPortError::DeclaredProgramIdMismatch.into());
        }
        let ix = ZkPortInstruction::unpack(ix_data)?;
        match ix {
            ZkPortInstruction::Initialize => {
                msg!("Instruction: Initialize");
                Self::initialize(program_id, accounts)
            }
        }
    }

    // ---------------------------------------------------------------------
    // initialize()
    // Accounts: none required; extras are ignored.
    // ---------------------------------------------------------------------
    fn initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
        msg!("Greetings from: {}", program_id);
        Ok(())
    }
}
