// ==============================
// src/lib.rs
// ==============================
#![deny(warnings)]
#![forbid(unsafe_code)]

pub mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;

solana_program::declare_id!("Cd1LYGrLomHD7gFdrzU2m4PTCTycfCagJmUtDYVooHWo");
