//! # IMA Predeployed - genesis state for SKALE IMA schain contracts
//!
//! Computes the storage of the IMA contracts as their initializers would have
//! left it and emits ready-to-use genesis accounts, so the contracts exist
//! from block zero without deployment transactions.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod generator;
pub mod genesis;
pub mod output;
pub mod storage;
pub mod verify;
