//! Instruction set of the Hack machine: mnemonic tables, predefined symbols
//! and the 16-bit instruction encoding.

pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod symbol;

/// Highest address reachable by an A-instruction (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;
