pub mod stub_ledger;
pub mod strategies;

pub use stub_ledger::*;
