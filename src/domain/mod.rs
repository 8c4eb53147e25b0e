mod ledger;
mod money;
mod student;

pub use ledger::*;
pub use money::*;
pub use student::*;
