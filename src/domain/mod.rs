mod catalog;
mod error;
mod ledger;
mod money;
mod room;

pub use catalog::*;
pub use error::*;
pub use ledger::*;
pub use money::*;
pub use room::*;
