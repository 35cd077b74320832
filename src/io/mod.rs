mod export;
mod import;
mod seed;

pub use export::*;
pub use import::*;
pub use seed::*;
