// Application layer: the service every client goes through, the boundary
// error type and parsing of textual input.

pub mod clock;
pub mod error;
pub mod input;
pub mod service;

pub use clock::*;
pub use error::*;
pub use input::*;
pub use service::*;
