//! Token-endpoint data model: the outgoing form request, the parsed response, and the redacted
//! secret wrapper.

pub mod request;
pub mod response;
pub mod secret;

pub use request::*;
pub use response::*;
pub use secret::*;
