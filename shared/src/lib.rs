//! Wire types exchanged between the course server and its HTTP clients.

pub mod protocol;

pub use protocol::*;
