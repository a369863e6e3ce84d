//! End-to-end helpers: spawn the API on a random port and talk to it over
//! HTTP with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
