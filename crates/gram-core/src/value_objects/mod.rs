//! Value objects - small immutable types shared across the domain

mod access_method;
mod snowflake;
mod write_kind;

pub use access_method::AccessMethod;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeError};
pub use write_kind::WriteKind;
