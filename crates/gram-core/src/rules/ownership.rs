use crate::value_objects::{AccessMethod, Snowflake};

/// Whether `acting` may perform `method` on a resource owned by `owner`.
///
/// Safe (read-only) methods are open to everyone; anything that mutates
/// requires the acting creator to be the owner.
#[inline]
pub fn can_modify(acting: Snowflake, owner: Snowflake, method: AccessMethod) -> bool {
    method.is_safe() || acting == owner
}
