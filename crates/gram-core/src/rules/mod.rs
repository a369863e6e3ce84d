//! Domain rules that are pure functions of their inputs
//!
//! - [`counters`]: which denormalized counters move, and by how much, for a
//!   given write. Repositories apply these inside the same transaction as
//!   the write itself.
//! - [`ownership`]: who may mutate a resource.

mod counters;
mod ownership;

pub use counters::{
    creator_removal_deltas, follow_deltas, image_deltas, like_deltas, CounterDelta, CounterField,
    CounterOwner,
};
pub use ownership::can_modify;
