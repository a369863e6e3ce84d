//! Kind of write being applied to a counted relation

/// What a persistence write does to the row it touches.
///
/// Counter maintenance keys off this instead of inspecting the row, so an
/// update can never be mistaken for an insert and deletes always decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteKind {
    Create,
    Update,
    Delete,
}

impl WriteKind {
    /// Signed change this write contributes to a counter fed by the row
    #[inline]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Create => 1,
            Self::Update => 0,
            Self::Delete => -1,
        }
    }
}
