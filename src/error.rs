/// Errors returned by the mutating operations of a [`LinkedBst`](struct.LinkedBst.html).
///
/// Neither variant leaves the tree in a partially modified state.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The item to remove is not present in the tree.
    #[error("item not found in tree")]
    NotFound,
    /// The replacement value does not fit the position of the value it would replace.
    #[error("replacement would break the ordering of the tree")]
    OutOfOrder,
}
