use core::fmt::{self, Display, Formatter};

/// Result type of every fallible tree operation.
pub type Result<T = (), E = Error> = core::result::Result<T, E>;

/// Errors returned by tree operations.
///
/// A failed call never leaves a partial mutation behind: keys are checked during the
/// descent, before anything is attached, overwritten or unlinked.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The key has no ordering: it does not compare equal to itself (for instance
    /// `f64::NAN`), or it has no ordering relative to a key already in the tree.
    InvalidKey,
    /// A rotation could not be carried out.
    Rotation(RotationError),
}

/// Why a rotation was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum RotationError {
    /// The node to rotate is an empty link.
    NilNode,
    /// The node has no child on the side the pivot must come from.
    MissingPivot,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey => f.write_str("key has no total ordering"),
            Error::Rotation(error) => write!(f, "rotation failed: {error}"),
        }
    }
}

impl Display for RotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RotationError::NilNode => "cannot rotate an empty link",
            RotationError::MissingPivot => "cannot rotate without a pivot",
        })
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::InvalidKey => None,
            Error::Rotation(error) => Some(error),
        }
    }
}

impl core::error::Error for RotationError {}

impl From<RotationError> for Error {
    fn from(error: RotationError) -> Self {
        Error::Rotation(error)
    }
}
