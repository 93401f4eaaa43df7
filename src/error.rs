/// An error indicating why a common sub-path couldn't be computed
///
/// Both reducers fail fast: on error, no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, displaydoc::Display)]
pub enum CommonPathError {
    /// the path sequence is empty
    EmptyInput,
    /// can't mix absolute and relative paths
    MixedAbsoluteRelative,
    /// can't mix rooted and not-rooted paths
    MixedRootedNotRooted,
    /// paths don't have the same drive
    DriveMismatch,
    /// invalid UNC path
    InvalidUncPath,
}

#[cfg(feature = "std")]
impl std::error::Error for CommonPathError {}

/// An alias for a [`Result`] with a [`CommonPathError`] error type
pub type CommonPathResult<T> = Result<T, CommonPathError>;
