use thiserror::Error;

/// Error type for strand construction and range access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    /// A 1-based range `begin..begin + width` does not fit inside the strand.
    #[error("Range starting at {begin} with width {width} out of bounds (len = {len})")]
    RangeOutOfBounds {
        /// 1-based starting position that was requested
        begin: usize,
        /// Number of acids requested
        width: usize,
        /// Length of the strand the range was taken from
        len: usize,
    },

    /// An acid was required but the strand holds none.
    #[error("Empty strand not allowed")]
    EmptyStrand,

    /// Parsed text contained a character that cannot be an acid.
    #[error("Invalid character in strand: {0:?}")]
    InvalidChar(char),
}
