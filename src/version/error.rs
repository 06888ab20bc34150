use thiserror::Error;

/// Failures raised while decomposing a version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse failed: unexpected '.'")]
    UnexpectedDot,
    #[error("version parse failed: unexpected character: {0:?}")]
    UnexpectedCharacter(char),
    #[error("version parse failed: segment too large: {0}")]
    SegmentTooLarge(String),
}

/// Failures raised while bumping a single version line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BumpError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no version segments found in '{0}'")]
    NoSegments(String),
    #[error("segment index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("segment {0} cannot be incremented without overflowing")]
    SegmentOverflow(usize),
    #[error("input line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
