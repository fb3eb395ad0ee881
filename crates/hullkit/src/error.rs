use thiserror::Error;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Errors surfaced by the geometric algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Input too short or a parameter out of range (e.g. < 3 points for subdivision).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// Input is well-formed but the geometry collapses (zero-length vector, flat hull).
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GeomError;

    #[test]
    fn display_carries_reason() {
        let e = GeomError::invalid("need at least 3 points, got 2");
        assert_eq!(e.to_string(), "invalid input: need at least 3 points, got 2");
        let d = GeomError::degenerate("zero-length vector");
        assert_eq!(d.to_string(), "degenerate geometry: zero-length vector");
    }
}
