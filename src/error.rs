/// Errors that can occur during vector and matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Malformed construction input or an out-of-range interpolation factor.
    /// The message names the expected value or count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Row index at or beyond the matrix's row count.
    #[error("row index {row} out of range: max row is {max_row}")]
    OutOfRange { row: usize, max_row: usize },

    /// Scalar division by a value within tolerance of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Determinant within tolerance of zero, or no usable pivot found
    /// during elimination.
    #[error("matrix is not invertible")]
    NotInvertible,
}

pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            MathError::InvalidArgument("number of rows must be 3".to_string()).to_string(),
            "invalid argument: number of rows must be 3"
        );
        assert_eq!(
            MathError::OutOfRange { row: 5, max_row: 3 }.to_string(),
            "row index 5 out of range: max row is 3"
        );
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::NotInvertible.to_string(),
            "matrix is not invertible"
        );
    }

    #[test]
    fn error_kinds_are_matchable() {
        let e = MathError::OutOfRange { row: 9, max_row: 4 };
        match e {
            MathError::OutOfRange { row, max_row } => {
                assert_eq!(row, 9);
                assert_eq!(max_row, 4);
            }
            _ => panic!("wrong error kind"),
        }
    }
}
