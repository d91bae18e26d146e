#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every anomaly that strict evaluation refuses.
///
/// Offsets are byte offsets into the evaluated expression and point at the
/// first character of the offending token.
pub enum EvalError {
    /// An operator character other than `+`, `-`, `*` or `/`.
    UnsupportedOperator {
        /// The operator character encountered.
        op:     char,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A numeric literal with more than one decimal point or no digit.
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// Division by a literal equal to zero.
    DivisionByZero {
        /// Byte offset of the zero literal.
        offset: usize,
    },
    /// A number directly followed another number.
    MissingOperator {
        /// Byte offset of the second number.
        offset: usize,
    },
    /// An operator directly followed another operator.
    UnexpectedOperator {
        /// The second operator character.
        op:     char,
        /// Byte offset of the second operator.
        offset: usize,
    },
    /// The expression ended while an operator still waited for its operand.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the expression.
        offset: usize,
    },
}

impl EvalError {
    /// Returns the byte offset the error points at.
    ///
    /// # Example
    /// ```
    /// use lrcalc::error::EvalError;
    ///
    /// let err = EvalError::DivisionByZero { offset: 4 };
    /// assert_eq!(err.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnsupportedOperator { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::MissingOperator { offset }
            | Self::UnexpectedOperator { offset, .. }
            | Self::UnexpectedEndOfInput { offset } => *offset,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperator { op, offset } => {
                write!(f, "Error at offset {offset}: Unsupported operator '{op}'.")
            },
            Self::MalformedNumber { literal, offset } => {
                write!(f, "Error at offset {offset}: Malformed number '{literal}'.")
            },
            Self::DivisionByZero { offset } => write!(f, "Error at offset {offset}: Division by zero."),
            Self::MissingOperator { offset } => write!(f,
                                                       "Error at offset {offset}: Expected an operator between two numbers."),
            Self::UnexpectedOperator { op, offset } => write!(f,
                                                              "Error at offset {offset}: Unexpected operator '{op}', expected a number."),
            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
