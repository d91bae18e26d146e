use std::fmt;

/// Represents a pending operator of the left-to-right fold.
///
/// Any operator character can be stored; only the four arithmetic ones have
/// an effect when a number is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Operator {
    /// Addition (`+`). Also the implicit operator before the first number.
    #[default]
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Any other character scanned in operator position.
    Unsupported(char),
}

/// Outcome of applying a number to the running total.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Application {
    /// The operator produced a new total.
    Applied(f64),
    /// Division by a zero literal; the total is kept.
    SkippedDivisionByZero,
    /// The operator is unsupported; the number is consumed and dropped.
    SkippedUnsupported(char),
}

impl Operator {
    /// Applies `num` to `total` according to this operator.
    ///
    /// Division by `0.0` and unsupported operators leave the total untouched
    /// and report why through the returned [`Application`].
    ///
    /// # Example
    /// ```
    /// use lrcalc::interpreter::operator::{Application, Operator};
    ///
    /// assert_eq!(Operator::Mul.apply(5.0, 4.0), Application::Applied(20.0));
    /// assert_eq!(Operator::Div.apply(5.0, 0.0),
    ///            Application::SkippedDivisionByZero);
    /// assert_eq!(Operator::from('%').apply(5.0, 2.0),
    ///            Application::SkippedUnsupported('%'));
    /// ```
    #[must_use]
    pub fn apply(self, total: f64, num: f64) -> Application {
        match self {
            Self::Add => Application::Applied(total + num),
            Self::Sub => Application::Applied(total - num),
            Self::Mul => Application::Applied(total * num),
            Self::Div => {
                if num == 0.0 {
                    return Application::SkippedDivisionByZero;
                }
                Application::Applied(total / num)
            },
            Self::Unsupported(c) => Application::SkippedUnsupported(c),
        }
    }

    /// Returns `true` for the four arithmetic operators.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl Application {
    /// Returns the total after the application, given the total before it.
    #[must_use]
    pub const fn total_or(self, previous: f64) -> f64 {
        match self {
            Self::Applied(total) => total,
            Self::SkippedDivisionByZero | Self::SkippedUnsupported(_) => previous,
        }
    }
}

impl From<char> for Operator {
    fn from(c: char) -> Self {
        match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            other => Self::Unsupported(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Unsupported(c) => write!(f, "{c}"),
        }
    }
}
