use thiserror::Error;

/// Failures raised while compiling or evaluating a formula.
///
/// A formula either fully compiles and is evaluable for every resolvable
/// binding set, or it fails with one of these; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unbalanced parentheses, a stray comma, or any other state the
    /// converter cannot resolve.
    #[error("formula is not well-formed")]
    Syntax,

    /// An operator or function was reached with fewer values on the stack
    /// than its arity requires.
    #[error("missing argument for `{0}`")]
    MissingArgument(String),

    /// The formula does not reduce to a single value (also covers the empty
    /// formula).
    #[error("formula has too many arguments")]
    TooManyArguments,

    /// A free variable had no binding in the supplied table.
    #[error("variable `{0}` is not bound")]
    UnboundVariable(String),
}
