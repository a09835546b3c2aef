mod lexer;
mod rpn;

pub use lexer::tokenize;
pub use rpn::to_postfix;

use crate::symbols::Rule;

/// A classified unit of formula text.
///
/// Produced by lexing + classification, consumed by the shunting-yard
/// converter and the program compiler. Equality is structural: kind, name,
/// arity and value (rules compare as function pointers).
#[derive(Debug, Clone, PartialEq)]
pub enum Token<T> {
    /// Free variable, to be resolved from a [`VariableTable`] at evaluation
    /// time.
    ///
    /// [`VariableTable`]: crate::VariableTable
    Variable(String),
    /// Reserved constant such as `pi`.
    Constant(T),
    /// Real numeric literal.
    Real(T),
    /// Imaginary numeric literal (trailing `i` marker).
    Imaginary(T),
    /// Binary infix operator.
    Operator { name: String, rule: Rule<T> },
    /// Named function; binds to the parenthesized argument list that follows.
    Function {
        name: String,
        arity: usize,
        rule: Rule<T>,
    },
    LeftParen,
    RightParen,
    Comma,
}
