//! Compile textual infix math formulas into reusable numeric programs.
//!
//! A formula is lexed, converted to postfix with the shunting-yard algorithm,
//! and compiled into a flat operation sequence that can be evaluated any
//! number of times against different variable bindings:
//!
//! ```
//! use formulac::{SymbolTable, VariableTable};
//!
//! let symbols = SymbolTable::new();
//! let program = formulac::compile("a*x^3 - 2", &symbols).unwrap();
//!
//! let base = VariableTable::from_pairs([("a", 2.0)]);
//! let f = program.bind(&base, "x").unwrap();
//! assert_eq!(f.call(3.0).unwrap(), 52.0);
//! ```

pub mod cache;
pub mod error;
pub mod parser;
pub mod program;
pub mod scalar;
pub mod symbols;
pub mod vartable;

pub use cache::FormulaCache;
pub use error::Error;
pub use parser::Token;
pub use program::{Callable, Op, Program};
pub use scalar::Scalar;
pub use symbols::{Rule, Symbol, SymbolTable};
pub use vartable::VariableTable;

/// Compiles a formula against a symbol table.
pub fn compile<T: Scalar>(formula: &str, symbols: &SymbolTable<T>) -> Result<Program<T>, Error> {
    let tokens = parser::tokenize(formula, symbols);
    let postfix = parser::to_postfix(tokens)?;
    Program::from_postfix(&postfix)
}

/// Compiles a formula with the built-in symbols and evaluates it once against
/// the given bindings.
pub fn evaluate_formula<T: Scalar>(
    formula: &str,
    variables: &VariableTable<T>,
) -> Result<T, Error> {
    let symbols = SymbolTable::new();
    compile(formula, &symbols)?.evaluate(variables)
}
