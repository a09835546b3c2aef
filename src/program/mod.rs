mod compiler;
mod executor;

pub use executor::Callable;

use crate::symbols::Rule;
use std::collections::HashSet;

/// One executable step of a compiled program.
#[derive(Debug, Clone, PartialEq)]
pub enum Op<T> {
    /// Push a literal or constant value.
    PushConstant(T),
    /// Push the binding of a free variable, looked up at evaluation time.
    PushVariable(String),
    /// Pop `arity` values, apply the rule, push the single result.
    Apply {
        name: String,
        arity: usize,
        rule: Rule<T>,
    },
}

/// A compiled formula: an operation sequence plus the set of free variables
/// it references.
///
/// Programs carry no bindings, never change after compilation, and may be
/// evaluated any number of times — concurrently, if each evaluation uses its
/// own variable table.
#[derive(Debug, Clone, PartialEq)]
pub struct Program<T> {
    pub(crate) ops: Vec<Op<T>>,
    pub(crate) variables: HashSet<String>,
}

impl<T> Program<T> {
    /// Names of the free variables this program reads.
    pub fn variables(&self) -> &HashSet<String> {
        &self.variables
    }

    /// Number of operations executed per evaluation.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
