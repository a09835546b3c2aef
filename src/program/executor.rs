use crate::error::Error;
use crate::program::{Op, Program};
use crate::scalar::Scalar;
use crate::vartable::VariableTable;
use log::debug;

impl<T: Scalar> Program<T> {
    /// Runs the program against a table of variable bindings.
    ///
    /// Every free variable must be bound in `variables`; a miss fails the
    /// evaluation without touching the table. The depth invariant established
    /// at compile time guarantees exactly one value remains.
    pub fn evaluate(&self, variables: &VariableTable<T>) -> Result<T, Error> {
        self.run(variables, None)
    }

    /// Eagerly validates that every free variable is either bound in `base`
    /// or is the designated argument `variable`, then returns a reusable
    /// single-argument callable over the program.
    pub fn bind<'p>(
        &'p self,
        base: &VariableTable<T>,
        variable: &str,
    ) -> Result<Callable<'p, T>, Error> {
        for name in &self.variables {
            if name != variable && !base.contains(name) {
                return Err(Error::UnboundVariable(name.clone()));
            }
        }

        Ok(Callable {
            program: self,
            base: base.clone(),
            variable: variable.to_string(),
        })
    }

    fn run(&self, variables: &VariableTable<T>, argument: Option<(&str, T)>) -> Result<T, Error> {
        let mut stack: Vec<T> = Vec::with_capacity(self.ops.len());

        for op in &self.ops {
            match op {
                Op::PushConstant(value) => stack.push(*value),

                Op::PushVariable(name) => {
                    let value = match argument {
                        Some((arg, value)) if arg == name => value,
                        _ => variables
                            .get(name)
                            .ok_or_else(|| Error::UnboundVariable(name.clone()))?,
                    };
                    debug!("load {name} = {value:?}");
                    stack.push(value);
                }

                Op::Apply { name, arity, rule } => {
                    if stack.len() < *arity {
                        return Err(Error::MissingArgument(name.clone()));
                    }
                    // The slice keeps the arguments in original left-to-right
                    // order.
                    let split = stack.len() - arity;
                    let result = rule(&stack[split..]);
                    stack.truncate(split);
                    stack.push(result);
                }
            }
        }

        stack.pop().ok_or(Error::TooManyArguments)
    }
}

/// A compiled formula bound to a base table, callable with one free variable.
///
/// Each invocation overlays the argument binding on the base table; the base
/// is never mutated. Construction goes through [`Program::bind`], which has
/// already checked that every other free variable resolves.
#[derive(Debug, Clone)]
pub struct Callable<'p, T: Scalar> {
    program: &'p Program<T>,
    base: VariableTable<T>,
    variable: String,
}

impl<T: Scalar> Callable<'_, T> {
    pub fn call(&self, value: T) -> Result<T, Error> {
        self.program.run(&self.base, Some((&self.variable, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{to_postfix, tokenize};
    use crate::symbols::SymbolTable;
    use num_complex::Complex64;

    fn compile(formula: &str) -> Program<f64> {
        let symbols = SymbolTable::new();
        Program::from_postfix(&to_postfix(tokenize(formula, &symbols)).unwrap()).unwrap()
    }

    fn eval(formula: &str) -> f64 {
        compile(formula).evaluate(&VariableTable::new()).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("2^3^2"), 512.0);
    }

    #[test]
    fn test_unary_rewrite() {
        assert_eq!(eval("-2^2"), -4.0);
        assert_eq!(eval("-(2+2)"), -4.0);
        assert_eq!(eval("+5"), 5.0);
    }

    #[test]
    fn test_function_operator_equivalence() {
        assert_eq!(eval("pow(2,3)"), 8.0);
        assert_eq!(eval("2^3"), 8.0);
    }

    #[test]
    fn test_argument_order_preserved() {
        // 2^3, not 3^2.
        assert_eq!(eval("pow(2,3)"), 8.0);
        assert_eq!(eval("10/4"), 2.5);
        assert_eq!(eval("1-3"), -2.0);
    }

    #[test]
    fn test_builtin_functions_and_constants() {
        assert_eq!(eval("sin(0)"), 0.0);
        assert_eq!(eval("cos(0)"), 1.0);
        assert_eq!(eval("sqrt(16)"), 4.0);
        assert!((eval("exp(1)") - std::f64::consts::E).abs() < 1e-12);
        assert!((eval("log10(1000)") - 3.0).abs() < 1e-12);
        assert!((eval("sin(pi/2)") - 1.0).abs() < 1e-12);
        assert!((eval("ln(e)") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinism() {
        let program = compile("a*x^3 - 2");
        let table = VariableTable::from_pairs([("a", 2.0), ("x", 3.0)]);
        let first = program.evaluate(&table).unwrap();
        for _ in 0..10 {
            assert_eq!(program.evaluate(&table).unwrap(), first);
        }
    }

    #[test]
    fn test_variable_lookup() {
        let program = compile("price + volume");
        let table = VariableTable::from_pairs([("price", 100.0), ("volume", 50.0)]);
        assert_eq!(program.evaluate(&table).unwrap(), 150.0);
    }

    #[test]
    fn test_unbound_variable_fails_evaluation() {
        let program = compile("x + 2");
        assert_eq!(
            program.evaluate(&VariableTable::new()),
            Err(Error::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn test_bound_callable_composition() {
        let program = compile("a*x^3 - 2");
        let table = VariableTable::from_pairs([("a", 2.0)]);
        let f = program.bind(&table, "x").unwrap();
        assert_eq!(f.call(3.0).unwrap(), 52.0);
        assert_eq!(f.call(0.0).unwrap(), -2.0);
        // The base table is left untouched by the calls.
        assert_eq!(table.len(), 1);
        assert!(!table.contains("x"));
    }

    #[test]
    fn test_unbound_variable_detected_at_bind_time() {
        let program = compile("b*x");
        let err = program.bind(&VariableTable::new(), "x");
        assert_eq!(err.err(), Some(Error::UnboundVariable("b".to_string())));
    }

    #[test]
    fn test_argument_shadows_base_binding() {
        let program = compile("x");
        let table = VariableTable::from_pairs([("x", 1.0)]);
        let f = program.bind(&table, "x").unwrap();
        assert_eq!(f.call(9.0).unwrap(), 9.0);
    }

    #[test]
    fn test_reserved_names_are_never_shadowed() {
        // `e` classifies as the built-in constant, so a table binding of the
        // same name is never consulted.
        let program = compile("e + x");
        assert!(!program.variables().contains("e"));
        let table = VariableTable::from_pairs([("e", 1000.0), ("x", 1.0)]);
        assert!((program.evaluate(&table).unwrap() - (std::f64::consts::E + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_program_is_reusable_across_tables() {
        let program = compile("x*x");
        for x in [0.0, 1.5, -3.0] {
            let table = VariableTable::from_pairs([("x", x)]);
            assert_eq!(program.evaluate(&table).unwrap(), x * x);
        }
    }

    #[test]
    fn test_registered_function_evaluates() {
        let mut symbols: SymbolTable<f64> = SymbolTable::new();
        symbols.register_function("clamp01", 1, |args| args[0].max(0.0).min(1.0));
        symbols.register_function("median3", 3, |args| {
            let (a, b, c) = (args[0], args[1], args[2]);
            a.max(b.min(c)).min(b.max(c))
        });
        let tokens = tokenize("median3(3, clamp01(9), 2)", &symbols);
        let program = Program::from_postfix(&to_postfix(tokens).unwrap()).unwrap();
        assert_eq!(program.evaluate(&VariableTable::new()).unwrap(), 2.0);
    }

    #[test]
    fn test_complex_evaluation() {
        let symbols: SymbolTable<Complex64> = SymbolTable::new();
        let tokens = tokenize("i*i", &symbols);
        let program = Program::from_postfix(&to_postfix(tokens).unwrap()).unwrap();
        let result = program.evaluate(&VariableTable::new()).unwrap();
        assert!((result - Complex64::new(-1.0, 0.0)).norm() < 1e-12);

        let tokens = tokenize("exp(i*pi)", &symbols);
        let program = Program::from_postfix(&to_postfix(tokens).unwrap()).unwrap();
        let result = program.evaluate(&VariableTable::new()).unwrap();
        assert!((result - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_imaginary_literal_magnitude() {
        let symbols: SymbolTable<Complex64> = SymbolTable::new();
        let tokens = tokenize("3i + 2", &symbols);
        let program = Program::from_postfix(&to_postfix(tokens).unwrap()).unwrap();
        let result = program.evaluate(&VariableTable::new()).unwrap();
        assert_eq!(result, Complex64::new(2.0, 3.0));
    }

    #[test]
    fn test_imaginary_literal_over_reals_is_nan() {
        // Out-of-domain input behaves like any other f64 domain error.
        assert!(eval("2i + 1").is_nan());
    }
}
