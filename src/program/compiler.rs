use crate::error::Error;
use crate::parser::Token;
use crate::program::{Op, Program};
use crate::scalar::Scalar;
use std::collections::HashSet;

impl<T: Scalar> Program<T> {
    /// Compiles a postfix token sequence into a program.
    ///
    /// Walks the sequence once, tracking the stack depth an evaluation would
    /// produce: operands add one, an operator or function of arity k consumes
    /// k and adds one. A negative depth or a final depth other than one means
    /// the formula cannot evaluate to a single value and compilation fails;
    /// nothing is ever partially compiled.
    pub fn from_postfix(postfix: &[Token<T>]) -> Result<Self, Error> {
        let mut ops = Vec::with_capacity(postfix.len());
        let mut variables = HashSet::new();
        let mut depth: usize = 0;

        for token in postfix {
            match token {
                Token::Variable(name) => {
                    variables.insert(name.clone());
                    ops.push(Op::PushVariable(name.clone()));
                    depth += 1;
                }

                Token::Constant(value) | Token::Real(value) | Token::Imaginary(value) => {
                    ops.push(Op::PushConstant(*value));
                    depth += 1;
                }

                Token::Operator { name, rule } => {
                    if depth < 2 {
                        return Err(Error::MissingArgument(name.clone()));
                    }
                    ops.push(Op::Apply {
                        name: name.clone(),
                        arity: 2,
                        rule: *rule,
                    });
                    depth -= 1;
                }

                Token::Function { name, arity, rule } => {
                    if depth < *arity {
                        return Err(Error::MissingArgument(name.clone()));
                    }
                    ops.push(Op::Apply {
                        name: name.clone(),
                        arity: *arity,
                        rule: *rule,
                    });
                    depth -= arity - 1;
                }

                // Parens and commas are consumed by the converter; one
                // reaching this point means the input was never converted.
                Token::LeftParen | Token::RightParen | Token::Comma => {
                    return Err(Error::Syntax);
                }
            }
        }

        if depth != 1 {
            return Err(Error::TooManyArguments);
        }

        Ok(Program { ops, variables })
    }
}
