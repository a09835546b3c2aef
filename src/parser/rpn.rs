use crate::error::Error;
use crate::parser::Token;
use crate::scalar::Scalar;
use log::trace;

fn precedence(operator: &str) -> u8 {
    match operator {
        "+" | "-" => 0,
        "*" | "/" => 1,
        "^" => 2,
        _ => 0,
    }
}

fn is_left_assoc(operator: &str) -> bool {
    operator != "^"
}

/// Converts an infix token stream into postfix order (shunting-yard).
///
/// Unary rewrite: in an operator-starting context (formula start, right after
/// `(`, `,` or another operator) a `+` is dropped and a `-` becomes a literal
/// `-1` followed by `*`, so that negation composes with precedence and
/// function handling. `-2^2` therefore parses as `-(2^2)`.
pub fn to_postfix<T: Scalar>(tokens: Vec<Token<T>>) -> Result<Vec<Token<T>>, Error> {
    let mut output: Vec<Token<T>> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<T>> = Vec::new();
    let mut operator_context = true;

    for token in tokens {
        match token {
            Token::Variable(_) | Token::Constant(_) | Token::Real(_) | Token::Imaginary(_) => {
                operator_context = false;
                output.push(token);
            }

            // A function binds to the parenthesis that follows it.
            Token::Function { .. } => {
                operator_context = false;
                stack.push(token);
            }

            Token::LeftParen => {
                operator_context = true;
                stack.push(token);
            }

            Token::RightParen => {
                operator_context = false;
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(popped) => output.push(popped),
                        None => return Err(Error::Syntax),
                    }
                }
                // The closed argument list belongs to the function in front
                // of it, if any.
                if matches!(stack.last(), Some(Token::Function { .. })) {
                    if let Some(function) = stack.pop() {
                        output.push(function);
                    }
                }
            }

            Token::Comma => {
                operator_context = true;
                loop {
                    if matches!(stack.last(), Some(Token::LeftParen)) {
                        break;
                    }
                    match stack.pop() {
                        Some(popped) => output.push(popped),
                        None => return Err(Error::Syntax),
                    }
                }
            }

            Token::Operator { mut name, mut rule } => {
                if operator_context {
                    if name == "+" {
                        // "+x" is just "x"; the context stays operator-starting.
                        continue;
                    }
                    if name == "-" {
                        trace!("rewriting unary minus as -1 *");
                        output.push(Token::Real(T::from_re(-1.0)));
                        name = "*".to_string();
                        rule = |args| args[0] * args[1];
                    }
                }

                let prec = precedence(&name);
                let left = is_left_assoc(&name);
                loop {
                    let pop = match stack.last() {
                        Some(Token::Operator { name: top, .. }) => {
                            precedence(top) > prec || (precedence(top) == prec && left)
                        }
                        _ => false,
                    };
                    if !pop {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }

                stack.push(Token::Operator { name, rule });
                operator_context = true;
            }
        }
    }

    while let Some(token) = stack.pop() {
        if matches!(token, Token::LeftParen) {
            return Err(Error::Syntax);
        }
        output.push(token);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::symbols::SymbolTable;

    fn postfix(formula: &str) -> Result<Vec<Token<f64>>, Error> {
        let symbols = SymbolTable::new();
        to_postfix(tokenize(formula, &symbols))
    }

    fn shape(formula: &str) -> Vec<String> {
        postfix(formula)
            .unwrap()
            .iter()
            .map(|t| match t {
                Token::Variable(name) => name.clone(),
                Token::Constant(_) => "<const>".to_string(),
                Token::Real(v) => format!("{v}"),
                Token::Imaginary(_) => "<imag>".to_string(),
                Token::Operator { name, .. } => name.clone(),
                Token::Function { name, .. } => name.clone(),
                Token::LeftParen => "(".to_string(),
                Token::RightParen => ")".to_string(),
                Token::Comma => ",".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_precedence_ordering() {
        assert_eq!(shape("2+3*4"), ["2", "3", "4", "*", "+"]);
        assert_eq!(shape("(2+3)*4"), ["2", "3", "+", "4", "*"]);
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(shape("2^3^2"), ["2", "3", "2", "^", "^"]);
        assert_eq!(shape("2-3-4"), ["2", "3", "-", "4", "-"]);
    }

    #[test]
    fn test_function_binds_argument_list() {
        assert_eq!(shape("pow(2,3)"), ["2", "3", "pow"]);
        assert_eq!(shape("sin(x)+1"), ["x", "sin", "1", "+"]);
    }

    #[test]
    fn test_unary_minus_rewrite() {
        assert_eq!(shape("-2^2"), ["-1", "2", "2", "^", "*"]);
        assert_eq!(shape("-(2+2)"), ["-1", "2", "2", "+", "*"]);
        assert_eq!(shape("-sin(x)"), ["-1", "x", "sin", "*"]);
    }

    #[test]
    fn test_unary_plus_is_dropped() {
        assert_eq!(shape("+5"), ["5"]);
        // The dropped plus keeps the context operator-starting, so a
        // following minus is still unary.
        assert_eq!(shape("+-5"), ["-1", "5", "*"]);
    }

    #[test]
    fn test_unary_minus_after_comma() {
        assert_eq!(shape("pow(2,-3)"), ["2", "-1", "3", "*", "pow"]);
    }

    #[test]
    fn test_operator_pop_stops_at_paren() {
        // Closing a group must not flush unrelated operators: 2+(3)^2 is 11.
        assert_eq!(shape("2+(3)^2"), ["2", "3", "2", "^", "+"]);
    }

    #[test]
    fn test_unbalanced_parens_fail() {
        assert_eq!(postfix("(2+3"), Err(Error::Syntax));
        assert_eq!(postfix("2+3)"), Err(Error::Syntax));
    }

    #[test]
    fn test_stray_comma_fails() {
        assert_eq!(postfix("2,3"), Err(Error::Syntax));
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert_eq!(postfix(""), Ok(vec![]));
    }
}
