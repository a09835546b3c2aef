use crate::parser::Token;
use crate::scalar::Scalar;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Evaluation rule of an operator or function: a pure function of exactly
/// `arity` arguments.
pub type Rule<T> = fn(&[T]) -> T;

/// A reserved entry in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol<T> {
    /// Binary infix operator (`+ - * / ^`).
    Operator(Rule<T>),
    /// Named function of fixed arity.
    Function { arity: usize, rule: Rule<T> },
    /// Named constant with a fixed value.
    Constant(T),
    LeftParen,
    RightParen,
    Comma,
}

static REAL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?([eE][+-]?\d+)?$").unwrap());

static IMAGINARY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d*(\.\d+)?([eE][+-]?\d+)?i$").unwrap());

/// Registry of reserved symbols driving token classification and evaluation.
///
/// Each table is seeded with the built-in operators, constants and functions
/// and is owned by the caller; registering new entries takes `&mut self`, so a
/// table cannot change while a parse borrows it.
#[derive(Debug, Clone)]
pub struct SymbolTable<T> {
    symbols: HashMap<String, Symbol<T>>,
}

impl<T: Scalar> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SymbolTable<T> {
    /// Creates a table holding the built-in symbol set.
    pub fn new() -> Self {
        let mut symbols: HashMap<String, Symbol<T>> = HashMap::new();

        symbols.insert("+".into(), Symbol::Operator(|args| args[0] + args[1]));
        symbols.insert("-".into(), Symbol::Operator(|args| args[0] - args[1]));
        symbols.insert("*".into(), Symbol::Operator(|args| args[0] * args[1]));
        symbols.insert("/".into(), Symbol::Operator(|args| args[0] / args[1]));
        symbols.insert("^".into(), Symbol::Operator(|args| args[0].pow(args[1])));

        symbols.insert("(".into(), Symbol::LeftParen);
        symbols.insert(")".into(), Symbol::RightParen);
        symbols.insert(",".into(), Symbol::Comma);

        use std::f64::consts;
        let constants: [(&str, f64); 12] = [
            ("pi", consts::PI),
            ("inv_pi", consts::FRAC_1_PI),
            ("inv_sqrtpi", consts::FRAC_2_SQRT_PI / 2.0),
            ("e", consts::E),
            ("sqrt2", consts::SQRT_2),
            ("sqrt3", 1.732_050_807_568_877_2),
            ("ln2", consts::LN_2),
            ("ln10", consts::LN_10),
            ("log2e", consts::LOG2_E),
            ("log10e", consts::LOG10_E),
            ("egamma", 0.577_215_664_901_532_9),
            ("phi", 1.618_033_988_749_895),
        ];
        for (name, value) in constants {
            symbols.insert(name.into(), Symbol::Constant(T::from_re(value)));
        }

        let unary: [(&str, Rule<T>); 17] = [
            ("sin", |args| args[0].sin()),
            ("cos", |args| args[0].cos()),
            ("tan", |args| args[0].tan()),
            ("asin", |args| args[0].asin()),
            ("acos", |args| args[0].acos()),
            ("atan", |args| args[0].atan()),
            ("sinh", |args| args[0].sinh()),
            ("cosh", |args| args[0].cosh()),
            ("tanh", |args| args[0].tanh()),
            ("asinh", |args| args[0].asinh()),
            ("acosh", |args| args[0].acosh()),
            ("atanh", |args| args[0].atanh()),
            ("exp", |args| args[0].exp()),
            ("log", |args| args[0].ln()),
            ("ln", |args| args[0].ln()),
            ("log10", |args| args[0].log10()),
            ("sqrt", |args| args[0].sqrt()),
        ];
        for (name, rule) in unary {
            symbols.insert(name.into(), Symbol::Function { arity: 1, rule });
        }

        symbols.insert(
            "pow".into(),
            Symbol::Function {
                arity: 2,
                rule: |args| args[0].pow(args[1]),
            },
        );

        Self { symbols }
    }

    /// Registers a named function, overwriting any existing entry. Arity must
    /// be 1, 2 or 3.
    pub fn register_function(&mut self, name: &str, arity: usize, rule: Rule<T>) {
        debug_assert!((1..=3).contains(&arity));
        self.symbols
            .insert(name.to_string(), Symbol::Function { arity, rule });
    }

    /// Registers a named constant, overwriting any existing entry.
    pub fn register_constant(&mut self, name: &str, value: T) {
        self.symbols
            .insert(name.to_string(), Symbol::Constant(value));
    }

    /// True if `text` is a separator symbol: an operator, parenthesis or
    /// comma. These are the symbols the lexer munches against.
    pub(crate) fn is_separator(&self, text: &str) -> bool {
        matches!(
            self.symbols.get(text),
            Some(Symbol::Operator(_))
                | Some(Symbol::LeftParen)
                | Some(Symbol::RightParen)
                | Some(Symbol::Comma)
        )
    }

    /// Classifies one raw lexeme into a token. Reserved symbols win, then the
    /// numeric literal patterns; anything left over is a free variable, so no
    /// lexeme is ever rejected here.
    pub(crate) fn classify(&self, lexeme: &str) -> Token<T> {
        if let Some(symbol) = self.symbols.get(lexeme) {
            return match *symbol {
                Symbol::Operator(rule) => Token::Operator {
                    name: lexeme.to_string(),
                    rule,
                },
                Symbol::Function { arity, rule } => Token::Function {
                    name: lexeme.to_string(),
                    arity,
                    rule,
                },
                Symbol::Constant(value) => Token::Constant(value),
                Symbol::LeftParen => Token::LeftParen,
                Symbol::RightParen => Token::RightParen,
                Symbol::Comma => Token::Comma,
            };
        }

        if REAL_LITERAL.is_match(lexeme) {
            let value = lexeme.parse::<f64>().unwrap_or(f64::NAN);
            return Token::Real(T::from_re(value));
        }

        if IMAGINARY_LITERAL.is_match(lexeme) {
            // The magnitude defaults to 1 when only the marker (and perhaps a
            // sign) is present.
            let magnitude = &lexeme[..lexeme.len() - 1];
            let value = match magnitude {
                "" | "+" => 1.0,
                "-" => -1.0,
                _ => magnitude.parse::<f64>().unwrap_or(f64::NAN),
            };
            return Token::Imaginary(T::from_im(value));
        }

        Token::Variable(lexeme.to_string())
    }
}
