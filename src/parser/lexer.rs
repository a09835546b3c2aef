use crate::parser::Token;
use crate::scalar::Scalar;
use crate::symbols::SymbolTable;

/// Splits a formula into classified tokens.
///
/// Whitespace is an unconditional separator and is consumed. Within a
/// non-whitespace run, maximal munch applies against the separator symbols of
/// the table (operators, parentheses, comma): the current run keeps growing
/// while it still matches a separator; once it stops matching, a boundary is
/// emitted where either side of the split is itself a separator. This stage
/// never fails — classification maps unknown lexemes to free variables.
pub fn tokenize<T: Scalar>(formula: &str, symbols: &SymbolTable<T>) -> Vec<Token<T>> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut buf = [0u8; 4];

    for c in formula.chars() {
        if c.is_whitespace() {
            if !run.is_empty() {
                tokens.push(symbols.classify(&run));
                run.clear();
            }
            continue;
        }

        if run.is_empty() {
            run.push(c);
            continue;
        }

        // Maximal munch: extend the run while it still matches a separator
        // symbol.
        run.push(c);
        if symbols.is_separator(&run) {
            continue;
        }
        run.pop();

        let single = c.encode_utf8(&mut buf);
        if symbols.is_separator(&run) || symbols.is_separator(single) {
            tokens.push(symbols.classify(&run));
            run.clear();
        }
        run.push(c);
    }

    if !run.is_empty() {
        tokens.push(symbols.classify(&run));
    }

    tokens
}
