use formulac::{SymbolTable, VariableTable};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let symbols = SymbolTable::new();

    let expr = "2 + 3 * 4";
    let program = formulac::compile(expr, &symbols).unwrap();
    debug!("compiled: {program:?}");
    println!("{expr} = {}", program.evaluate(&VariableTable::new()).unwrap());

    let expr = "sin(pi/2) + pow(2, 10)";
    let program = formulac::compile(expr, &symbols).unwrap();
    println!("{expr} = {}", program.evaluate(&VariableTable::new()).unwrap());

    let expr = "price * (1 - discount)";
    let program = formulac::compile(expr, &symbols).unwrap();
    let table = VariableTable::from_pairs([("price", 120.0), ("discount", 0.25)]);
    println!("{expr} = {}", program.evaluate(&table).unwrap());

    // Custom functions are registered per symbol table.
    let mut symbols = SymbolTable::new();
    symbols.register_function("square", 1, |args: &[f64]| args[0] * args[0]);
    let expr = "square(7) - 9";
    let program = formulac::compile(expr, &symbols).unwrap();
    println!("{expr} = {}", program.evaluate(&VariableTable::new()).unwrap());
}
