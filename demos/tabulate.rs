use formulac::{SymbolTable, VariableTable};

/// Binds a formula to one free variable and prints a value table, the way a
/// plotting host would sample it.
fn main() {
    pretty_env_logger::init();

    let symbols = SymbolTable::new();
    let program = formulac::compile("a*sin(x) + b", &symbols).unwrap();
    println!("free variables: {:?}", program.variables());

    let base = VariableTable::from_pairs([("a", 2.0), ("b", 0.5)]);
    let f = program.bind(&base, "x").unwrap();

    for step in 0..=8 {
        let x = step as f64 * std::f64::consts::FRAC_PI_4;
        println!("x = {x:6.4}  f(x) = {:+.4}", f.call(x).unwrap());
    }
}
