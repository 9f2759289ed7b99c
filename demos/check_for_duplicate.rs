//! Walk-through of typical duplicate-rule checks.
//!
//! Run with:
//! ```bash
//! cargo run --example check_for_duplicate
//! ```

use expr_equiv::check_equivalence;

fn report(title: &str, expr1: &str, expr2: &str) {
    println!("--- {}", title);
    println!("expr1 = {}", expr1);
    println!("expr2 = {}", expr2);
    match check_equivalence(expr1, expr2) {
        Ok(true) => println!("=> duplicates"),
        Ok(false) => println!("=> not duplicates"),
        Err(e) => println!("=> error: {}", e),
    }
    println!();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    report(
        "reordered operands",
        "(foo == 1 && bar == 1) || baz == 0",
        "baz == 0 || (bar == 1 && foo == 1)",
    );

    // `&&` binds tighter than `||`, so the brackets above are optional.
    report(
        "no brackets",
        "foo == 1 && bar == 1 || baz == 0",
        "baz == 0 || bar == 1 && foo == 1",
    );

    report(
        "nested brackets",
        "(foo == 1 && (bar == 1 || baz == 0)) || boo == 0",
        "((baz == 0 || bar == 1) && foo == 1) || boo == 0",
    );

    report("mismatched parameters", "foo == 1", "foo == 1 || boo == 0");

    report(
        "unsupported operators",
        "boo == 1 and foo == 0",
        "foo == 1 or boo == 0",
    );

    report(
        "unsupported comparators",
        "boo > 1 || foo == 0",
        "foo > 1 || boo == 0",
    );

    Ok(())
}
