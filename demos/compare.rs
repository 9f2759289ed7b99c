use clap::Parser;

use expr_equiv::{Checker, CheckerConfig};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// First expression, e.g. "a == 1 && b == 0".
    #[arg(value_name = "EXPR")]
    expr1: String,

    /// Second expression.
    #[arg(value_name = "EXPR")]
    expr2: String,

    /// Maximum number of distinct variables to enumerate.
    #[clap(long, value_name = "INT")]
    max_vars: Option<usize>,

    /// Stop at the first disagreeing assignment.
    #[clap(long)]
    fail_fast: bool,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::debug!("args = {:?}", args);

    let checker = Checker::new(CheckerConfig {
        max_variables: args.max_vars,
        stop_at_first_mismatch: args.fail_fast,
    });

    let time_total = std::time::Instant::now();
    let cmp = checker.compare(&args.expr1, &args.expr2)?;

    println!("variables: {:?}", cmp.variables);
    println!("assignments: {} evaluated, {} agreeing", cmp.evaluated, cmp.agreeing);
    if let Some(env) = &cmp.counterexample {
        println!("counterexample: {}", env);
    }
    println!("equivalent: {}", cmp.equivalent);
    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
