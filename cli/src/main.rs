use clap::{Parser, Subcommand};
use converter::config::Config;
use converter::units::{self, ConversionEngine, ConversionRecord, Unit};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "converter")]
#[command(about = "Convert lengths between metres, millimetres, miles and feet", long_about = None)]
struct Cli {
    /// Config file (default: ./converter.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use exact SI-defined factors instead of the legacy table
    #[arg(long, global = true)]
    exact: bool,

    /// Log each conversion
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount from one unit to another
    Convert {
        /// Amount to convert (e.g., "12.5", "-3", "1e3"), or a whole
        /// expression such as "12.5 mile to ft"
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Source unit (default from config: metre)
        #[arg(value_parser = units::parse_unit)]
        from: Option<Unit>,

        /// Target unit (default from config: millimetre)
        #[arg(value_parser = units::parse_unit)]
        to: Option<Unit>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a conversion expression (e.g., "12.5 mile to ft")
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported units
    Units,

    /// Print the conversion factor table
    Table {
        /// Also check the table for inconsistent factors
        #[arg(long)]
        check: bool,

        /// Relative tolerance used by --check
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::discover(cli.config.as_deref(), Path::new("."), cli.exact)
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|config| match cli.command {
            // `convert "12.5 mile to ft"` is accepted as an expression
            Commands::Convert {
                amount,
                from: None,
                to: None,
                json,
            } if units::looks_like_conversion(&amount) => eval(&config, &amount, json),
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => convert(&config, &amount, from, to, json),
            Commands::Eval { expression, json } => eval(&config, &expression, json),
            Commands::Units => {
                list_units();
                Ok(())
            }
            Commands::Table { check, tolerance } => {
                print_table(&config.engine(), check, tolerance);
                Ok(())
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging(_verbose: bool) {}

fn convert(
    config: &Config,
    amount: &str,
    from: Option<Unit>,
    to: Option<Unit>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = config.session();
    session.set_input(amount);
    if let Some(unit) = from {
        session.set_source(unit);
    }
    if let Some(unit) = to {
        session.set_target(unit);
    }

    let record = session.submit()?;
    print_record(&record, json)
}

fn eval(config: &Config, expression: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let request = units::parse_expression(expression)?;
    let record = config.engine().run(&request)?;
    print_record(&record, json)
}

fn print_record(record: &ConversionRecord, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record.text);
    }
    Ok(())
}

fn list_units() {
    println!("Units ({}):", Unit::ALL.len());
    for unit in Unit::ALL {
        println!("  - {} ({})", unit.label(), unit.symbol());
    }
}

fn print_table(engine: &ConversionEngine, check: bool, tolerance: f64) {
    let table = engine.table();
    println!("Factor set: {}", table.set().name());

    print!("{:<12}", "from \\ to");
    for unit in Unit::ALL {
        print!("{:>14}", unit.label());
    }
    println!();

    for source in Unit::ALL {
        print!("{:<12}", source.label());
        for target in Unit::ALL {
            print!("{:>14}", units::format_number(table.factor(source, target)));
        }
        println!();
    }

    if check {
        println!("\nCheck (tolerance {:e}):", tolerance);
        print!("{}", table.validate(tolerance));
    }
}
