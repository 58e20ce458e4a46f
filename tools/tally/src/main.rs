use std::fs::File;
use std::io::stdin;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use clap::Subcommand;
use log::info;

use tally_combinatorics::Count;
use tally_io::Function;
use tally_io::Query;
use tally_io::read_queries;
use tally_utilities::TallyError;

use verbosity::VerbosityFlag;

mod verbosity;

#[derive(clap::Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Evaluates exact combinatorial counts, wrapping around at 2^64"
)]
struct Cli {
    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[command(subcommand)]
    commands: Commands,

    #[arg(long, global = true, help = "Log the time spent evaluating")]
    timings: bool,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Factorial n!")]
    Factorial { n: Count },

    #[command(about = "Number of derangements !n")]
    Subfactorial { n: Count },

    #[command(about = "Superfactorial 1! * 2! * ... * n!")]
    Superfactorial { n: Count },

    #[command(about = "Multifactorial n * (n - m) * (n - 2m) * ...")]
    Multifactorial { n: Count, m: Count },

    #[command(about = "Rising factorial n * (n + 1) * ... * (n + m - 1)")]
    Rising { n: Count, m: Count },

    #[command(about = "Permutations without repetition P(n, m)")]
    P { n: Count, m: Count },

    #[command(about = "Permutations with repetition Pr(m0, m1, ...)")]
    Pr { multiplicities: Vec<Count> },

    #[command(about = "Combinations without repetition C(n, m)")]
    C { n: Count, m: Count },

    #[command(about = "Combinations with repetition Cr(n, m)")]
    Cr { n: Count, m: Count },

    #[command(about = "Words of length m over an alphabet of n letters")]
    W { n: Count, m: Count },

    Eval(EvalArgs),
}

#[derive(clap::Args, Debug)]
#[command(about = "Evaluates the queries in the given file, one per line, or from stdin")]
struct EvalArgs {
    filename: Option<String>,
}

impl Commands {
    /// Converts a single count subcommand into the corresponding query.
    fn into_query(self) -> Result<Query, TallyError> {
        let (function, arguments) = match self {
            Commands::Factorial { n } => (Function::Factorial, vec![n]),
            Commands::Subfactorial { n } => (Function::Subfactorial, vec![n]),
            Commands::Superfactorial { n } => (Function::Superfactorial, vec![n]),
            Commands::Multifactorial { n, m } => (Function::Multifactorial, vec![n, m]),
            Commands::Rising { n, m } => (Function::RisingFactorial, vec![n, m]),
            Commands::P { n, m } => (Function::P, vec![n, m]),
            Commands::Pr { multiplicities } => (Function::Pr, multiplicities),
            Commands::C { n, m } => (Function::C, vec![n, m]),
            Commands::Cr { n, m } => (Function::Cr, vec![n, m]),
            Commands::W { n, m } => (Function::W, vec![n, m]),
            Commands::Eval(_) => return Err("The eval command is not a single query.".into()),
        };

        Ok(Query::new(function, arguments)?)
    }
}

fn main() -> Result<ExitCode, TallyError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    let start = Instant::now();

    match cli.commands {
        Commands::Eval(args) => {
            let queries = if let Some(filename) = args.filename {
                info!("Reading queries from {filename}");
                read_queries(File::open(filename)?)?
            } else {
                read_queries(stdin().lock())?
            };

            for query in &queries {
                println!("{query} = {}", query.evaluate());
            }
        }
        command => {
            println!("{}", command.into_query()?.evaluate());
        }
    }

    if cli.timings {
        info!("Time evaluate: {:.3}s", start.elapsed().as_secs_f64());
    }

    Ok(ExitCode::SUCCESS)
}
