use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navigator_cli::commands::compare::handle_compare_command;
use navigator_cli::commands::locations::handle_locations_command;
use navigator_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use navigator_cli::commands::shell::handle_shell_command;
use navigator_cli::commands::DataArgs;
use navigator_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-path navigation over weighted location graphs")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known location.
    Locations,
    /// Compute a route between two location names.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Run BFS and Dijkstra between two locations and compare the routes.
    Compare {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// Start the interactive navigator shell.
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Locations => handle_locations_command(&cli.data, cli.format, &mut stdout),
        Command::Route {
            from,
            to,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm: algorithm.into(),
            };
            handle_route_command(&cli.data, cli.format, &args, &mut stdout)
        }
        Command::Compare { from, to } => {
            handle_compare_command(&cli.data, cli.format, &from, &to, &mut stdout)
        }
        Command::Shell => {
            drop(stdout);
            handle_shell_command(&cli.data)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
