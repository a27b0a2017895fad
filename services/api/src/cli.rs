use crate::assess::{run_assessment, run_catalog, AssessArgs, CatalogArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use detailing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Detailing Self-Assessment",
    about = "Serve the car-detailing assessment and booking API or run an assessment locally",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score questionnaire answers and print the recommended service
    Assess(AssessArgs),
    /// Print the questionnaire and price table
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
