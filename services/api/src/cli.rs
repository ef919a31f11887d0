use clap::{Args, Parser, Subcommand};
use fleet_ai::error::AppError;

use crate::demo::{run_compliance_report, run_demo, ComplianceReportArgs, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Fleet AI Dispatch",
    about = "Demonstrate and run the fleet compliance and AI dispatch service from the command line",
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
    /// Evaluate fleet compliance from the command line
    Compliance {
        #[command(subcommand)]
        command: ComplianceCommand,
    },
    /// Run an end-to-end CLI demo over the sample fleet
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ComplianceCommand {
    /// Print the compliance report for the sample fleet
    Report(ComplianceReportArgs),
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
        Command::Compliance {
            command: ComplianceCommand::Report(args),
        } => run_compliance_report(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
