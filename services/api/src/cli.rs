use crate::commands::{run_cohort_report, run_recommend, CohortReportArgs, RecommendArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "KCSE Career Compass",
    about = "Run the career guidance service or compute recommendations from the command line",
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
    /// Compute the mean grade and recommendations for one student
    Recommend(RecommendArgs),
    /// Work with batch results imports
    Cohort {
        #[command(subcommand)]
        command: CohortCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CohortCommand {
    /// Import a class results CSV and print the cohort report
    Report(CohortReportArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Cohort {
            command: CohortCommand::Report(args),
        } => run_cohort_report(args),
    }
}
