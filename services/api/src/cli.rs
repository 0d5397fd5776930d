use crate::practice::{list_questions, run_interview, run_score, QuestionsArgs, RunArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use trade_interview::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Trade Interview Coach",
    about = "Practice plumber and electrician interviews with adaptive difficulty and scoring",
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
    /// Run, score, or browse interviews from the terminal
    Interview {
        #[command(subcommand)]
        command: InterviewCommand,
    },
}

#[derive(Subcommand, Debug)]
enum InterviewCommand {
    /// Run a five-question practice interview and save the report
    Run(RunArgs),
    /// Score a single answer and show how the score was reached
    Score(ScoreArgs),
    /// List the question bank for a trade
    Questions(QuestionsArgs),
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
        Command::Interview { command } => match command {
            InterviewCommand::Run(args) => {
                tokio::task::spawn_blocking(move || run_interview(args))
                    .await
                    .map_err(|err| AppError::Io(std::io::Error::other(err)))?
            }
            InterviewCommand::Score(args) => run_score(args),
            InterviewCommand::Questions(args) => list_questions(args),
        },
    }
}
