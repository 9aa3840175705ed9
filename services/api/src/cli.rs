use crate::server;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use donor_intake::error::AppError;
use donor_intake::workflows::registration::{eligibility, EligibilityConfig};

#[derive(Parser, Debug)]
#[command(
    name = "Donor Intake Service",
    about = "Run the donor registration intake service or query the eligibility rule",
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
    /// Evaluate donor eligibility from the command line
    Eligibility(EligibilityArgs),
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

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Donor date of birth (YYYY-MM-DD)
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,
    /// Donor weight in kilograms
    #[arg(long)]
    weight: Option<f32>,
    /// Reference date, defaulting to the local date
    #[arg(long)]
    today: Option<NaiveDate>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
    }
}

fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let outcome = eligibility::assess(
        args.date_of_birth,
        args.weight,
        today,
        &EligibilityConfig::default(),
    );

    let rendered = serde_json::to_string_pretty(&outcome)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}
