mod cli;
mod infra;
mod routes;
mod server;

use donor_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
