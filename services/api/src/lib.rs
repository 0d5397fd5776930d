mod cli;
mod console;
mod infra;
mod practice;
mod routes;
mod server;

use trade_interview::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
