mod cli;
mod infra;
mod routes;
mod server;
mod show;

use checkmate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
