use anyhow::Result;
use palante_training::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
