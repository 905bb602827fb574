use anyhow::Result;
use maryema::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    let (globals, action) = cli::start()?;

    action.execute(&globals).await?;

    Ok(())
}
