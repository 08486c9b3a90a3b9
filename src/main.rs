use std::{env, fs::File, path::Path};

use credit_engine::dlq::StdErrDLQ;
use credit_engine::engine::Engine;
use credit_engine::ingestion::CsvReader;
use credit_engine::statement::StdOutStatement;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();

    let file_path = args.nth(1).expect("No command line argument was provided");
    let file_path = Path::new(&file_path);
    let file = File::open(file_path)?;

    let ingestion = CsvReader::new(file)?;

    let mut engine = Engine::new(ingestion, StdOutStatement::new(), StdErrDLQ::default());

    engine.process().await?;
    engine.flush();

    Ok(())
}
