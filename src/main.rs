use tornread::{run_matrix, Error, Params};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Running benchmark...");

    let params: Params = Params::default();
    let results = run_matrix(&params)?;
    for (experiment, result) in &results {
        println!(
            "{}: {} ms, {} torn reads",
            experiment,
            result.elapsed_millis(),
            result.torn_reads
        );
    }
    Ok(())
}
