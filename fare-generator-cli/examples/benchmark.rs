use std::env;
use std::error::Error;
use std::time::Instant;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fare_generator::date::{DateWindow, DEFAULT_WINDOW_DAYS};
use fare_generator::generator::FareGenerator;
use fare_generator::vocabulary::Vocabulary;
use fare_generator::writer::write_csv;

const NUM_SAMPLES: usize = 1_000_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::temp_dir().join("benchmark_airline_fares.csv");
    let window = DateWindow::ending_now(DEFAULT_WINDOW_DAYS)?;
    let mut generator =
        FareGenerator::new(Vocabulary::default(), window, StdRng::seed_from_u64(42));

    let start = Instant::now();
    let table = generator.generate(NUM_SAMPLES)?;
    let elapsed = start.elapsed();
    warn!(
        "Generating {} rows took: {:.2?} ({} repair rounds)",
        table.len(),
        elapsed,
        table.repair_rounds()
    );

    let start_writing = Instant::now();
    let bytes = write_csv(&table, &path)?;
    let elapsed_writing = start_writing.elapsed();
    warn!("Writing took: {:.2?}", elapsed_writing);

    info!("Wrote {} bytes to {}", bytes, path.display());
    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
