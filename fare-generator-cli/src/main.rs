use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use fare_generator::date::DEFAULT_WINDOW_DAYS;
use fare_generator::generator::{
    generate_airline_fares_csv, GeneratorConfig, DEFAULT_FILENAME, DEFAULT_NUM_SAMPLES,
};
use fare_generator::vocabulary::{Vocabulary, DEFAULT_AIRLINES, DEFAULT_AIRPORTS};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of fare records to generate
    #[clap(short, long, default_value_t = DEFAULT_NUM_SAMPLES)]
    pub(crate) num_samples: usize,
    /// The output CSV file, overwritten if it exists
    #[clap(short, long, default_value = DEFAULT_FILENAME)]
    pub(crate) output: PathBuf,
    /// Seed for reproducible output
    #[clap(short, long)]
    pub(crate) seed: Option<u64>,
    /// Number of days before now that `updated_date` values are drawn from
    #[clap(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub(crate) window_days: u32,
    /// Comma-separated airline names replacing the built-in list
    #[clap(long, value_delimiter = ',')]
    pub(crate) airlines: Vec<String>,
    /// Comma-separated airport codes replacing the built-in list
    #[clap(long, value_delimiter = ',')]
    pub(crate) airports: Vec<String>,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let airlines = if self.airlines.is_empty() {
            DEFAULT_AIRLINES.iter().map(|&s| s.to_owned()).collect()
        } else {
            self.airlines
        };
        let airports = if self.airports.is_empty() {
            DEFAULT_AIRPORTS.iter().map(|&s| s.to_owned()).collect()
        } else {
            self.airports
        };

        let config = GeneratorConfig {
            num_samples: self.num_samples,
            filename: self.output,
            seed: self.seed,
            window_days: self.window_days,
            vocabulary: Vocabulary::new(airlines, airports)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `10000000` -> `10,000,000`
fn with_separators(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Cli::parse().into_config()?;

    println!(
        "Generating {} sample airline fares...",
        with_separators(config.num_samples)
    );
    match generate_airline_fares_csv(&config) {
        Ok(report) => {
            println!(
                "Successfully generated '{}' with {} entries.",
                report.path.display(),
                with_separators(report.rows)
            );
            println!("File size: {:.2} MB", report.size_mib());
            Ok(())
        }
        Err(e) => {
            eprintln!("An error occurred while saving the CSV: {}", e);
            process::exit(1);
        }
    }
}
