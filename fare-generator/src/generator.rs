use std::path::PathBuf;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::date::{sample_dates, DateWindow, DEFAULT_WINDOW_DAYS};
use crate::error::FareGenError;
use crate::fare::sample_fares;
use crate::record::FareTable;
use crate::route::draw_routes;
use crate::vocabulary::Vocabulary;
use crate::writer::write_csv;

pub const DEFAULT_NUM_SAMPLES: usize = 10_000_000;
pub const DEFAULT_FILENAME: &str = "sample_airline_fares.csv";

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Everything a generation run depends on.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_samples: usize,
    pub filename: PathBuf,
    /// Fixed seed for reproducible output. Entropy is used when `None`.
    pub seed: Option<u64>,
    pub window_days: u32,
    pub vocabulary: Vocabulary,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_samples: DEFAULT_NUM_SAMPLES,
            filename: PathBuf::from(DEFAULT_FILENAME),
            seed: None,
            window_days: DEFAULT_WINDOW_DAYS,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    /// 1. The `filename` is empty
    /// 2. The `window_days` is zero
    pub fn validate(&self) -> Result<(), FareGenError> {
        if self.filename.as_os_str().is_empty() {
            return Err(FareGenError::EmptyFilename);
        }
        if self.window_days == 0 {
            return Err(FareGenError::InvalidDateWindow(self.window_days));
        }
        Ok(())
    }
}

/// Produces [`FareTable`]s from a vocabulary, a date window and a random source.
#[derive(Debug)]
pub struct FareGenerator<R> {
    vocabulary: Vocabulary,
    window: DateWindow,
    rng: R,
}

impl<R: Rng> FareGenerator<R> {
    #[must_use]
    pub fn new(vocabulary: Vocabulary, window: DateWindow, rng: R) -> Self {
        FareGenerator {
            vocabulary,
            window,
            rng,
        }
    }

    /// Generates `num_samples` rows.
    ///
    /// Columns are drawn in a fixed order (airlines, routes, fares, dates) so a
    /// seeded generator always yields the same table.
    ///
    /// # Errors
    /// Errors when the vocabulary cannot form a route, which a validated
    /// [`Vocabulary`] never does
    pub fn generate(&mut self, num_samples: usize) -> Result<FareTable, FareGenError> {
        let airline_count = self.vocabulary.airlines().len();
        let airport_count = self.vocabulary.airports().len();

        let airlines: Vec<usize> = (0..num_samples)
            .map(|_| self.rng.gen_range(0..airline_count))
            .collect();
        let routes = draw_routes(&mut self.rng, airport_count, num_samples)?;
        let fares = sample_fares(&mut self.rng, num_samples);
        let dates = sample_dates(&mut self.rng, &self.window, num_samples);

        Ok(FareTable::new(
            self.vocabulary.clone(),
            airlines,
            routes,
            fares,
            dates,
        ))
    }
}

impl FareGenerator<StdRng> {
    /// # Errors
    /// Errors when the configured date window is invalid
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, FareGenError> {
        let window = DateWindow::ending_now(config.window_days)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(FareGenerator::new(config.vocabulary.clone(), window, rng))
    }
}

/// Outcome of a successful [`generate_airline_fares_csv`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub rows: usize,
    pub path: PathBuf,
    pub bytes: u64,
    pub repair_rounds: usize,
}

impl GenerationReport {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn size_mib(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MIB
    }
}

/// Generates `config.num_samples` rows and writes them to `config.filename`.
///
/// # Errors
/// Errors when the configuration is invalid or the file cannot be written
pub fn generate_airline_fares_csv(
    config: &GeneratorConfig,
) -> Result<GenerationReport, FareGenError> {
    let mut generator = FareGenerator::from_config(config)?;
    generate_with(&mut generator, config)
}

/// Same as [`generate_airline_fares_csv`] with a caller-supplied generator,
/// ignoring `config.seed`, `config.window_days` and `config.vocabulary`.
///
/// # Errors
/// Errors when the file cannot be written
pub fn generate_with<R: Rng>(
    generator: &mut FareGenerator<R>,
    config: &GeneratorConfig,
) -> Result<GenerationReport, FareGenError> {
    config.validate()?;
    if config.num_samples == 0 {
        warn!("No samples requested, only the header will be written");
    }

    info!("Generating {} rows", config.num_samples);
    let table = generator.generate(config.num_samples)?;
    info!(
        "Generated {} rows after {} repair rounds",
        table.len(),
        table.repair_rounds()
    );

    let bytes = write_csv(&table, &config.filename)?;
    Ok(GenerationReport {
        rows: table.len(),
        path: config.filename.clone(),
        bytes,
        repair_rounds: table.repair_rounds(),
    })
}
