use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FareGenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("The {0} vocabulary is empty")]
    EmptyVocabulary(&'static str),
    #[error("At least 2 airports are required to build a route, got {0}")]
    InsufficientAirports(usize),
    #[error("Airport {0} appears more than once in the vocabulary")]
    DuplicateAirport(String),
    #[error("Fares must lie between 50.00 and 1000.00")]
    FareOutOfRange,
    #[error("The output filename is empty")]
    EmptyFilename,
    #[error("A date window of {0} days is empty or out of range")]
    InvalidDateWindow(u32),
}
