//! The fixed categorical value lists rows are drawn from.

use std::collections::HashSet;

use crate::error::FareGenError;

pub const DEFAULT_AIRLINES: [&str; 17] = [
    "AirTravel",
    "SkyLink",
    "GlobalWings",
    "SwiftAir",
    "HorizonFly",
    "PacificJets",
    "AtlanticRoute",
    "ContinentalLine",
    "StarFlight",
    "ApexAirlines",
    "BlueSky Airways",
    "Eagle Air",
    "Freedom Fly",
    "Voyage Airlines",
    "Zenith Airways",
    "Northwind Air",
    "SouthBound Flights",
];

pub const DEFAULT_AIRPORTS: [&str; 30] = [
    "LAX", "JFK", "ORD", "DFW", "DEN", "SFO", "SEA", "CLT", "MIA", "PHX", "ATL", "BOS", "IAD",
    "EWR", "MCO", "LAS", "DTW", "PHL", "MSP", "IAH", "LHR", "CDG", "DXB", "HND", "PEK", "PVG",
    "SIN", "SYD", "FRA", "AMS",
];

/// Airline display names and airport codes.
///
/// A `Vocabulary` always holds at least one airline and at least two distinct
/// airports, so a route with `source != destination` can always be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    airlines: Vec<String>,
    airports: Vec<String>,
}

impl Vocabulary {
    /// # Errors
    /// 1. Either list is empty
    /// 2. `airports` holds fewer than 2 entries
    /// 3. An airport code is listed twice (two slots with the same code could
    ///    still yield `source == destination`)
    pub fn new(airlines: Vec<String>, airports: Vec<String>) -> Result<Self, FareGenError> {
        if airlines.is_empty() {
            return Err(FareGenError::EmptyVocabulary("airline"));
        }
        if airports.is_empty() {
            return Err(FareGenError::EmptyVocabulary("airport"));
        }
        if airports.len() < 2 {
            return Err(FareGenError::InsufficientAirports(airports.len()));
        }

        let mut seen = HashSet::with_capacity(airports.len());
        for airport in &airports {
            if !seen.insert(airport.as_str()) {
                return Err(FareGenError::DuplicateAirport(airport.clone()));
            }
        }

        Ok(Vocabulary { airlines, airports })
    }

    #[must_use]
    pub fn airlines(&self) -> &[String] {
        &self.airlines
    }

    #[must_use]
    pub fn airports(&self) -> &[String] {
        &self.airports
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            airlines: DEFAULT_AIRLINES.iter().map(|&s| s.to_owned()).collect(),
            airports: DEFAULT_AIRPORTS.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_default_vocabulary() {
        let vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.airlines().len(), 17);
        assert_eq!(vocabulary.airports().len(), 30);
        assert!(vocabulary.airlines().iter().all(|a| !a.contains(',')));

        let rebuilt = Vocabulary::new(
            vocabulary.airlines().to_vec(),
            vocabulary.airports().to_vec(),
        );
        assert_eq!(rebuilt.unwrap(), vocabulary);
    }

    #[test]
    fn test_empty_vocabulary() {
        let res = Vocabulary::new(vec![], strings(&["LAX", "JFK"]));
        assert!(matches!(res, Err(FareGenError::EmptyVocabulary("airline"))));

        let res = Vocabulary::new(strings(&["A"]), vec![]);
        assert!(matches!(res, Err(FareGenError::EmptyVocabulary("airport"))));
    }

    #[test]
    fn test_single_airport() {
        let res = Vocabulary::new(strings(&["A"]), strings(&["LAX"]));
        assert!(matches!(res, Err(FareGenError::InsufficientAirports(1))));
    }

    #[test]
    fn test_duplicate_airport() {
        let res = Vocabulary::new(strings(&["A"]), strings(&["LAX", "JFK", "LAX"]));
        assert!(matches!(res, Err(FareGenError::DuplicateAirport(code)) if code == "LAX"));
    }
}
