use std::ops::Range;

use chrono::NaiveDate;
use serde::Serialize;

use crate::fare::Fare;
use crate::route::Routes;
use crate::vocabulary::Vocabulary;

/// One output row, borrowing its strings from the table's [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareRecord<'a> {
    pub id: u64,
    pub airline_name: &'a str,
    pub source: &'a str,
    pub destination: &'a str,
    pub fare: Fare,
    pub updated_date: NaiveDate,
}

/// A fully generated dataset kept as parallel columns.
///
/// Categorical columns hold indices into `vocabulary`. The id column is the
/// row position itself.
#[derive(Debug, Clone)]
pub struct FareTable {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) airlines: Vec<usize>,
    pub(crate) routes: Routes,
    pub(crate) fares: Vec<Fare>,
    pub(crate) dates: Vec<NaiveDate>,
}

impl FareTable {
    pub(crate) fn new(
        vocabulary: Vocabulary,
        airlines: Vec<usize>,
        routes: Routes,
        fares: Vec<Fare>,
        dates: Vec<NaiveDate>,
    ) -> Self {
        debug_assert_eq!(airlines.len(), routes.sources.len());
        debug_assert_eq!(airlines.len(), fares.len());
        debug_assert_eq!(airlines.len(), dates.len());
        FareTable {
            vocabulary,
            airlines,
            routes,
            fares,
            dates,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> Range<u64> {
        0..self.len() as u64
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn repair_rounds(&self) -> usize {
        self.routes.repair_rounds
    }

    #[must_use]
    pub fn fares(&self) -> &[Fare] {
        &self.fares
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Rows in `id` order.
    pub fn records(&self) -> impl Iterator<Item = FareRecord<'_>> + '_ {
        let airlines = self.vocabulary.airlines();
        let airports = self.vocabulary.airports();
        self.ids()
            .zip(&self.airlines)
            .zip(self.routes.sources.iter().zip(&self.routes.destinations))
            .zip(self.fares.iter().zip(&self.dates))
            .map(
                move |(((id, &airline), (&source, &destination)), (&fare, &updated_date))| {
                    FareRecord {
                        id,
                        airline_name: &airlines[airline],
                        source: &airports[source],
                        destination: &airports[destination],
                        fare,
                        updated_date,
                    }
                },
            )
    }
}
