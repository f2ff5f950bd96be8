//! Source/destination airport pairs.
//!
//! Both ends of a route are drawn independently and uniformly; any row where
//! they coincide then has its destination redrawn, round after round, until no
//! collision is left. Sources are never redrawn.
//!
//! The loop has no iteration cap: a cap could only end it with collisions
//! still present. With `n` airports each redraw clears a collision with
//! probability `(n - 1) / n`, so for `n >= 2` the expected number of rounds
//! grows with the logarithm of the row count and non-termination has
//! probability zero. For `n < 2` it would never end, which is why
//! [`draw_routes`] refuses such vocabularies.

use log::debug;
use rand::Rng;

use crate::error::FareGenError;

/// Parallel airport index columns with `sources[i] != destinations[i]` for every `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub sources: Vec<usize>,
    pub destinations: Vec<usize>,
    /// Number of redraw rounds it took to clear every collision
    pub repair_rounds: usize,
}

fn draw_indices<R: Rng + ?Sized>(rng: &mut R, airport_count: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.gen_range(0..airport_count)).collect()
}

/// Redraws `destinations[i]` wherever it equals `sources[i]` until no such
/// position is left. Returns the number of rounds taken.
///
/// Only positions that collided in the previous round are checked again:
/// nothing else is touched, so nothing else can start colliding.
///
/// `airport_count` must be at least 2 and both slices must have the same length.
pub fn repair_collisions<R: Rng + ?Sized>(
    rng: &mut R,
    sources: &[usize],
    destinations: &mut [usize],
    airport_count: usize,
) -> usize {
    debug_assert_eq!(sources.len(), destinations.len());
    debug_assert!(airport_count >= 2);

    let mut colliding: Vec<usize> = sources
        .iter()
        .zip(destinations.iter())
        .enumerate()
        .filter(|(_, (source, destination))| source == destination)
        .map(|(i, _)| i)
        .collect();

    let mut rounds = 0;
    while !colliding.is_empty() {
        rounds += 1;
        debug!("Repair round {}: {} colliding routes", rounds, colliding.len());
        for &i in &colliding {
            destinations[i] = rng.gen_range(0..airport_count);
        }
        colliding.retain(|&i| sources[i] == destinations[i]);
    }
    rounds
}

/// # Errors
/// Errors when fewer than 2 airports are available, since no route could
/// ever satisfy `source != destination`
pub fn draw_routes<R: Rng + ?Sized>(
    rng: &mut R,
    airport_count: usize,
    count: usize,
) -> Result<Routes, FareGenError> {
    if airport_count < 2 {
        return Err(FareGenError::InsufficientAirports(airport_count));
    }

    let sources = draw_indices(rng, airport_count, count);
    let mut destinations = draw_indices(rng, airport_count, count);
    let repair_rounds = repair_collisions(rng, &sources, &mut destinations, airport_count);

    Ok(Routes {
        sources,
        destinations,
        repair_rounds,
    })
}
