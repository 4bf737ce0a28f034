//! Background tier placement.
//!
//! Index 0 is always primary. One tertiary slide and then one or two secondary
//! slides are drawn from a shared pool of candidate indices; every draw removes
//! the chosen index and both neighbours, so no two non-primary slides are ever
//! adjacent.

use rand::Rng;

use crate::models::slide::BackgroundTier;

/// Assigns a tier to each of `slide_count` slides.
///
/// `double_secondary_probability` is the chance of attempting two secondary
/// slides rather than one.
pub fn assign_tiers<R: Rng + ?Sized>(
    slide_count: usize,
    double_secondary_probability: f64,
    rng: &mut R,
) -> Vec<BackgroundTier> {
    let mut tiers = vec![BackgroundTier::Primary; slide_count];
    if slide_count <= 1 {
        return tiers;
    }

    let mut available: Vec<usize> = (1..slide_count).collect();

    let tertiary = take_with_neighbours(&mut available, rng);
    tiers[tertiary] = BackgroundTier::Tertiary;

    if !available.is_empty() {
        let count = if rng.random_bool(double_secondary_probability) {
            2
        } else {
            1
        };
        for _ in 0..count {
            if available.is_empty() {
                break;
            }
            let idx = take_with_neighbours(&mut available, rng);
            tiers[idx] = BackgroundTier::Secondary;
        }
    }

    tiers
}

/// Picks one index uniformly from `available` and removes it together with its
/// immediate neighbours. `available` must be non-empty.
fn take_with_neighbours<R: Rng + ?Sized>(available: &mut Vec<usize>, rng: &mut R) -> usize {
    let chosen = available[rng.random_range(0..available.len())];
    available.retain(|&i| i + 1 < chosen || i > chosen + 1);
    chosen
}
