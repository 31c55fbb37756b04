//! Brute-force reference solver: enumerates every subset of items and keeps
//! the non-dominated affordable outcomes. Exponential in the number of items,
//! intended as a cross-check oracle for small instances.

use anyhow::{anyhow, Result};
use mokp_challenges::knapsack::Challenge;
use mokp_utils::{zero_point, Frontier, Point, PointOps};

const MAX_ITEMS: usize = 24;

pub fn solve_challenge(challenge: &Challenge) -> Result<Frontier> {
    challenge.validate()?;

    let num_items = challenge.difficulty.num_items;
    if num_items > MAX_ITEMS {
        return Err(anyhow!(
            "num_items ({}) exceeds MAX_ITEMS ({})",
            num_items,
            MAX_ITEMS
        ));
    }
    let dim = challenge.difficulty.num_objectives;

    let mut outcomes: Vec<Point> = Vec::new();
    for mask in 0u32..(1u32 << num_items) {
        let mut total_weight = 0u64;
        let mut total_value = zero_point(dim);
        for item in 0..num_items {
            if mask & (1 << item) != 0 {
                total_weight += challenge.weights[item] as u64;
                total_value = total_value.translate(&challenge.values[item]);
            }
        }
        if total_weight <= challenge.max_weight as u64 {
            outcomes.push(total_value);
        }
    }

    Frontier::pareto_filter(&outcomes, dim)
}
