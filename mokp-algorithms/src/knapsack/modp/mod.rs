//! Exact multi-objective dynamic program for the 0/1 knapsack problem.
//!
//! Computes the complete Pareto frontier of total-value vectors achievable
//! within the weight capacity. State `DP[i][j]` is the non-dominated set of
//! outcomes over subsets of the first `i` items with total weight at most
//! `j`; only two adjacent generations are kept in memory.

use anyhow::{anyhow, Result};
use mokp_challenges::knapsack::Challenge;
use mokp_utils::{zero_point, Frontier, DEFAULT_FRONTIER_CAPACITY};

pub fn solve_challenge(challenge: &Challenge) -> Result<Frontier> {
    challenge.validate()?;

    let num_items = challenge.difficulty.num_items;
    let dim = challenge.difficulty.num_objectives;
    let capacity = challenge.max_weight as usize;

    // Base case: with no items chosen the only outcome is the zero vector,
    // whatever the residual capacity.
    let mut prev = base_generation(capacity, dim)?;
    let mut curr = base_generation(capacity, dim)?;

    for i in 1..=num_items {
        let weight = challenge.weights[i - 1] as usize;
        let value = &challenge.values[i - 1];

        for j in 1..=capacity {
            curr[j] = if j < weight {
                // Item i cannot fit; the previous state carries forward.
                prev[j].clone()
            } else {
                // Pareto-merged choice of taking item i or skipping it.
                prev[j - weight].translate(value)?.merge(&prev[j])?
            };
        }

        // Generation rotation: `curr` becomes the read-only previous state
        // for the next item. Weights are at least 1, so slot 0 stays at the
        // base case in both buffers and is never recomputed.
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev.swap_remove(capacity))
}

fn base_generation(capacity: usize, dim: usize) -> Result<Vec<Frontier>> {
    let mut generation = Vec::new();
    generation
        .try_reserve_exact(capacity + 1)
        .map_err(|e| anyhow!("Failed to reserve DP generation: {}", e))?;
    for _ in 0..=capacity {
        let mut frontier = Frontier::with_capacity(DEFAULT_FRONTIER_CAPACITY, dim)?;
        frontier.push(zero_point(dim))?;
        generation.push(frontier);
    }
    Ok(generation)
}
