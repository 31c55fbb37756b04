use anyhow::{anyhow, Result};
use mokp_utils::{Frontier, ParetoCompare, Point, PointOps};
use ndarray::Array2;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_items: usize,
    pub num_objectives: usize,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_items: arr[0] as usize,
            num_objectives: arr[1] as usize,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_items as i32, self.num_objectives as i32]
    }
}

impl TryFrom<Map<String, Value>> for Difficulty {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub weights: Vec<u32>,
    pub values: Vec<Point>,
    pub max_weight: u32,
}

impl TryFrom<Map<String, Value>> for Challenge {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.num_objectives == 0 {
            return Err(anyhow!("Number of objectives must be at least 1"));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        // Generate weights w_i in the range [1, 50]
        let weights: Vec<u32> = (0..difficulty.num_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();

        // Generate values v_ik in the range [1, 100] for every objective k
        let value_matrix = Array2::from_shape_fn(
            (difficulty.num_items, difficulty.num_objectives),
            |_| rng.gen_range(1..=100i64),
        );
        let values: Vec<Point> = value_matrix
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect();

        let max_weight: u32 = weights.iter().sum::<u32>() / 2;

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            weights,
            values,
            max_weight,
        })
    }

    /// Fail-fast precondition checks. Solvers call this before touching the
    /// instance so malformed input is reported instead of producing garbage.
    pub fn validate(&self) -> Result<()> {
        if self.difficulty.num_objectives == 0 {
            return Err(anyhow!("Number of objectives must be at least 1"));
        }
        if self.weights.len() != self.difficulty.num_items {
            return Err(anyhow!(
                "Expected {} weights, got {}",
                self.difficulty.num_items,
                self.weights.len()
            ));
        }
        if self.values.len() != self.difficulty.num_items {
            return Err(anyhow!(
                "Expected {} value vectors, got {}",
                self.difficulty.num_items,
                self.values.len()
            ));
        }
        if let Some(item) = self.weights.iter().position(|&w| w == 0) {
            return Err(anyhow!("Item ({}) has zero weight", item));
        }
        if let Some(item) = self
            .values
            .iter()
            .position(|v| v.len() != self.difficulty.num_objectives)
        {
            return Err(anyhow!(
                "Item ({}) has {} objective values, expected {}",
                item,
                self.values[item].len(),
                self.difficulty.num_objectives
            ));
        }
        Ok(())
    }

    /// Checks that a frontier is structurally valid for this instance:
    /// the right dimension, no duplicate points, and no point dominating
    /// another.
    pub fn verify_frontier(&self, frontier: &Frontier) -> Result<()> {
        if frontier.dim() != self.difficulty.num_objectives {
            return Err(anyhow!(
                "Frontier dimension ({}) does not match number of objectives ({})",
                frontier.dim(),
                self.difficulty.num_objectives
            ));
        }
        for (i, p) in frontier.iter().enumerate() {
            for (j, q) in frontier.iter().enumerate().skip(i + 1) {
                match p.pareto_compare(q) {
                    ParetoCompare::Equal => {
                        return Err(anyhow!("Points ({}) and ({}) are equal", i, j));
                    }
                    ParetoCompare::ADominatesB => {
                        return Err(anyhow!("Point ({}) dominates point ({})", i, j));
                    }
                    ParetoCompare::BDominatesA => {
                        return Err(anyhow!("Point ({}) dominates point ({})", j, i));
                    }
                    ParetoCompare::Incomparable => {}
                }
            }
        }
        Ok(())
    }
}
