use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub type Point = Vec<i64>;

/// Storage reserved for a frontier when the caller has no better estimate.
pub const DEFAULT_FRONTIER_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum ParetoCompare {
    ADominatesB,
    BDominatesA,
    Equal,
    Incomparable,
}

pub trait PointOps {
    type Point;

    fn pareto_compare(&self, other: &Self) -> ParetoCompare;
    fn dominates(&self, other: &Self) -> bool;
    fn translate(&self, delta: &Self) -> Self::Point;
    fn lorenz_vector(&self) -> Self::Point;
    fn lorenz_dominates(&self, other: &Self) -> bool;
}

/// Explicitly zero-filled point. The DP base case depends on this being all
/// zeroes, so it is never left to allocation behavior.
pub fn zero_point(dim: usize) -> Point {
    vec![0; dim]
}

impl PointOps for Point {
    type Point = Point;

    fn pareto_compare(&self, other: &Self) -> ParetoCompare {
        let mut a_better = false;
        let mut b_better = false;
        for (a_val, b_val) in self.iter().zip(other) {
            if a_val < b_val {
                b_better = true;
            } else if a_val > b_val {
                a_better = true;
            }
        }
        match (a_better, b_better) {
            (false, false) => ParetoCompare::Equal,
            (true, false) => ParetoCompare::ADominatesB,
            (false, true) => ParetoCompare::BDominatesA,
            (true, true) => ParetoCompare::Incomparable,
        }
    }

    /// Maximize-all convention: `self` dominates `other` iff the points
    /// differ and `self` is at least as large in every objective.
    fn dominates(&self, other: &Self) -> bool {
        self.pareto_compare(other) == ParetoCompare::ADominatesB
    }

    fn translate(&self, delta: &Self) -> Self::Point {
        self.iter().zip(delta).map(|(a, b)| a + b).collect()
    }

    /// Cumulative sums of the objectives in ascending order. Two points with
    /// the same multiset of objective values share a Lorenz vector.
    fn lorenz_vector(&self) -> Self::Point {
        let mut sorted = self.clone();
        sorted.sort_unstable();
        let mut total = 0;
        sorted
            .iter()
            .map(|v| {
                total += v;
                total
            })
            .collect()
    }

    /// Equitable (Lorenz) dominance: Pareto dominance of Lorenz vectors.
    fn lorenz_dominates(&self, other: &Self) -> bool {
        self.lorenz_vector().dominates(&other.lorenz_vector())
    }
}

/// A non-dominated archive of points. Every point is owned by the frontier;
/// growth is amortized doubling and a failed reservation surfaces as an error
/// instead of aborting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    dim: usize,
    points: Vec<Point>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize, dim: usize) -> Result<Self> {
        let mut points = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|e| anyhow!("Failed to reserve frontier storage: {}", e))?;
        Ok(Self { dim, points })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|p| p == point)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Appends a point, doubling the backing storage when full. Does not
    /// filter for dominance; callers are expected to pre-filter (see
    /// `merge` and `pareto_filter`).
    pub fn push(&mut self, point: Point) -> Result<()> {
        debug_assert_eq!(point.len(), self.dim);
        if self.points.len() == self.points.capacity() {
            let additional = self.points.capacity().max(1);
            self.points
                .try_reserve_exact(additional)
                .map_err(|e| anyhow!("Failed to grow frontier storage: {}", e))?;
        }
        self.points.push(point);
        Ok(())
    }

    /// Fresh frontier with every point shifted elementwise by `delta`.
    pub fn translate(&self, delta: &Point) -> Result<Frontier> {
        let mut shifted = Frontier::with_capacity(self.points.capacity().max(1), self.dim)?;
        for point in &self.points {
            shifted.push(point.translate(delta))?;
        }
        Ok(shifted)
    }

    /// Non-dominated union of two frontiers, O(|A|*|B|). A point of `self`
    /// survives unless dominated by a point of `other`; a point of `other`
    /// survives unless a point of `self` equals or dominates it, so an equal
    /// pair is represented once, by the `self` side. Both inputs must already
    /// be non-dominated sets.
    pub fn merge(&self, other: &Frontier) -> Result<Frontier> {
        let mut merged = Frontier::with_capacity(DEFAULT_FRONTIER_CAPACITY, self.dim)?;
        for a in &self.points {
            if !other.points.iter().any(|b| b.dominates(a)) {
                merged.push(a.clone())?;
            }
        }
        for b in &other.points {
            if !self.points.iter().any(|a| a == b || a.dominates(b)) {
                merged.push(b.clone())?;
            }
        }
        Ok(merged)
    }

    /// Restricts the frontier to its Lorenz non-dominated subset: the points
    /// whose Lorenz vector is not Pareto-dominated by the Lorenz vector of
    /// another member. Points with equal Lorenz vectors are all kept.
    pub fn lorenz_filter(&self) -> Result<Frontier> {
        let lorenz: Vec<Point> = self.points.iter().map(|p| p.lorenz_vector()).collect();
        let mut filtered = Frontier::with_capacity(DEFAULT_FRONTIER_CAPACITY, self.dim)?;
        for (i, point) in self.points.iter().enumerate() {
            let dominated = lorenz
                .iter()
                .enumerate()
                .any(|(j, l)| j != i && l.dominates(&lorenz[i]));
            if !dominated {
                filtered.push(point.clone())?;
            }
        }
        Ok(filtered)
    }

    /// Reduces an arbitrary set of points to its non-dominated subset.
    /// Duplicate points are kept once (first occurrence).
    pub fn pareto_filter(points: &[Point], dim: usize) -> Result<Frontier> {
        let mut frontier = Frontier::with_capacity(DEFAULT_FRONTIER_CAPACITY, dim)?;
        'candidates: for (i, point) in points.iter().enumerate() {
            for (j, other) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                match point.pareto_compare(other) {
                    ParetoCompare::BDominatesA => continue 'candidates,
                    ParetoCompare::Equal if j < i => continue 'candidates,
                    _ => {}
                }
            }
            frontier.push(point.clone())?;
        }
        Ok(frontier)
    }
}

impl IntoIterator for Frontier {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
