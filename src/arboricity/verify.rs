use serde::Serialize;

use crate::graph::NumNodes;

/// Outcome of checking `dk <= alpha <= 2·dk` for one pair of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundCheck {
    pub dk: NumNodes,
    pub alpha: NumNodes,
    pub lower_ok: bool,
    pub upper_ok: bool,
    /// `alpha / dk`; infinite if only `dk` is zero and 1.0 if both are
    pub ratio: f64,
}

impl BoundCheck {
    pub fn holds(&self) -> bool {
        self.lower_ok && self.upper_ok
    }

    pub fn is_perfect(&self) -> bool {
        self.ratio == 1.0
    }

    pub fn is_worst_case(&self) -> bool {
        self.ratio == 2.0
    }
}

/// Checks the sandwich `dk <= alpha <= 2·dk`
pub fn verify(dk: NumNodes, alpha: NumNodes) -> BoundCheck {
    let ratio = match (dk, alpha) {
        (0, 0) => 1.0,
        (0, _) => f64::INFINITY,
        _ => alpha as f64 / dk as f64,
    };

    BoundCheck {
        dk,
        alpha,
        lower_ok: dk <= alpha,
        upper_ok: alpha as u64 <= 2 * dk as u64,
        ratio,
    }
}

/// Aggregate of many [`BoundCheck`]s. Min, max and mean only consider finite ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatioStatistics {
    pub checks: usize,
    pub lower_violations: usize,
    pub upper_violations: usize,
    pub infinite_ratios: usize,
    pub perfect: usize,
    pub worst_case: usize,
    pub min_ratio: Option<f64>,
    pub max_ratio: Option<f64>,
    pub mean_ratio: Option<f64>,
}

impl RatioStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, check: &BoundCheck) {
        self.checks += 1;
        self.lower_violations += !check.lower_ok as usize;
        self.upper_violations += !check.upper_ok as usize;
        self.perfect += check.is_perfect() as usize;
        self.worst_case += check.is_worst_case() as usize;

        if !check.ratio.is_finite() {
            self.infinite_ratios += 1;
            return;
        }

        let ratio = check.ratio;
        let finite = (self.checks - self.infinite_ratios) as f64;
        self.min_ratio = Some(self.min_ratio.map_or(ratio, |r| r.min(ratio)));
        self.max_ratio = Some(self.max_ratio.map_or(ratio, |r| r.max(ratio)));
        self.mean_ratio = Some(match self.mean_ratio {
            Some(mean) => mean + (ratio - mean) / finite,
            None => ratio,
        });
    }

    /// Merges the statistics of disjoint sets of checks
    pub fn merge(&mut self, other: &RatioStatistics) {
        let own_finite = (self.checks - self.infinite_ratios) as f64;
        let other_finite = (other.checks - other.infinite_ratios) as f64;

        self.mean_ratio = match (self.mean_ratio, other.mean_ratio) {
            (Some(a), Some(b)) => Some((a * own_finite + b * other_finite) / (own_finite + other_finite)),
            (a, b) => a.or(b),
        };
        self.min_ratio = match (self.min_ratio, other.min_ratio) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_ratio = match (self.max_ratio, other.max_ratio) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };

        self.checks += other.checks;
        self.lower_violations += other.lower_violations;
        self.upper_violations += other.upper_violations;
        self.infinite_ratios += other.infinite_ratios;
        self.perfect += other.perfect;
        self.worst_case += other.worst_case;
    }

    pub fn violations(&self) -> usize {
        self.lower_violations + self.upper_violations
    }
}

impl<'a> Extend<&'a BoundCheck> for RatioStatistics {
    fn extend<T: IntoIterator<Item = &'a BoundCheck>>(&mut self, iter: T) {
        for check in iter {
            self.add(check);
        }
    }
}

impl Extend<BoundCheck> for RatioStatistics {
    fn extend<T: IntoIterator<Item = BoundCheck>>(&mut self, iter: T) {
        for check in iter {
            self.add(&check);
        }
    }
}

impl FromIterator<BoundCheck> for RatioStatistics {
    fn from_iter<T: IntoIterator<Item = BoundCheck>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
