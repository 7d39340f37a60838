//! Random forest regression: bagged, fully grown CART trees.
//!
//! Splits minimise the summed squared error of the two children over every
//! feature. Each tree sees a bootstrap resample of the training rows and the
//! forest prediction is the mean of the tree predictions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{AresError, Result};

/// A model that can be fitted on rows of features and predict a scalar.
pub trait Regressor: Sized {
    type Config;

    fn fit(config: &Self::Config, x: &[Vec<f64>], y: &[f64]) -> Result<Self>;

    fn predict(&self, row: &[f64]) -> f64;

    fn predict_many(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

fn check_shape(x: &[Vec<f64>], y: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(AresError::EmptyTrainingSet);
    }
    if x.len() != y.len() {
        return Err(AresError::LabelMismatch {
            rows: x.len(),
            labels: y.len(),
        });
    }
    Ok(())
}

// ============================================================
// Regression tree
// ============================================================

#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    /// `None` grows until leaves are pure or too small to split.
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct SplitPoint {
    feature: usize,
    threshold: f64,
    /// Number of rows going left once sorted by `feature`.
    position: usize,
}

/// Binary regression tree stored as a node arena; node 0 is the root.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Grow a tree on the rows named by `indices` (repeats allowed).
    fn grow(config: &TreeConfig, x: &[Vec<f64>], y: &[f64], indices: &mut [usize]) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow_node(config, x, y, indices, 0);
        tree
    }

    fn grow_node(
        &mut self,
        config: &TreeConfig,
        x: &[Vec<f64>],
        y: &[f64],
        indices: &mut [usize],
        depth: usize,
    ) -> usize {
        let id = self.nodes.len();
        let n = indices.len() as f64;
        let (sum, sum_sq) = indices
            .iter()
            .fold((0.0, 0.0), |(s, sq), &i| (s + y[i], sq + y[i] * y[i]));
        let mean = sum / n;
        self.nodes.push(Node::Leaf { value: mean });

        let variance = sum_sq / n - mean * mean;
        let depth_reached = config.max_depth.is_some_and(|max| depth >= max);
        if indices.len() < config.min_samples_split || depth_reached || variance <= 1e-12 {
            return id;
        }

        let Some(split) = best_split(x, y, indices) else {
            return id;
        };

        indices.sort_unstable_by(|&a, &b| x[a][split.feature].total_cmp(&x[b][split.feature]));
        let (left_rows, right_rows) = indices.split_at_mut(split.position);
        let left = self.grow_node(config, x, y, left_rows, depth + 1);
        let right = self.grow_node(config, x, y, right_rows, depth + 1);

        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, left).max(walk(nodes, right)),
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }
}

/// Best variance-reducing split over all features, if any feature varies.
fn best_split(x: &[Vec<f64>], y: &[f64], indices: &[usize]) -> Option<SplitPoint> {
    let n = indices.len();
    let total: f64 = indices.iter().map(|&i| y[i]).sum();
    let features = x[indices[0]].len();

    let mut order = indices.to_vec();
    let mut best: Option<(f64, SplitPoint)> = None;

    for feature in 0..features {
        order.sort_unstable_by(|&a, &b| x[a][feature].total_cmp(&x[b][feature]));

        // Minimising child SSE is maximising sum_l^2/n_l + sum_r^2/n_r.
        let mut left_sum = 0.0;
        for pos in 1..n {
            left_sum += y[order[pos - 1]];
            let lo = x[order[pos - 1]][feature];
            let hi = x[order[pos]][feature];
            if lo >= hi {
                continue;
            }

            let right_sum = total - left_sum;
            let score = left_sum * left_sum / pos as f64 + right_sum * right_sum / (n - pos) as f64;
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((
                    score,
                    SplitPoint {
                        feature,
                        threshold: lo + (hi - lo) / 2.0,
                        position: pos,
                    },
                ));
            }
        }
    }

    best.map(|(_, split)| split)
}

impl Regressor for RegressionTree {
    type Config = TreeConfig;

    fn fit(config: &TreeConfig, x: &[Vec<f64>], y: &[f64]) -> Result<Self> {
        check_shape(x, y)?;
        let mut indices: Vec<usize> = (0..x.len()).collect();
        Ok(Self::grow(config, x, y, &mut indices))
    }

    fn predict(&self, row: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

// ============================================================
// Forest
// ============================================================

#[derive(Debug, Clone, Copy)]
pub struct ForestConfig {
    pub trees: usize,
    pub seed: u64,
    pub tree: TreeConfig,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 200,
            seed: 42,
            tree: TreeConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}

impl Regressor for RandomForest {
    type Config = ForestConfig;

    fn fit(config: &ForestConfig, x: &[Vec<f64>], y: &[f64]) -> Result<Self> {
        check_shape(x, y)?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let n = x.len();
        let trees = (0..config.trees.max(1))
            .map(|_| {
                let mut bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::grow(&config.tree, x, y, &mut bootstrap)
            })
            .collect::<Vec<_>>();

        tracing::debug!("Fitted random forest: {} trees on {} rows", trees.len(), n);
        Ok(Self { trees })
    }

    fn predict(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        total / self.trees.len() as f64
    }
}
