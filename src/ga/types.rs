//! Population members.

/// A candidate parameter vector and its fitness.
///
/// Lower fitness is better (minimization). Freshly bred individuals carry
/// `f64::INFINITY` until evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The parameter vector.
    pub genes: Vec<f64>,

    /// Objective value of `genes`.
    pub fitness: f64,
}

impl Individual {
    /// An unevaluated individual.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }
}
