//! Enemy movement strategies.
//!
//! A path maps the time an enemy has been alive to an offset from its spawn
//! point plus an angle increment. `Enemy` only ever calls `evaluate`, so new
//! paths plug in without touching the entity.

use std::fmt;

/// One evaluation of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    pub dx: f64,
    pub dy: f64,
    /// Added to the enemy's angle after every evaluation.
    pub angle_delta: f64,
}

pub trait EnemyPath: fmt::Debug + Send + Sync {
    fn evaluate(&self, elapsed_ms: f64) -> PathStep;
}

/// Straight down at a constant speed while spinning.
///
/// The spin is applied per evaluation (i.e. per frame), not per millisecond,
/// so the visual rotation speed follows the achieved frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDescent {
    pub speed_per_ms: f64,
    pub spin_degrees: f64,
}

impl Default for LinearDescent {
    fn default() -> Self {
        LinearDescent {
            speed_per_ms: 0.1,
            spin_degrees: 7.0,
        }
    }
}

impl EnemyPath for LinearDescent {
    fn evaluate(&self, elapsed_ms: f64) -> PathStep {
        PathStep {
            dx: 0.0,
            dy: self.speed_per_ms * elapsed_ms,
            angle_delta: self.spin_degrees,
        }
    }
}
