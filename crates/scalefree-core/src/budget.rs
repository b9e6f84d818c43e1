//! Retry budgets bounding the rejection-sampling loops.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::GenError;

/// Retry policy applied to every rejection-sampling loop.
///
/// A loop may draw at most `max(min_attempts, attempts_per_element * scale)`
/// candidates, where `scale` is chosen by the loop (usually `|V| + |E|`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingBudget {
    /// Lower bound on the number of draws regardless of graph size.
    #[serde(default = "default_min_attempts")]
    pub min_attempts: usize,
    /// Draws allowed per element of the loop's scale.
    #[serde(default = "default_attempts_per_element")]
    pub attempts_per_element: usize,
}

fn default_min_attempts() -> usize {
    10_000
}

fn default_attempts_per_element() -> usize {
    64
}

impl Default for SamplingBudget {
    fn default() -> Self {
        Self {
            min_attempts: default_min_attempts(),
            attempts_per_element: default_attempts_per_element(),
        }
    }
}

impl SamplingBudget {
    /// Returns the attempt limit for a loop of the given scale.
    pub fn limit(&self, scale: usize) -> usize {
        self.min_attempts
            .max(self.attempts_per_element.saturating_mul(scale))
    }

    /// Starts counting attempts for the named loop.
    pub fn counter(&self, label: &'static str, scale: usize) -> AttemptCounter {
        AttemptCounter {
            label,
            used: 0,
            limit: self.limit(scale),
        }
    }

    /// Rejects budgets that would fail every loop immediately.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.min_attempts == 0 {
            return Err(
                GenError::invalid_configuration("sampling budget must allow at least one draw")
                    .with_context("min_attempts", self.min_attempts),
            );
        }
        Ok(())
    }
}

/// Attempt tracker for one execution of a rejection-sampling loop.
#[derive(Debug, Clone)]
pub struct AttemptCounter {
    label: &'static str,
    used: usize,
    limit: usize,
}

impl AttemptCounter {
    /// Records one draw, failing once the budget is spent.
    pub fn tick(&mut self) -> Result<(), GenError> {
        if self.used >= self.limit {
            warn!(loop_label = self.label, attempts = self.used, "retry budget exhausted");
            return Err(GenError::degenerate(
                "rejection sampling exhausted its retry budget",
            )
            .with_context("loop", self.label)
            .with_context("attempts", self.used)
            .with_hint("check for zero-weight candidates or raise the sampling budget"));
        }
        self.used += 1;
        Ok(())
    }

    /// Returns the number of draws recorded so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Returns the label of the loop being counted.
    pub fn label(&self) -> &'static str {
        self.label
    }
}
