use crate::Result;
use ohno::bail;
use serde::{Deserialize, Serialize};

/// Limits that decide when outliers are trimmed and how wide the acceptance bounds are.
///
/// One value applies to every group in a run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionConfig {
    /// Smallest standard deviation (in seconds) for which trimming and exclusion are meaningful
    #[serde(default = "default_smallest_stdev")]
    pub smallest_stdev: u32,

    /// Groups with this many songs or fewer are never trimmed
    #[serde(default = "default_minimum_population_for_outliers")]
    pub minimum_population_for_outliers: usize,

    /// Multiple of the standard deviation subtracted from the mean to form the lower bound
    #[serde(default = "default_lower_bound_multiple")]
    pub lower_bound_multiple: f64,

    /// Multiple of the standard deviation added to the mean to form the upper bound
    #[serde(default = "default_upper_bound_multiple")]
    pub upper_bound_multiple: f64,
}

const fn default_smallest_stdev() -> u32 {
    15
}

const fn default_minimum_population_for_outliers() -> usize {
    4
}

const fn default_lower_bound_multiple() -> f64 {
    1.5
}

const fn default_upper_bound_multiple() -> f64 {
    3.0
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            smallest_stdev: default_smallest_stdev(),
            minimum_population_for_outliers: default_minimum_population_for_outliers(),
            lower_bound_multiple: default_lower_bound_multiple(),
            upper_bound_multiple: default_upper_bound_multiple(),
        }
    }
}

impl ExclusionConfig {
    /// Check that both bound multiples are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a multiple is negative, infinite, or NaN
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lower_bound_multiple", self.lower_bound_multiple),
            ("upper_bound_multiple", self.upper_bound_multiple),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a finite, non-negative number, got {value}");
            }
        }

        Ok(())
    }
}
