// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Error types for simulation construction and stepping
//!
//! Every error is terminal for the operation that produced it: a tick is
//! deterministic, so retrying with the same state yields the same failure.
//! Nothing is substituted or clamped on error; the failure is surfaced to
//! the caller and the pre-step state is left untouched.

use thiserror::Error;

/// Errors produced while constructing or stepping a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// The 3x3 coefficient matrix could not be factored.
    ///
    /// Cannot occur for physically valid parameters (positive masses and
    /// lengths, finite angles). No approximate solution is substituted.
    #[error("singular coefficient matrix: pivot magnitude {pivot:.3e} below tolerance")]
    SingularSystem {
        /// Magnitude of the pivot that fell below the tolerance.
        pivot: f64,
    },

    /// A coordinate, velocity, or acceleration would become NaN or infinite.
    ///
    /// Detected before the integration step is committed, so the stored
    /// state still holds the last finite values.
    #[error("non-finite {quantity}; refusing to commit the step")]
    NonFiniteState {
        /// Which quantity went non-finite.
        quantity: &'static str,
    },

    /// A configuration value was rejected at construction time.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Field name as it appears on [`crate::SimConfig`].
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_system_display() {
        let err = SimError::SingularSystem { pivot: 1e-15 };
        assert!(err.to_string().contains("singular"));
        assert!(err.to_string().contains("1.000e-15"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = SimError::NonFiniteState {
            quantity: "velocity",
        };
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimError::InvalidParameter {
            name: "timestep",
            value: -0.5,
        };
        assert!(err.to_string().contains("timestep"));
        assert!(err.to_string().contains("-0.5"));
    }
}
