//! Newton's law of cooling in its linear form.

use serde::{Deserialize, Serialize};

/// Cooling rate constant `k` (1/hour).
pub const DEFAULT_COOLING_RATE: f64 = 0.1;
/// Ambient temperature (°C).
pub const DEFAULT_AMBIENT_C: f64 = 25.0;

/// `dT/dt = -k (T - T_ambient)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingModel {
    pub k: f64,
    pub ambient_c: f64,
}

impl Default for CoolingModel {
    fn default() -> Self {
        Self {
            k: DEFAULT_COOLING_RATE,
            ambient_c: DEFAULT_AMBIENT_C,
        }
    }
}

impl CoolingModel {
    pub fn new(k: f64, ambient_c: f64) -> Self {
        Self { k, ambient_c }
    }

    /// Rate of temperature change. The law is time-invariant, so `_t` is unused.
    pub fn derivative(&self, _t: f64, temperature: f64) -> f64 {
        -self.k * (temperature - self.ambient_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_vanishes_at_ambient() {
        let model = CoolingModel::default();
        assert_eq!(model.derivative(0.0, 25.0), 0.0);
    }

    #[test]
    fn derivative_sign_follows_offset() {
        let model = CoolingModel::default();
        assert!((model.derivative(3.0, 30.0) - -0.5).abs() < 1e-12);
        assert!((model.derivative(3.0, 20.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn derivative_ignores_time() {
        let model = CoolingModel::new(0.3, 10.0);
        assert_eq!(model.derivative(0.0, 50.0), model.derivative(99.0, 50.0));
    }
}
