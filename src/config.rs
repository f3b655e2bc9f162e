// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The four knobs of the engine, bundled so a driver can build them
//! up, check them, and hand them over in one go.

use crate::error::ChaosError;

/// Generation parameters.  The engine takes whatever it is given;
/// `validate` is for drivers that want to turn nonsense away before
/// it gets that far.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineSettings {
    /// Fraction of the way toward the chosen anchor moved each step.
    pub interpolation_ratio: f64,
    /// Scales the perpendicular offset added to each step.  Zero
    /// gives the classic chaos game.
    pub lateral_step: f64,
    /// Steps drawn per timer firing.
    pub iterations_per_tick: usize,
    /// Milliseconds between timer firings.
    pub tick_interval: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            interpolation_ratio: 0.9,
            lateral_step: 0.0,
            iterations_per_tick: 100,
            tick_interval: 10,
        }
    }
}

impl EngineSettings {
    /// Reject values no driver should be sending: non-finite ratios
    /// and an empty batch.
    pub fn validate(&self) -> Result<(), ChaosError> {
        finite("interpolation ratio", self.interpolation_ratio)?;
        finite("lateral step", self.lateral_step)?;
        nonzero("iterations per tick", self.iterations_per_tick)?;
        Ok(())
    }
}

/// Passes `value` through if it is a real number.
pub fn finite(name: &str, value: f64) -> Result<f64, ChaosError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChaosError::invalid(name, "must be a finite number"))
    }
}

/// Passes `value` through if it is not zero.
pub fn nonzero(name: &str, value: usize) -> Result<usize, ChaosError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ChaosError::invalid(name, "must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.interpolation_ratio, 0.9);
        assert_eq!(settings.lateral_step, 0.0);
        assert_eq!(settings.iterations_per_tick, 100);
        assert_eq!(settings.tick_interval, 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_ratios_and_empty_batches() {
        let mut settings = EngineSettings::default();
        settings.interpolation_ratio = std::f64::NAN;
        assert!(settings.validate().is_err());

        let mut settings = EngineSettings::default();
        settings.lateral_step = std::f64::INFINITY;
        assert!(settings.validate().is_err());

        let mut settings = EngineSettings::default();
        settings.iterations_per_tick = 0;
        match settings.validate() {
            Err(ChaosError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "iterations per tick")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn out_of_range_but_finite_ratios_are_allowed() {
        let mut settings = EngineSettings::default();
        settings.interpolation_ratio = 1.7;
        settings.lateral_step = -3.0;
        assert!(settings.validate().is_ok());
    }
}
