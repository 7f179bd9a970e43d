// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elevation comparison and level clustering
//!
//! Kernel output carries rounding noise, so two vertices on the same
//! geometric plane can differ in the last bits of z. Every elevation test
//! in the idealizers goes through [`ElevationTolerance`].

/// Absolute tolerance for treating two z values as the same level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationTolerance(f64);

impl ElevationTolerance {
    /// Exact floating-point equality
    pub const EXACT: Self = Self(0.0);

    /// Default tolerance (1e-6 model units)
    pub const DEFAULT: Self = Self(1e-6);

    /// Create a tolerance; negative and non-finite values fall back to exact
    pub fn new(tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance > 0.0 {
            Self(tolerance)
        } else {
            Self::EXACT
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn same_level(&self, a: f64, b: f64) -> bool {
        if self.0 == 0.0 {
            a == b
        } else {
            (a - b).abs() <= self.0
        }
    }
}

impl Default for ElevationTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sorted, clustered elevation levels
///
/// Each level covers `[min, max]`; a new level starts when a value is more
/// than the tolerance above the first value of the current level.
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    bounds: Vec<(f64, f64)>,
}

impl Levels {
    pub fn cluster<I>(elevations: I, tolerance: ElevationTolerance) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values: Vec<f64> = elevations.into_iter().filter(|z| !z.is_nan()).collect();
        values.sort_by(f64::total_cmp);

        let mut bounds: Vec<(f64, f64)> = Vec::new();
        for z in values {
            if let Some((first, last)) = bounds.last_mut() {
                if tolerance.same_level(*first, z) {
                    *last = z;
                    continue;
                }
            }
            bounds.push((z, z));
        }

        Self { bounds }
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Index of the level containing `z`
    pub fn level_of(&self, z: f64) -> Option<usize> {
        self.bounds
            .iter()
            .position(|&(first, last)| z >= first && z <= last)
    }

    pub fn is_top(&self, z: f64) -> bool {
        !self.bounds.is_empty() && self.level_of(z) == Some(self.bounds.len() - 1)
    }

    pub fn is_bottom(&self, z: f64) -> bool {
        self.level_of(z) == Some(0)
    }
}
