//! Uniform random draws and the die model built on them.
//!
//! Draws come from the thread-local generator returned by [`rand::rng`],
//! which is seeded from the OS once per thread. Nothing here re-seeds per
//! call, so rapid successive requests do not see correlated values.

use rand::Rng;

use crate::error::CoreError;

/// Draw a uniformly distributed integer in `[low, high]`, both inclusive.
pub fn random_value(low: i64, high: i64) -> Result<i64, CoreError> {
    random_value_with(&mut rand::rng(), low, high)
}

/// Same as [`random_value`] but with a caller-supplied generator.
pub fn random_value_with<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
) -> Result<i64, CoreError> {
    if low > high {
        return Err(CoreError::Validation(format!(
            "Empty range: low ({low}) is greater than high ({high})"
        )));
    }
    Ok(rng.random_range(low..=high))
}

/// One roll of a die with `sides` faces numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub sides: u32,
    pub value: u32,
}

impl Dice {
    /// Roll a die. A die needs at least one side.
    pub fn roll(sides: u32) -> Result<Self, CoreError> {
        if sides == 0 {
            return Err(CoreError::Validation(
                "A die must have at least one side".to_string(),
            ));
        }
        let value = random_value(1, i64::from(sides))?;
        Ok(Self {
            sides,
            // In [1, sides], so it always fits.
            value: value as u32,
        })
    }
}
