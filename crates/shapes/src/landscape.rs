#[cfg(feature = "serde-derive")]
use serde::Serialize;

use crate::InputError;

/// Surface area at one point along a shape's constraint curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct LandscapePoint<D> {
    pub dimensions: D,
    pub surface_area: f64,
}

/// Returns `samples` evenly spaced values from `start` to `end` inclusive.
///
/// # Errors
///
/// Returns an error if fewer than two samples are requested.
pub(crate) fn grid(start: f64, end: f64, samples: usize) -> Result<Vec<f64>, InputError> {
    if samples < 2 {
        return Err(InputError::TooFewSamples(samples));
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (samples - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let mut values: Vec<f64> = (0..samples).map(|i| start + step * i as f64).collect();

    // Land exactly on the requested end.
    if let Some(last) = values.last_mut() {
        *last = end;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_both_ends() {
        let values = grid(1.0, 2.0, 5).unwrap();

        assert_eq!(values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn needs_two_samples() {
        assert_eq!(grid(0.0, 1.0, 1), Err(InputError::TooFewSamples(1)));
    }
}
