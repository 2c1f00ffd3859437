//! Split proportion validation.

use crate::error::SeriesError;

/// A validated train/test/val proportion triple.
///
/// Produced by [`validate_proportions`]; the three parts are guaranteed
/// to lie in `[0, 1]` with any missing part inferred from the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitProportions {
    train: f64,
    test: f64,
    val: f64,
}

impl SplitProportions {
    /// Returns the training proportion.
    pub fn train(&self) -> f64 {
        self.train
    }

    /// Returns the testing proportion.
    pub fn test(&self) -> f64 {
        self.test
    }

    /// Returns the validation proportion.
    pub fn val(&self) -> f64 {
        self.val
    }
}

/// Validates a train/test/val proportion request and infers the missing
/// part.
///
/// At least one of `train` and `test` must be given; a missing `train` is
/// inferred as `1 - test - val` and a missing `test` as `1 - train - val`.
/// When both are given their sum with `val` is compared against one
/// exactly, with no tolerance, so proportions should be chosen to sum to
/// one in floating point.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SeriesError::MissingProportion`] | neither `train` nor `test` given |
/// | [`SeriesError::ProportionOutOfRange`] | a given proportion outside `[0, 1]` |
/// | [`SeriesError::ProportionsNotNormalized`] | all three given, sum != 1 |
/// | [`SeriesError::OverAllocated`] | `train + val > 1` or `test + val > 1` |
pub fn validate_proportions(
    train: Option<f64>,
    test: Option<f64>,
    val: f64,
) -> Result<SplitProportions, SeriesError> {
    if train.is_none() && test.is_none() {
        return Err(SeriesError::MissingProportion);
    }
    for (name, part) in [("train", train), ("test", test), ("val", Some(val))] {
        if let Some(value) = part {
            if !(0.0..=1.0).contains(&value) {
                return Err(SeriesError::ProportionOutOfRange { name, value });
            }
        }
    }

    if let (Some(train), Some(test)) = (train, test) {
        let sum = train + test + val;
        if sum != 1.0 {
            return Err(SeriesError::ProportionsNotNormalized { sum });
        }
    }
    if let Some(train) = train {
        if train + val > 1.0 {
            return Err(SeriesError::OverAllocated {
                name: "train",
                sum: train + val,
            });
        }
    }
    if let Some(test) = test {
        if test + val > 1.0 {
            return Err(SeriesError::OverAllocated {
                name: "test",
                sum: test + val,
            });
        }
    }

    let (train, test) = match (train, test) {
        (Some(train), Some(test)) => (train, test),
        (Some(train), None) => (train, 1.0 - train - val),
        (None, Some(test)) => (1.0 - test - val, test),
        (None, None) => return Err(SeriesError::MissingProportion),
    };
    Ok(SplitProportions { train, test, val })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn both_given_and_normalized() {
        let p = validate_proportions(Some(0.7), Some(0.3), 0.0).unwrap();
        assert_eq!(p.train(), 0.7);
        assert_eq!(p.test(), 0.3);
        assert_eq!(p.val(), 0.0);
    }

    #[test]
    fn train_only_infers_test() {
        let p = validate_proportions(Some(0.8), None, 0.0).unwrap();
        assert_relative_eq!(p.test(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_only_infers_train() {
        let p = validate_proportions(None, Some(0.3), 0.3).unwrap();
        assert_relative_eq!(p.train(), 0.4, epsilon = 1e-12);
        assert_eq!(p.val(), 0.3);
    }

    #[test]
    fn neither_given() {
        let err = validate_proportions(None, None, 0.0).unwrap_err();
        assert_eq!(err, SeriesError::MissingProportion);
    }

    #[test]
    fn out_of_range_proportions() {
        let err = validate_proportions(Some(1.2), None, 0.0).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::ProportionOutOfRange { name: "train", .. }
        ));
        let err = validate_proportions(None, Some(-0.1), 0.0).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::ProportionOutOfRange { name: "test", .. }
        ));
        let err = validate_proportions(Some(0.5), None, 1.5).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::ProportionOutOfRange { name: "val", .. }
        ));
    }

    #[test]
    fn normalization_is_exact() {
        let err = validate_proportions(Some(0.5), Some(0.4), 0.0).unwrap_err();
        assert!(matches!(err, SeriesError::ProportionsNotNormalized { .. }));

        // The sum is compared without tolerance: 0.6 + 0.3 + 0.1 rounds
        // just below one and is rejected.
        let err = validate_proportions(Some(0.6), Some(0.3), 0.1).unwrap_err();
        assert!(matches!(err, SeriesError::ProportionsNotNormalized { .. }));

        // 0.4 + 0.3 + 0.3 rounds to exactly one and is accepted.
        validate_proportions(Some(0.4), Some(0.3), 0.3).unwrap();
    }

    #[test]
    fn over_allocated_pairs() {
        let err = validate_proportions(Some(0.8), None, 0.3).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::OverAllocated { name: "train", .. }
        ));
        let err = validate_proportions(None, Some(0.9), 0.2).unwrap_err();
        assert!(matches!(err, SeriesError::OverAllocated { name: "test", .. }));
    }

    #[test]
    fn zero_train_is_valid() {
        let p = validate_proportions(Some(0.0), Some(1.0), 0.0).unwrap();
        assert_eq!(p.train(), 0.0);
        assert_eq!(p.test(), 1.0);
    }
}
