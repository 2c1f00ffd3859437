//! Split configuration and recorded boundaries.

use crate::error::SeriesError;
use crate::proportions::{SplitProportions, validate_proportions};

/// Training proportion used when neither train nor test is requested.
pub const DEFAULT_TRAIN: f64 = 0.8;

/// Requested proportions for a train/test/val split.
///
/// An empty request is valid: the training proportion then falls back to
/// [`DEFAULT_TRAIN`]. A zero `val` (the default) means no validation set
/// is carved out.
///
/// ```ignore
/// let spec = SplitSpec::new().with_test(0.3).with_val(0.3);
/// series.train_test_split(spec)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplitSpec {
    train: Option<f64>,
    test: Option<f64>,
    val: f64,
}

impl SplitSpec {
    /// Creates an empty request, meaning the default 0.8/0.2 split.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the training proportion.
    pub fn with_train(mut self, train: f64) -> Self {
        self.train = Some(train);
        self
    }

    /// Sets the testing proportion.
    pub fn with_test(mut self, test: f64) -> Self {
        self.test = Some(test);
        self
    }

    /// Sets the validation proportion.
    pub fn with_val(mut self, val: f64) -> Self {
        self.val = val;
        self
    }

    /// Returns the requested training proportion, if set.
    pub fn train(&self) -> Option<f64> {
        self.train
    }

    /// Returns the requested testing proportion, if set.
    pub fn test(&self) -> Option<f64> {
        self.test
    }

    /// Returns the requested validation proportion.
    pub fn val(&self) -> f64 {
        self.val
    }

    /// Validates the request, applying the training default first.
    pub(crate) fn resolve(&self) -> Result<SplitProportions, SeriesError> {
        let train = match (self.train, self.test) {
            (None, None) => Some(DEFAULT_TRAIN),
            _ => self.train,
        };
        validate_proportions(train, self.test, self.val)
    }
}

/// Index boundaries recorded by a completed split.
///
/// `train_end` is the exclusive end of the training segment. `val_end`,
/// present only when the split requested a nonzero validation
/// proportion, is the exclusive end of the validation segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitState {
    train_end: usize,
    val_end: Option<usize>,
}

impl SplitState {
    /// Computes boundaries for a series of `n` points.
    ///
    /// Boundaries are rounded half-to-even from the requested shares.
    /// The validation boundary is clamped to `n` so both boundaries
    /// stay valid slice positions.
    pub(crate) fn from_proportions(n: usize, proportions: &SplitProportions) -> Self {
        let train_end = round_share(n, proportions.train());
        let val_end = (proportions.val() != 0.0)
            .then(|| (train_end + round_share(n, proportions.val())).min(n));
        Self { train_end, val_end }
    }

    /// Returns the exclusive end of the training segment.
    pub fn train_end(&self) -> usize {
        self.train_end
    }

    /// Returns the exclusive end of the validation segment, if one was
    /// requested.
    pub fn val_end(&self) -> Option<usize> {
        self.val_end
    }

    /// Returns `true` if the split carved out a validation set.
    pub fn has_validation(&self) -> bool {
        self.val_end.is_some()
    }
}

fn round_share(n: usize, proportion: f64) -> usize {
    (n as f64 * proportion).round_ties_even() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_defaults_to_train() {
        let p = SplitSpec::new().resolve().unwrap();
        assert_eq!(p.train(), DEFAULT_TRAIN);
        assert_eq!(p.val(), 0.0);
    }

    #[test]
    fn explicit_request_suppresses_default() {
        let p = SplitSpec::new().with_test(0.3).with_val(0.3).resolve().unwrap();
        assert!((p.train() - 0.4).abs() < 1e-12);
        assert_eq!(p.test(), 0.3);
    }

    #[test]
    fn invalid_request_is_rejected() {
        let err = SplitSpec::new().with_train(1.5).resolve().unwrap_err();
        assert!(matches!(err, SeriesError::ProportionOutOfRange { .. }));
    }

    #[test]
    fn default_boundaries_on_ten_points() {
        let p = SplitSpec::new().resolve().unwrap();
        let state = SplitState::from_proportions(10, &p);
        assert_eq!(state.train_end(), 8);
        assert_eq!(state.val_end(), None);
        assert!(!state.has_validation());
    }

    #[test]
    fn validation_boundaries_on_ten_points() {
        let p = SplitSpec::new().with_test(0.3).with_val(0.3).resolve().unwrap();
        let state = SplitState::from_proportions(10, &p);
        assert_eq!(state.train_end(), 4);
        assert_eq!(state.val_end(), Some(7));
        assert!(state.has_validation());
    }

    #[test]
    fn boundaries_round_half_to_even() {
        // 0.25 of 10 points is 2.5, which rounds down to the even 2.
        let p = SplitSpec::new().with_train(0.25).resolve().unwrap();
        let state = SplitState::from_proportions(10, &p);
        assert_eq!(state.train_end(), 2);

        // 0.35 of 10 points is 3.5, which rounds up to the even 4.
        let p = SplitSpec::new().with_train(0.35).resolve().unwrap();
        let state = SplitState::from_proportions(10, &p);
        assert_eq!(state.train_end(), 4);
    }

    #[test]
    fn validation_boundary_is_clamped() {
        // Rounding both halves up would spill one past the end.
        let p = SplitSpec::new().with_train(0.5).with_val(0.5).resolve().unwrap();
        let state = SplitState::from_proportions(3, &p);
        assert_eq!(state.train_end(), 2);
        assert_eq!(state.val_end(), Some(3));
    }

    #[test]
    fn spec_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<SplitSpec>();
        assert_copy::<SplitState>();
    }
}
