//! ARMA model coefficients.

/// An ARMA(p,q) model given by its coefficient lists.
///
/// The generating recurrence adds to each noise term a weighted sum of
/// the `p` previous values and the `q` previous noise terms:
///
/// ```text
/// x[t] = e[t] + ar[0]*x[t-1] + .. + ar[p-1]*x[t-p]
///             + ma[0]*e[t-1] + .. + ma[q-1]*e[t-q]
/// ```
///
/// Coefficients are given most-recent first: `ar[0]` weights the value
/// one step back.
///
/// # Example
///
/// ```
/// use cadence_arma::ArmaModel;
///
/// let model = ArmaModel::new(vec![0.6, -0.2], vec![0.3]);
/// assert_eq!(model.ar_order(), 2);
/// assert_eq!(model.ma_order(), 1);
/// assert_eq!(model.burn_in(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArmaModel {
    ar: Vec<f64>,
    ma: Vec<f64>,
}

impl ArmaModel {
    /// Creates a model from AR and MA coefficient lists.
    ///
    /// Either list may be empty; an empty model reproduces its noise
    /// unchanged.
    pub fn new(ar: Vec<f64>, ma: Vec<f64>) -> Self {
        Self { ar, ma }
    }

    /// Returns the AR coefficients, most recent first.
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients, most recent first.
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the AR order (`p`).
    pub fn ar_order(&self) -> usize {
        self.ar.len()
    }

    /// Returns the MA order (`q`).
    pub fn ma_order(&self) -> usize {
        self.ma.len()
    }

    /// Returns the burn-in length, the larger of the two orders.
    ///
    /// This many seed samples precede the reported series so the
    /// recurrence windows are full from the first reported step.
    pub fn burn_in(&self) -> usize {
        self.ar.len().max(self.ma.len())
    }
}
