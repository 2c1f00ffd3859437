//! Noise draw parameters.

/// Location and scale of a noise draw.
///
/// Defaults to standard parameters: location 0, scale 1. Whether a scale
/// was set explicitly is remembered, because the ARMA engine rescales
/// only an explicitly requested scale. The struct is `Copy`; adjusting
/// the scale produces a new value and never touches the caller's copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseParams {
    loc: f64,
    scale: Option<f64>,
}

impl NoiseParams {
    /// Creates standard parameters (location 0, scale 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the location (mean for gaussian noise).
    pub fn with_loc(mut self, loc: f64) -> Self {
        self.loc = loc;
        self
    }

    /// Sets the scale (standard deviation for gaussian noise, diversity
    /// for laplace noise).
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Returns the location.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Returns the scale, defaulting to 1.
    pub fn scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Returns the scale only if one was set explicitly.
    pub fn explicit_scale(&self) -> Option<f64> {
        self.scale
    }
}
