//! Sampling of the phase-shifted sine waves.

/// Number of samples per curve.
pub const SAMPLES: usize = 1000;

/// Angular step between two consecutive samples.
pub const WAVE_NUMBER: f64 = 0.012585;

/// Phase offsets of the four curves, in samples.
pub const PHASES: [f64; 4] = [125., 250., 375., 500.];

/// One sampled curve.  `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Sample `y[j] = sin(k * (j + phase))` for `j` in `0 .. n`.
pub fn sample(n: usize, k: f64, phase: f64) -> Curve {
    let x: Vec<f64> = (0 .. n).map(|j| j as f64).collect();
    let y = x.iter().map(|j| (k * (j + phase)).sin()).collect();
    Curve { x, y }
}
