//! The seam between a [`Stream`](crate::Stream) and the external
//! plotting library.

use std::path::Path;
use crate::{Device, Error, Result, Rgb};

/// Colors of a new page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// World coordinates of the plotting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Bounds { xmin, xmax, ymin, ymax }
    }

    /// Return an error unless every bound is finite and each range is
    /// non-empty.
    pub fn check(&self) -> Result<()> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter().all(|v| v.is_finite());
        if finite && self.xmin < self.xmax && self.ymin < self.ymax {
            Ok(())
        } else {
            Err(Error::InvalidBounds(*self))
        }
    }
}

/// What is drawn around and inside the plotting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisStyle {
    /// Box with ticks and numeric tick labels.
    #[default]
    Box,
    /// As `Box`, plus the lines x = 0 and y = 0.
    ZeroAxes,
    /// As `ZeroAxes`, plus a grid at the major ticks.
    Grid,
}

/// Axis setup of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Env {
    pub bounds: Bounds,
    /// Use the same scale on both axes.
    pub justify: bool,
    pub style: AxisStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels {
    pub x: String,
    pub y: String,
    pub title: String,
}

/// The current color of a stream: its index in the palette and the
/// color it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub index: usize,
    pub color: Rgb,
}

/// Operations a plotting library must provide.
///
/// A [`Stream`](crate::Stream) checks the order of the calls and the
/// arguments before forwarding, so implementations may assume that
/// `begin` precedes the drawing calls and that `finish` comes last.
pub trait Backend {
    /// Open a new page.
    fn begin(&mut self, page: &Page) -> Result<()>;

    fn axes(&mut self, env: &Env) -> Result<()>;

    fn labels(&mut self, labels: &Labels) -> Result<()>;

    /// Draw the polyline through (`x[i]`, `y[i]`).  Both slices have
    /// the same length.
    fn line(&mut self, x: &[f64], y: &[f64], pen: Pen) -> Result<()>;

    /// Write the page to `path` and release it.
    fn finish(&mut self, device: Device, path: &Path) -> Result<()>;

    /// Version of the plotting library.
    fn version(&self) -> Result<String>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bounds() {
        assert!(Bounds::new(0., 1000., -1., 1.).check().is_ok());
    }

    #[test]
    fn invalid_bounds() {
        for b in [Bounds::new(1., 1., -1., 1.),
                  Bounds::new(0., 1., 1., -1.),
                  Bounds::new(0., f64::NAN, -1., 1.),
                  Bounds::new(f64::NEG_INFINITY, 1., -1., 1.)] {
            assert!(matches!(b.check(), Err(Error::InvalidBounds(_))),
                    "{:?}", b);
        }
    }
}
