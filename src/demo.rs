//! The four sine waves demo.

use std::path::PathBuf;
use log::debug;
use crate::{
    backend::{Backend, Bounds},
    waves::{self, Curve},
    Device, Palette, Result, Stream,
};

/// Configuration of the demo.  [`Demo::default`] is the fixed plot:
/// four waves of 1000 samples, phases 125, 250, 375 and 500, drawn
/// with the colors 9, 1, 2 and 4 of the alternate palette.
#[derive(Debug, Clone)]
pub struct Demo {
    pub samples: usize,
    pub wave_number: f64,
    /// One curve per phase.
    pub phases: Vec<f64>,
    /// Palette index of each curve, cycled if shorter than `phases`.
    pub colors: Vec<usize>,
    pub bounds: Bounds,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub palette: Palette,
    /// Output file name without extension.
    pub stem: String,
}

impl Default for Demo {
    fn default() -> Self {
        Demo { samples: waves::SAMPLES,
               wave_number: waves::WAVE_NUMBER,
               phases: waves::PHASES.to_vec(),
               colors: vec![9, 1, 2, 4],
               bounds: Bounds::new(0., 1000., -1., 1.),
               x_label: "X".to_string(),
               y_label: "Y".to_string(),
               title: "PLplot demo of four sine waves".to_string(),
               palette: Palette::alternate(),
               stem: "SineWaves".to_string() }
    }
}

impl Demo {
    pub fn curves(&self) -> Vec<Curve> {
        self.phases.iter()
            .map(|&p| waves::sample(self.samples, self.wave_number, p))
            .collect()
    }

    /// Draw the demo on `stream` for `device`.  Return the path of the
    /// file written.
    pub fn run<B: Backend>(&self, stream: &mut Stream<B>, device: Device)
                           -> Result<PathBuf> {
        let curves = self.curves();
        stream.set_device(device)?
            .set_file_name(device.file_name(&self.stem))?
            .set_palette(self.palette.clone())?;
        stream.init()?
            .env(self.bounds)?
            .label(&self.x_label, &self.y_label, &self.title)?;
        for (curve, &color) in curves.iter().zip(self.colors.iter().cycle()) {
            debug!("curve with color {}", color);
            stream.color(color)?.line(curve.x(), curve.y())?;
        }
        stream.end()
    }
}
