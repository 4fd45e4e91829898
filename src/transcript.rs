//! A [`Backend`] that records what it is asked to draw.

use std::path::{Path, PathBuf};
use log::debug;
use crate::{
    backend::{Backend, Env, Labels, Page, Pen},
    Device, Result,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Begin(Page),
    Axes(Env),
    Labels(Labels),
    Line { x: Vec<f64>, y: Vec<f64>, pen: Pen },
    Finish { device: Device, path: PathBuf },
}

/// Backend keeping the list of calls instead of rendering them.
/// Nothing is written to the file system.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    calls: Vec<Call>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The lines drawn so far, in order.
    pub fn lines(&self) -> impl Iterator<Item = (&[f64], &[f64], Pen)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            Call::Line { x, y, pen } => Some((&x[..], &y[..], *pen)),
            _ => None,
        })
    }

    fn push(&mut self, call: Call) {
        debug!("transcript: {}", call_name(&call));
        self.calls.push(call);
    }
}

fn call_name(c: &Call) -> &'static str {
    match c {
        Call::Begin(_) => "begin",
        Call::Axes(_) => "axes",
        Call::Labels(_) => "labels",
        Call::Line { .. } => "line",
        Call::Finish { .. } => "finish",
    }
}

impl Backend for Transcript {
    fn begin(&mut self, page: &Page) -> Result<()> {
        self.push(Call::Begin(*page));
        Ok(())
    }

    fn axes(&mut self, env: &Env) -> Result<()> {
        self.push(Call::Axes(*env));
        Ok(())
    }

    fn labels(&mut self, labels: &Labels) -> Result<()> {
        self.push(Call::Labels(labels.clone()));
        Ok(())
    }

    fn line(&mut self, x: &[f64], y: &[f64], pen: Pen) -> Result<()> {
        self.push(Call::Line { x: x.to_vec(), y: y.to_vec(), pen });
        Ok(())
    }

    fn finish(&mut self, device: Device, path: &Path) -> Result<()> {
        self.push(Call::Finish { device, path: path.to_path_buf() });
        Ok(())
    }

    fn version(&self) -> Result<String> {
        Ok("transcript".to_string())
    }
}
