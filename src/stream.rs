//! Plotting sessions.
//!
//! A [`Stream`] goes through three states.  While *configuring*, the
//! device, the output file and the palette may be chosen.
//! [`Stream::init`] opens the page and the stream is *drawing*: axes,
//! labels, colors and lines may be issued.  [`Stream::end`] writes the
//! page out and the stream is *finished*.  Calls made in the wrong
//! state are rejected with an [`Error`] and reach no backend.

use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::{
    backend::{AxisStyle, Backend, Bounds, Env, Labels, Page, Pen},
    Device, Error, Palette, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Configuring,
    Drawing,
    Finished,
}

/// A plotting session on the backend `B`.
#[derive(Debug)]
pub struct Stream<B> {
    backend: B,
    state: State,
    device: Option<Device>,
    file_name: Option<PathBuf>,
    palette: Palette,
    pen: usize,
}

impl<B: Backend> Stream<B> {
    /// Return a new stream using the default palette and no device.
    pub fn new(backend: B) -> Self {
        Stream { backend,
                 state: State::Configuring,
                 device: None,
                 file_name: None,
                 palette: Palette::default(),
                 pen: 1 }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn device(&self) -> Option<Device> {
        self.device
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of the current pen.
    pub fn pen(&self) -> usize {
        self.pen
    }

    fn configuring(&self) -> Result<()> {
        match self.state {
            State::Configuring => Ok(()),
            State::Drawing => Err(Error::AlreadyInitialized),
            State::Finished => Err(Error::Finished),
        }
    }

    fn drawing(&self) -> Result<()> {
        match self.state {
            State::Configuring => Err(Error::NotInitialized),
            State::Drawing => Ok(()),
            State::Finished => Err(Error::Finished),
        }
    }

    pub fn set_device(&mut self, device: Device) -> Result<&mut Self> {
        self.configuring()?;
        self.device = Some(device);
        Ok(self)
    }

    pub fn set_file_name(&mut self, path: impl AsRef<Path>)
                         -> Result<&mut Self> {
        self.configuring()?;
        self.file_name = Some(path.as_ref().to_path_buf());
        Ok(self)
    }

    pub fn set_palette(&mut self, palette: Palette) -> Result<&mut Self> {
        self.configuring()?;
        self.palette = palette;
        Ok(self)
    }

    /// Open the page.  The pen is reset to the foreground color (index 1).
    pub fn init(&mut self) -> Result<&mut Self> {
        self.configuring()?;
        let device = self.device.ok_or(Error::NoDevice)?;
        debug!("init: device {}, palette {}", device, self.palette.name());
        let page = Page { background: self.palette.background(),
                          foreground: self.palette.foreground() };
        self.backend.begin(&page)?;
        self.state = State::Drawing;
        self.pen = 1;
        Ok(self)
    }

    /// Set up the axes for `bounds` with a plain box.
    pub fn env(&mut self, bounds: Bounds) -> Result<&mut Self> {
        self.env_with(Env { bounds, justify: false, style: AxisStyle::Box })
    }

    pub fn env_with(&mut self, env: Env) -> Result<&mut Self> {
        self.drawing()?;
        env.bounds.check()?;
        debug!("env: {:?}", env);
        self.backend.axes(&env)?;
        Ok(self)
    }

    pub fn label(&mut self, x: &str, y: &str, title: &str)
                 -> Result<&mut Self> {
        self.drawing()?;
        let labels = Labels { x: x.to_string(),
                              y: y.to_string(),
                              title: title.to_string() };
        self.backend.labels(&labels)?;
        Ok(self)
    }

    /// Select the pen for the following lines.
    pub fn color(&mut self, index: usize) -> Result<&mut Self> {
        self.drawing()?;
        self.palette.get(index)?;
        self.pen = index;
        Ok(self)
    }

    /// Draw the polyline through the points (`x[i]`, `y[i]`) with the
    /// current pen.  Fewer than two points draw nothing visible.
    pub fn line(&mut self, x: &[f64], y: &[f64]) -> Result<&mut Self> {
        self.drawing()?;
        if x.len() != y.len() {
            return Err(Error::LengthMismatch { x: x.len(), y: y.len() });
        }
        let pen = Pen { index: self.pen, color: self.palette.get(self.pen)? };
        debug!("line: {} points, color {} ({})", x.len(), pen.index, pen.color);
        self.backend.line(x, y, pen)?;
        Ok(self)
    }

    /// Write the page and close the stream.  Without a file name the
    /// page goes to `out.<extension>`.  Return the path written.
    ///
    /// The stream is finished even when writing fails: the backend has
    /// released the page by then.
    pub fn end(&mut self) -> Result<PathBuf> {
        self.drawing()?;
        let device = self.device.ok_or(Error::NoDevice)?;
        let path = match &self.file_name {
            Some(p) => p.clone(),
            None => PathBuf::from(device.file_name("out")),
        };
        self.state = State::Finished;
        self.backend.finish(device, &path)?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    /// Version of the plotting library.  Valid in any state.
    pub fn version(&self) -> Result<String> {
        self.backend.version()
    }
}
