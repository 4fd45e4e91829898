//! Four phase-shifted sine waves plotted through [Rust][] bindings to
//! the [Matplotlib][] Python visualization library.
//!
//! Usage
//! -----
//!
//! A [`Stream`] is a plotting session in the classic style: choose a
//! device, an output file and a palette, initialize, set up the axes,
//! then pick colors and draw lines until the page is ended.  The
//! drawing itself is done by a [`Backend`]: [`Matplotlib`] renders
//! files, [`Transcript`] only records the calls.
//!
//! ```no_run
//! use sinewaves::{Demo, Device, Matplotlib, Stream};
//! let mut stream = Stream::new(Matplotlib::new());
//! let path = Demo::default().run(&mut stream, Device::Svg)?;
//! println!("{} written with Matplotlib {}",
//!          path.display(), stream.version()?);
//! # Ok::<(), sinewaves::Error>(())
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use std::path::PathBuf;
use pyo3::PyErr;

pub mod backend;
pub mod demo;
pub mod device;
pub mod matplotlib;
pub mod palette;
pub mod stream;
pub mod transcript;
pub mod waves;

pub use backend::{AxisStyle, Backend, Bounds, Env, Labels, Page, Pen};
pub use demo::Demo;
pub use device::Device;
pub use matplotlib::Matplotlib;
pub use palette::{Palette, Rgb};
pub use stream::Stream;
pub use transcript::{Call, Transcript};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Possible errors of plotting sessions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("{}: a path element is not a directory or does not exist",
            .0.display())]
    FileNotFound(PathBuf),
    /// Permission denied to access or create the filesystem path.
    #[error("{}: permission denied", .0.display())]
    Permission(PathBuf),
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
    /// The device name is not known.
    #[error("unknown device {0:?}")]
    UnknownDevice(String),
    /// The palette name is not one of the built-in palettes.
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
    /// The color index lies outside the palette.
    #[error("color index {index} outside of the palette (0..{len})")]
    ColorIndex { index: usize, len: usize },
    /// The x and y sequences of a line differ in length.
    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },
    /// Plot bounds that are not finite or describe an empty range.
    #[error("invalid plot bounds {0:?}")]
    InvalidBounds(Bounds),
    /// The stream was initialized without a device.
    #[error("no output device selected")]
    NoDevice,
    /// The stream must be initialized first.
    #[error("plotting stream not initialized")]
    NotInitialized,
    /// The setting can only change before the stream is initialized.
    #[error("plotting stream already initialized")]
    AlreadyInitialized,
    /// The stream has been ended.
    #[error("plotting stream already ended")]
    Finished,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
