//! [`Backend`] bound to the [Matplotlib][] Python library.
//!
//! The figure is built with `matplotlib.figure.Figure` directly so
//! that `pyplot`, and with it any GUI toolkit, is never loaded.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use log::debug;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};
use numpy::PyArray1;
use crate::{
    backend::{AxisStyle, Backend, Env, Labels, Page, Pen},
    Device, Error, Result, Rgb,
};

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, intern!(py, $m)).map(|m| m.unbind()))
}}

lazy_static! {
    static ref MATPLOTLIB: std::result::Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib")
    };
    static ref FIGURE: std::result::Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Call the method `$m` of `$obj` (a `Bound`) with positional `$args`.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        $obj.call_method1(intern!($obj.py(), stringify!($m)), $args)
    };
    ($obj: expr, $m: ident, $args: expr, $kwargs: expr) => {
        $obj.call_method(intern!($obj.py(), stringify!($m)), $args,
                         Some($kwargs))
    };
}

/// Keyword arguments `{"color": c}`.
fn color_kw<'py>(py: Python<'py>, c: Rgb) -> PyResult<Bound<'py, PyDict>> {
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item(intern!(py, "color"), c.to_string())?;
    Ok(kwargs)
}

/// The figure being drawn and its (single) axes.
#[derive(Debug)]
struct Canvas {
    fig: PyObject, // instance of matplotlib.figure.Figure
    ax: PyObject,
    page: Page,
}

/// Plot through Matplotlib.
#[derive(Debug, Default)]
pub struct Matplotlib {
    canvas: Option<Canvas>,
    dpi: Option<f64>,
}

impl Matplotlib {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution of raster output.  Non-positive values restore
    /// Matplotlib's default.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    fn canvas(&self) -> Result<&Canvas> {
        self.canvas.as_ref().ok_or(Error::NotInitialized)
    }
}

impl Backend for Matplotlib {
    fn begin(&mut self, page: &Page) -> Result<()> {
        let figure = pymod!(FIGURE)?;
        let canvas = Python::with_gil(|py| -> PyResult<Canvas> {
            let bg = page.background.to_string();
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item(intern!(py, "facecolor"), bg.as_str())?;
            let fig = figure.bind(py).getattr(intern!(py, "Figure"))?
                .call((), Some(&kwargs))?;
            let ax = meth!(fig, subplots, ())?;
            meth!(ax, set_facecolor, (bg.as_str(),))?;
            Ok(Canvas { fig: fig.unbind(), ax: ax.unbind(), page: *page })
        })?;
        debug!("matplotlib: new figure");
        self.canvas = Some(canvas);
        Ok(())
    }

    fn axes(&mut self, env: &Env) -> Result<()> {
        let c = self.canvas()?;
        let b = &env.bounds;
        Python::with_gil(|py| -> PyResult<()> {
            let ax = c.ax.bind(py);
            let fg = c.page.foreground;
            meth!(ax, set_xlim, (b.xmin, b.xmax))?;
            meth!(ax, set_ylim, (b.ymin, b.ymax))?;
            if env.justify {
                meth!(ax, set_aspect, ("equal",))?;
            }
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item(intern!(py, "colors"), fg.to_string())?;
            meth!(ax, tick_params, (), &kwargs)?;
            let spines = ax.getattr(intern!(py, "spines"))?;
            for spine in meth!(spines, values, ())?.iter()? {
                let spine = spine?;
                meth!(spine, set_color, (fg.to_string(),))?;
            }
            match env.style {
                AxisStyle::Box => (),
                AxisStyle::ZeroAxes | AxisStyle::Grid => {
                    let kwargs = color_kw(py, fg)?;
                    kwargs.set_item(intern!(py, "linewidth"), 0.8)?;
                    meth!(ax, axhline, (0.,), &kwargs)?;
                    meth!(ax, axvline, (0.,), &kwargs)?;
                }
            }
            if env.style == AxisStyle::Grid {
                meth!(ax, grid, (true,))?;
            }
            Ok(())
        })?;
        Ok(())
    }

    fn labels(&mut self, labels: &Labels) -> Result<()> {
        let c = self.canvas()?;
        Python::with_gil(|py| -> PyResult<()> {
            let ax = c.ax.bind(py);
            let kwargs = color_kw(py, c.page.foreground)?;
            meth!(ax, set_xlabel, (labels.x.as_str(),), &kwargs)?;
            meth!(ax, set_ylabel, (labels.y.as_str(),), &kwargs)?;
            meth!(ax, set_title, (labels.title.as_str(),), &kwargs)?;
            Ok(())
        })?;
        Ok(())
    }

    fn line(&mut self, x: &[f64], y: &[f64], pen: Pen) -> Result<()> {
        let c = self.canvas()?;
        Python::with_gil(|py| -> PyResult<()> {
            let xn = PyArray1::from_slice_bound(py, x);
            let yn = PyArray1::from_slice_bound(py, y);
            let kwargs = color_kw(py, pen.color)?;
            meth!(c.ax.bind(py), plot, (xn, yn), &kwargs)?;
            Ok(())
        })?;
        Ok(())
    }

    fn finish(&mut self, device: Device, path: &Path) -> Result<()> {
        let c = self.canvas.take().ok_or(Error::NotInitialized)?;
        Python::with_gil(|py| -> Result<()> {
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item(intern!(py, "format"), device.format())?;
            kwargs.set_item(intern!(py, "facecolor"),
                            c.page.background.to_string())?;
            if let Some(dpi) = self.dpi {
                kwargs.set_item(intern!(py, "dpi"), dpi)?;
            }
            meth!(c.fig.bind(py), savefig, (path,), &kwargs)
                .map(|_| ())
                .map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFound(path.to_path_buf())
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::Permission(path.to_path_buf())
                    } else {
                        Error::Python(e)
                    }
                })
        })?;
        debug!("matplotlib: saved {} as {}", path.display(), device);
        Ok(())
    }

    fn version(&self) -> Result<String> {
        let matplotlib = pymod!(MATPLOTLIB)?;
        let v = Python::with_gil(|py| -> PyResult<String> {
            matplotlib.bind(py)
                .getattr(intern!(py, "__version__"))?
                .extract::<String>()
        })?;
        Ok(v)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backend::Bounds, Palette, Stream};

    /// Return `None` when the Python side lacks Matplotlib.
    fn stream_on(m: Matplotlib, device: Device) -> Option<Stream<Matplotlib>> {
        if pymod!(FIGURE).is_err() {
            eprintln!("Matplotlib not found, skipping");
            return None;
        }
        let mut s = Stream::new(m);
        s.set_device(device).unwrap();
        Some(s)
    }

    fn stream(device: Device) -> Option<Stream<Matplotlib>> {
        stream_on(Matplotlib::new(), device)
    }

    /// Width in pixels read from the IHDR chunk.
    fn png_width(path: &Path) -> u32 {
        let png = std::fs::read(path).unwrap();
        assert_eq!(&png[1 .. 4], b"PNG");
        u32::from_be_bytes([png[16], png[17], png[18], png[19]])
    }

    fn draw(s: &mut Stream<Matplotlib>, path: &Path) -> Result<()> {
        s.set_file_name(path)?.set_palette(Palette::alternate())?;
        s.init()?
            .env(Bounds::new(0., 4., -1., 4.))?
            .label("X", "Y", "Test")?
            .color(9)?
            .line(&[1., 2., 3., 4.], &[1., 4., 2., 3.])?;
        s.end()?;
        Ok(())
    }

    #[test]
    fn a_basic_svg() -> Result<()> {
        let Some(mut s) = stream(Device::Svg) else { return Ok(()) };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_basic.svg");
        draw(&mut s, &path)?;
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#0000ff"));
        Ok(())
    }

    #[test]
    fn a_basic_png() -> Result<()> {
        let Some(mut s) = stream(Device::PngCairo) else { return Ok(()) };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_basic.png");
        draw(&mut s, &path)?;
        let png = std::fs::read(&path).unwrap();
        assert_eq!(&png[1 .. 4], b"PNG");
        Ok(())
    }

    #[test]
    fn missing_directory() {
        let Some(mut s) = stream(Device::Svg) else { return };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.svg");
        assert!(matches!(draw(&mut s, &path), Err(Error::FileNotFound(_))));
    }

    #[test]
    fn justified_grid() -> Result<()> {
        let Some(mut s) = stream(Device::Svg) else { return Ok(()) };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.svg");
        s.set_file_name(&path)?;
        s.init()?
            .env_with(Env { bounds: Bounds::new(-2., 2., -1., 1.),
                            justify: true,
                            style: AxisStyle::Grid })?
            .color(2)?
            .line(&[-2., 0., 2.], &[-1., 1., -1.])?;
        s.end()?;
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        Ok(())
    }

    #[test]
    fn zero_axes_png() -> Result<()> {
        let Some(mut s) = stream(Device::PngCairo) else { return Ok(()) };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.png");
        s.set_file_name(&path)?;
        s.init()?
            .env_with(Env { bounds: Bounds::new(-1., 1., -1., 1.),
                            justify: false,
                            style: AxisStyle::ZeroAxes })?;
        s.end()?;
        assert!(png_width(&path) > 0);
        Ok(())
    }

    #[test]
    fn dpi_scales_png() -> Result<()> {
        let mut widths = vec![];
        for dpi in [50., 100.] {
            let mut m = Matplotlib::new();
            m.dpi(dpi);
            let Some(mut s) = stream_on(m, Device::PngCairo)
            else { return Ok(()) };
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("dpi.png");
            draw(&mut s, &path)?;
            widths.push(png_width(&path));
        }
        assert_eq!(widths[1], 2 * widths[0]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory() {
        use std::os::unix::fs::PermissionsExt;
        let Some(mut s) = stream(Device::Svg) else { return };
        let dir = tempfile::tempdir().unwrap();
        let set_mode = |mode| std::fs::set_permissions(
            dir.path(), std::fs::Permissions::from_mode(mode)).unwrap();
        set_mode(0o555);
        // Privileged users write anyway.
        if std::fs::write(dir.path().join("writable"), b"").is_ok() {
            eprintln!("directory still writable, skipping");
            set_mode(0o755);
            return;
        }
        let r = draw(&mut s, &dir.path().join("ro.svg"));
        set_mode(0o755);
        assert!(matches!(r, Err(Error::Permission(_))), "{:?}", r);
    }

    #[test]
    fn version() {
        let Some(s) = stream(Device::Svg) else { return };
        let v = s.version().unwrap();
        assert!(v.chars().next().is_some_and(|c| c.is_ascii_digit()), "{}", v);
    }
}
