//! Output devices and how the command line picks one.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use log::warn;
use crate::Error;

/// Output backend of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// Raster output, anti-aliased, written as PNG.
    #[default]
    PngCairo,
    /// Vector output.
    Svg,
}

impl Device {
    pub fn name(self) -> &'static str {
        match self {
            Device::PngCairo => "pngcairo",
            Device::Svg => "svg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Device::PngCairo => "png",
            Device::Svg => "svg",
        }
    }

    /// Format string understood by the plotting library's `savefig`.
    pub fn format(self) -> &'static str {
        self.extension()
    }

    /// Select the device from the program arguments (without the
    /// program name).  Only a single argument equal to `svg` selects
    /// [`Device::Svg`]; any other invocation gives [`Device::PngCairo`].
    pub fn from_args<I, S>(args: I) -> Device
    where I: IntoIterator<Item = S>,
          S: AsRef<str> {
        let args: Vec<S> = args.into_iter().collect();
        match args.as_slice() {
            [a] if a.as_ref() == "svg" => Device::Svg,
            [] | [_] => Device::PngCairo,
            _ => {
                warn!("{} arguments given, expected at most one", args.len());
                Device::PngCairo
            }
        }
    }

    /// `"{stem}.{extension}"`.
    pub fn file_name(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Device {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "pngcairo" | "png" => Ok(Device::PngCairo),
            "svg" => Ok(Device::Svg),
            _ => Err(Error::UnknownDevice(s.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_is_png() {
        let d = Device::from_args(Vec::<String>::new());
        assert_eq!(d, Device::PngCairo);
        assert_eq!(d.file_name("SineWaves"), "SineWaves.png");
    }

    #[test]
    fn svg_argument() {
        let d = Device::from_args(["svg"]);
        assert_eq!(d, Device::Svg);
        assert_eq!(d.file_name("SineWaves"), "SineWaves.svg");
    }

    #[test]
    fn other_arguments_are_png() {
        for a in ["SVG", "png", "svg ", "", "--svg"] {
            assert_eq!(Device::from_args([a]), Device::PngCairo, "{:?}", a);
        }
        assert_eq!(Device::from_args(["pdf", "svg"]), Device::PngCairo);
    }

    #[test]
    fn svg_with_extra_argument_is_png() {
        assert_eq!(Device::from_args(["svg", "extra"]), Device::PngCairo);
        assert_eq!(Device::from_args(["svg", "svg"]), Device::PngCairo);
    }

    #[test]
    fn names() {
        assert_eq!(Device::PngCairo.to_string(), "pngcairo");
        assert_eq!(Device::Svg.format(), "svg");
        assert_eq!("png".parse::<Device>().unwrap(), Device::PngCairo);
        assert_eq!("svg".parse::<Device>().unwrap(), Device::Svg);
        assert!(matches!("xwin".parse::<Device>(),
                         Err(Error::UnknownDevice(_))));
    }
}
