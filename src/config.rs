//! Render settings
//! Where finished charts go and how large static images are.

use std::fmt;
use std::path::PathBuf;

/// Static image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Chart presentation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Blocking window per chart
    Window,
    /// One image file per chart in the output directory
    File(ImageFormat),
    /// PNG bytes kept in memory
    Memory,
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Window
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Window => write!(f, "window"),
            OutputMode::File(format) => write!(f, "{}", format.extension()),
            OutputMode::Memory => write!(f, "memory"),
        }
    }
}

/// Settings for a rendering run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output: OutputMode,
    pub out_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Open each written file with the system viewer.
    pub open_files: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            out_dir: PathBuf::from("charts"),
            width: 1024,
            height: 768,
            open_files: false,
        }
    }
}

impl RenderConfig {
    /// Image size as a plotters backend size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
