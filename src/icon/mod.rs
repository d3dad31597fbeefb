mod sample;

pub(crate) use sample::sample_pixel;

use crate::error::Result;
use crate::model::Rgb;
use std::path::{Path, PathBuf};

/// Reads the color of one pixel of an icon. Defaults to the top-left pixel,
/// which is the background of square launcher icons.
pub struct IconProbe {
    path: PathBuf,
    x: u32,
    y: u32,
}

impl IconProbe {
    pub fn builder(path: impl AsRef<Path>) -> IconProbe {
        IconProbe {
            path: path.as_ref().to_path_buf(),
            x: 0,
            y: 0,
        }
    }

    pub fn set_point(&mut self, x: u32, y: u32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sample(&self) -> Result<Rgb> {
        sample_pixel(&self.path, self.x, self.y)
    }
}
