//! Contains the Viewport struct, which relates a rectangular window
//! on the complex plane to an integral pixel grid through a pixel
//! density.  The density, in pixels per unit of plane length, is what
//! determines the resolution of the image: the pixel width and height
//! are derived, not supplied.

use num::Complex;

use error::ConfigError;

/// A rectangular window on the complex plane together with the
/// density at which it is sampled.  Constructing one validates the
/// configuration; a Viewport that exists can always be rendered.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    pixels_per_unit: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Constructor.  Takes the real-axis window, the imaginary-axis
    /// window, and the sampling density, and derives the pixel
    /// dimensions.  Degenerate configurations are rejected here, up
    /// front, so the renderer never has to consider them.
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        pixels_per_unit: f64,
    ) -> Result<Viewport, ConfigError> {
        if !(x_max - x_min).is_finite() || x_max <= x_min {
            return Err(ConfigError::EmptyWindow {
                axis: "real",
                min: x_min,
                max: x_max,
            });
        }

        if !(y_max - y_min).is_finite() || y_max <= y_min {
            return Err(ConfigError::EmptyWindow {
                axis: "imaginary",
                min: y_min,
                max: y_max,
            });
        }

        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(ConfigError::BadDensity {
                density: pixels_per_unit,
            });
        }

        // Integral windows at integral densities derive exactly; the
        // round keeps fractional configurations from losing a row or
        // column to representation error.
        let width = ((x_max - x_min) * pixels_per_unit).round() as u32;
        let height = ((y_max - y_min) * pixels_per_unit).round() as u32;

        if width == 0 || height == 0 {
            return Err(ConfigError::DegenerateImage { width, height });
        }

        Ok(Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
            pixels_per_unit,
            width,
            height,
        })
    }

    /// Width of the derived pixel grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the derived pixel grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The total number of pixels in the grid.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// A validated Viewport always has at least one pixel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Given the column and row of a pixel, return the complex number
    /// at the equivalent location on the plane.  Pixel rows grow
    /// downward while the imaginary axis grows upward, so the row
    /// component is negated.
    pub fn pixel_to_point(&self, px: u32, py: u32) -> Complex<f64> {
        Complex::new(
            f64::from(px) / self.pixels_per_unit + self.x_min,
            -f64::from(py) / self.pixels_per_unit + self.y_max,
        )
    }
}
