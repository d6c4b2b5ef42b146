//! Configuration failures.  Rendering itself cannot fail; the only
//! thing that can go wrong is being asked to render a window that
//! does not describe an image, and that is caught here before any
//! pixel work begins.

/// Raised when a viewport configuration cannot produce an image.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// One of the plane axes has an empty, inverted, or non-finite
    /// window.
    #[fail(
        display = "the {} window [{}, {}] does not span anything",
        axis, min, max
    )]
    EmptyWindow {
        /// Which axis, "real" or "imaginary".
        axis: &'static str,
        /// Lower bound of the window.
        min: f64,
        /// Upper bound of the window.
        max: f64,
    },

    /// The pixel density is zero, negative, or non-finite.
    #[fail(
        display = "pixel density must be positive and finite, got {}",
        density
    )]
    BadDensity {
        /// The offending pixels-per-unit value.
        density: f64,
    },

    /// The window and density together round down to a zero-pixel
    /// image.
    #[fail(
        display = "window and density produce a degenerate {}x{} image",
        width, height
    )]
    DegenerateImage {
        /// Derived width in pixels.
        width: u32,
        /// Derived height in pixels.
        height: u32,
    },
}
