// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The raster driver.  Walks every pixel of a viewport, asks the
//! escape evaluator about the point underneath it, and paints the
//! escapees into a row-major RGB buffer.  Bounded points are never
//! painted; they keep the black the buffer was cleared to, which is
//! what renders the interior of the set.

extern crate crossbeam;

use color::ColorMap;
use escape::{evaluate, EscapeParams};
use viewport::Viewport;

/// Bytes per pixel in the output buffer: R, G, B.
pub const BYTES_PER_PIXEL: usize = 3;

/// Owns everything one image needs: the viewport, the iteration
/// parameters, and the hue rotation.  Rendering cannot fail; all the
/// failure modes were spent constructing the Viewport.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    viewport: Viewport,
    params: EscapeParams,
    hue_factor: u32,
}

impl Renderer {
    /// Constructor.  The viewport has already been validated, so
    /// there is nothing left to check.
    pub fn new(viewport: Viewport, params: EscapeParams, hue_factor: u32) -> Renderer {
        Renderer {
            viewport,
            params,
            hue_factor,
        }
    }

    /// The viewport this renderer paints.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Renders the whole viewport on the calling thread and returns
    /// the buffer, width * height * 3 bytes, top row first.
    pub fn render(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.viewport.len() * BYTES_PER_PIXEL];
        self.render_band(&mut buffer, 0);
        buffer
    }

    /// A multi-threaded version of the render function.  The buffer
    /// is split into contiguous bands of rows, one crossbeam scoped
    /// thread per band.  Each band gets a private ColorMap: colors
    /// are pure functions of the count, so the partitions agree
    /// without sharing, and the output is byte-identical to the
    /// single-threaded path.
    pub fn render_threaded(&self, threads: usize) -> Vec<u8> {
        let threads = if threads == 0 { 1 } else { threads };
        let height = self.viewport.height() as usize;
        let row_bytes = self.viewport.width() as usize * BYTES_PER_PIXEL;
        let rows_per_band = (height + threads - 1) / threads;

        let mut buffer = vec![0 as u8; self.viewport.len() * BYTES_PER_PIXEL];
        {
            let bands: Vec<(usize, &mut [u8])> = buffer
                .chunks_mut(rows_per_band * row_bytes)
                .enumerate()
                .collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands {
                    let top = (i * rows_per_band) as u32;
                    spawner.spawn(move |_| {
                        self.render_band(band, top);
                    });
                }
            })
            .unwrap();
        }
        buffer
    }

    /// Renders a coarse character view of the viewport, an 'x' for
    /// every bounded point and a space for every escapee, one line
    /// per pixel row.  Handy for eyeballing a window before spending
    /// the time on a full-density render.
    pub fn ascii_preview(&self) -> String {
        let width = self.viewport.width() as usize;
        let mut out = String::with_capacity((width + 1) * self.viewport.height() as usize);
        for py in 0..self.viewport.height() {
            for px in 0..self.viewport.width() {
                let c = self.viewport.pixel_to_point(px, py);
                out.push(if evaluate(c, &self.params).escaped {
                    ' '
                } else {
                    'x'
                });
            }
            out.push('\n');
        }
        out
    }

    // Paints a contiguous band of whole rows whose first row is `top`.
    // The band carries its own color cache for the session.
    fn render_band(&self, band: &mut [u8], top: u32) {
        let row_bytes = self.viewport.width() as usize * BYTES_PER_PIXEL;
        let mut colors = ColorMap::new(self.hue_factor);
        for (dy, row) in band.chunks_mut(row_bytes).enumerate() {
            let py = top + dy as u32;
            for px in 0..self.viewport.width() {
                let c = self.viewport.pixel_to_point(px, py);
                let result = evaluate(c, &self.params);
                if result.escaped {
                    let color = colors.color_for(result.iterations);
                    let offset = px as usize * BYTES_PER_PIXEL;
                    row[offset] = color.r;
                    row[offset + 1] = color.g;
                    row[offset + 2] = color.b;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_two() -> Renderer {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0, 1.0).unwrap();
        let params = EscapeParams {
            max_iterations: 10,
            max_radius: 2.0,
        };
        Renderer::new(viewport, params, 5)
    }

    fn pixel(buffer: &[u8], width: u32, px: u32, py: u32) -> &[u8] {
        let offset = (py as usize * width as usize + px as usize) * BYTES_PER_PIXEL;
        &buffer[offset..offset + BYTES_PER_PIXEL]
    }

    #[test]
    fn buffer_is_exactly_three_bytes_per_pixel() {
        let renderer = three_by_two();
        assert_eq!(renderer.render().len(), 3 * 2 * 3);
    }

    #[test]
    fn bounded_points_stay_black() {
        let renderer = three_by_two();
        let buffer = renderer.render();
        // Pixel (2, 1) sits on the origin, the fixed point of the
        // iteration.
        assert_eq!(pixel(&buffer, 3, 2, 1), &[0, 0, 0]);
    }

    #[test]
    fn escaping_points_are_painted() {
        let renderer = three_by_two();
        let buffer = renderer.render();
        // Pixel (0, 0) sits on -2+i, which escapes on the first
        // iteration; velocity 1 at hue factor 5 is hue 5/360.
        assert_eq!(pixel(&buffer, 3, 0, 0), &[191, 74, 64]);
    }

    #[test]
    fn a_window_inside_the_set_renders_all_black() {
        let viewport = Viewport::new(-0.1, 0.1, -0.1, 0.1, 50.0).unwrap();
        let renderer = Renderer::new(viewport, EscapeParams::default(), 5);
        assert!(renderer.render().iter().all(|&b| b == 0));
    }

    #[test]
    fn threaded_render_matches_single_threaded() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0, 10.0).unwrap();
        let params = EscapeParams {
            max_iterations: 100,
            max_radius: 2.0,
        };
        let renderer = Renderer::new(viewport, params, 5);
        let single = renderer.render();
        for threads in &[1, 2, 3, 7] {
            assert_eq!(renderer.render_threaded(*threads), single);
        }
    }

    #[test]
    fn ascii_preview_marks_the_origin_and_skips_the_escapees() {
        let renderer = three_by_two();
        let preview = renderer.ascii_preview();
        let rows: Vec<&str> = preview.lines().collect();
        assert_eq!(rows.len(), 2);
        // Row 1 is the real axis; -2, -1, and 0 are all members.
        assert_eq!(rows[1], "xxx");
        // Row 0 is im = 1, where only the point above the origin is
        // bounded.
        assert_eq!(rows[0], "  x");
    }
}
