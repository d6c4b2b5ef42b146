// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Takes a single point on the complex
//! plane and determines whether iterating `z = z * z + c` drives it
//! past the escape radius, and if so, how quickly.

use num::Complex;

/// Default cap on the number of iterations before a point is declared
/// a member of the set.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Default escape radius.  Any orbit that leaves the circle of this
/// radius is gone for good.
pub const DEFAULT_MAX_RADIUS: f64 = 2.0;

/// The two knobs of the iteration: how long we are willing to wait
/// for an orbit to escape, and how far out "escaped" is.
#[derive(Copy, Clone, Debug)]
pub struct EscapeParams {
    /// Iteration cap.
    pub max_iterations: u32,
    /// Escape radius.
    pub max_radius: f64,
}

impl Default for EscapeParams {
    fn default() -> EscapeParams {
        EscapeParams {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

/// The outcome of iterating one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeResult {
    /// True when the orbit left the escape radius before the cap.
    pub escaped: bool,
    /// The 1-indexed count of the iteration that crossed the radius.
    /// Only meaningful when `escaped` is true.
    pub iterations: u32,
}

/// Iterates `z = z * z + c` starting from `z = c`, counting each
/// iteration before testing the radius, so the iteration that crosses
/// the threshold is the one reported, starting from 1.  The magnitude
/// test compares squared norms, which is equivalent to comparing
/// `|z|` against the radius and skips the square root.
///
/// Pure: same `c`, same result.  A NaN component never satisfies the
/// comparison, so a poisoned input runs to the cap and reports
/// bounded rather than looping forever.
pub fn evaluate(c: Complex<f64>, params: &EscapeParams) -> EscapeResult {
    let radius_sqr = params.max_radius * params.max_radius;
    let mut z = c;
    let mut iterations = 0;

    while iterations < params.max_iterations {
        iterations += 1;
        z = z * z + c;
        if z.norm_sqr() > radius_sqr {
            return EscapeResult {
                escaped: true,
                iterations,
            };
        }
    }

    EscapeResult {
        escaped: false,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_bounded() {
        let result = evaluate(Complex::new(0.0, 0.0), &EscapeParams::default());
        assert!(!result.escaped);
    }

    #[test]
    fn origin_is_bounded_even_with_a_single_iteration() {
        let params = EscapeParams {
            max_iterations: 1,
            max_radius: 2.0,
        };
        assert!(!evaluate(Complex::new(0.0, 0.0), &params).escaped);
    }

    #[test]
    fn points_beyond_the_radius_escape_on_the_first_iteration() {
        let params = EscapeParams::default();
        for c in &[
            Complex::new(-2.5, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(0.0, 2.25),
            Complex::new(-2.0, 2.0),
        ] {
            let result = evaluate(*c, &params);
            assert!(result.escaped, "{} should escape", c);
            assert_eq!(result.iterations, 1, "{} should escape immediately", c);
        }
    }

    #[test]
    fn minus_two_sits_on_the_boundary_and_never_escapes() {
        // z stays pinned at exactly 2, and the radius test is strict.
        let result = evaluate(Complex::new(-2.0, 0.0), &EscapeParams::default());
        assert!(!result.escaped);
    }

    #[test]
    fn escape_count_matches_a_hand_run() {
        // c = 0.5+0.5i walks 0.5+i, -0.25+1.5i, -1.6875-0.25i, and
        // then 3.285+1.34i, the first step past the radius.
        let result = evaluate(Complex::new(0.5, 0.5), &EscapeParams::default());
        assert!(result.escaped);
        assert_eq!(result.iterations, 4);
    }

    #[test]
    fn interior_points_are_bounded() {
        let params = EscapeParams::default();
        for c in &[
            Complex::new(-1.0, 0.0),
            Complex::new(0.25, 0.0),
            Complex::new(-0.1, 0.1),
        ] {
            assert!(!evaluate(*c, &params).escaped, "{} should be bounded", c);
        }
    }

    #[test]
    fn nan_input_terminates_and_reports_bounded() {
        let params = EscapeParams {
            max_iterations: 50,
            max_radius: 2.0,
        };
        let result = evaluate(Complex::new(::std::f64::NAN, 0.0), &params);
        assert!(!result.escaped);
        assert_eq!(result.iterations, 50);
    }
}
