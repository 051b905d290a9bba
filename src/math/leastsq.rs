//! Nonlinear least squares for the Gaussian peak model.
//!
//! ## Purpose
//!
//! This module fits the 3-parameter Gaussian model
//! `f(x) = amplitude * exp(-0.5 * ((x - center) / width)^2)` to `(x, y)`
//! data by Levenberg-Marquardt minimization of the residual sum of squares.
//!
//! ## Design notes
//!
//! * **Analytic Jacobian**: The three partial derivatives are evaluated in
//!   closed form; no finite differencing.
//! * **Damping**: A diagonal damping term blends between Gauss-Newton and
//!   gradient descent. Rejected steps raise the damping, accepted steps
//!   lower it.
//! * **Explicit failure**: When the iteration budget or damping ceiling is
//!   exhausted without convergence, the fit reports
//!   [`ContinuumError::FitDidNotConverge`] instead of returning the
//!   unconverged parameters.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The returned parameters never increase the residual sum of squares
//!   relative to the starting guess.
//! * A converged fit satisfies the relative tolerance `FTOL` on the
//!   residual sum of squares.
//!
//! ## Non-goals
//!
//! * This module does not choose the initial guess (done by the Gaussian
//!   estimator from the windowed moments).
//! * This module does not support models other than the Gaussian peak.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ContinuumError;

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of Levenberg-Marquardt iterations.
const MAX_ITERATIONS: usize = 200;

/// Relative tolerance on the residual sum of squares for convergence.
const FTOL: f64 = 1e-10;

/// Initial damping factor.
const LAMBDA_INIT: f64 = 1e-3;

/// Multiplicative damping adjustment per accepted/rejected step.
const LAMBDA_STEP: f64 = 10.0;

/// Damping ceiling; beyond this the step search has stalled.
const LAMBDA_MAX: f64 = 1e10;

// ============================================================================
// Gaussian Model
// ============================================================================

/// Parameters of the Gaussian peak model
/// `f(x) = amplitude * exp(-0.5 * ((x - center) / width)^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianModel<T> {
    /// Peak height.
    pub amplitude: T,

    /// Peak location.
    pub center: T,

    /// Peak 1-sigma width.
    pub width: T,
}

impl<T: Float> GaussianModel<T> {
    /// Evaluate the model at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        let half = T::from(0.5).unwrap();
        let u = (x - self.center) / self.width;
        self.amplitude * (-half * u * u).exp()
    }

    /// Residual sum of squares against `(x, y)` data.
    fn sse(&self, x: &[T], y: &[T]) -> T {
        let mut sum = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let r = yi - self.eval(xi);
            sum = sum + r * r;
        }
        sum
    }
}

// ============================================================================
// Levenberg-Marquardt Fit
// ============================================================================

/// Fit the Gaussian peak model to `(x, y)` starting from `init`.
///
/// Returns the converged parameters, or
/// [`ContinuumError::FitDidNotConverge`] when the minimizer stalls.
pub fn fit_gaussian<T: Float>(
    x: &[T],
    y: &[T],
    init: GaussianModel<T>,
) -> Result<GaussianModel<T>, ContinuumError> {
    debug_assert_eq!(x.len(), y.len(), "fit_gaussian: x/y length mismatch");

    let tiny = T::from(1e-30).unwrap();
    let ftol = T::from(FTOL).unwrap();
    let lambda_step = T::from(LAMBDA_STEP).unwrap();
    let lambda_max = T::from(LAMBDA_MAX).unwrap();

    let mut params = init;
    // A zero starting width makes the model singular; widen it to a tenth
    // of the data range so the kernel overlaps several data points.
    if params.width.abs() <= tiny {
        let range = range_of(x);
        params.width = if range > T::zero() {
            range * T::from(0.1).unwrap()
        } else {
            T::from(0.1).unwrap()
        };
    }

    let mut sse = params.sse(x, y);
    let mut lambda = T::from(LAMBDA_INIT).unwrap();

    for iteration in 0..MAX_ITERATIONS {
        // Accumulate the normal equations: a = J^T J, g = J^T r, with the
        // Jacobian taken with respect to the model (not the residual) sign.
        let mut a = [[T::zero(); 3]; 3];
        let mut g = [T::zero(); 3];

        let half = T::from(0.5).unwrap();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let d = xi - params.center;
            let w2 = params.width * params.width;
            let u = d / params.width;
            let e = (-half * u * u).exp();

            let fi = params.amplitude * e;
            let r = yi - fi;

            // df/d(amplitude), df/d(center), df/d(width)
            let ja = e;
            let jc = fi * d / w2;
            let jw = fi * d * d / (w2 * params.width);
            let grad = [ja, jc, jw];

            for (row, &gr) in grad.iter().enumerate() {
                g[row] = g[row] + gr * r;
                for (col, &gc) in grad.iter().enumerate() {
                    a[row][col] = a[row][col] + gr * gc;
                }
            }
        }

        // Inner loop: find a damping level whose step decreases the SSE.
        let mut stepped = false;
        while lambda <= lambda_max {
            let mut damped = a;
            for (k, row) in damped.iter_mut().enumerate() {
                row[k] = row[k] + lambda * a[k][k].max(tiny);
            }

            let delta = match solve_3x3(&damped, &g) {
                Some(delta) => delta,
                None => {
                    // Singular system at this damping; stiffen and retry.
                    lambda = lambda * lambda_step;
                    continue;
                }
            };

            let trial = GaussianModel {
                amplitude: params.amplitude + delta[0],
                center: params.center + delta[1],
                width: params.width + delta[2],
            };

            if trial.width.abs() <= tiny {
                lambda = lambda * lambda_step;
                continue;
            }

            let trial_sse = trial.sse(x, y);
            if trial_sse.is_finite() && trial_sse <= sse {
                let improvement = sse - trial_sse;
                params = trial;
                let converged = improvement <= ftol * sse.max(tiny);
                sse = trial_sse;
                lambda = (lambda / lambda_step).max(T::from(1e-12).unwrap());
                stepped = true;
                if converged {
                    return Ok(params);
                }
                break;
            }

            lambda = lambda * lambda_step;
        }

        if !stepped {
            // Damping ceiling reached without any acceptable step: the
            // minimizer has stalled away from a solution.
            return Err(ContinuumError::FitDidNotConverge {
                iterations: iteration + 1,
            });
        }
    }

    Err(ContinuumError::FitDidNotConverge {
        iterations: MAX_ITERATIONS,
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Spread of `x` (max - min).
fn range_of<T: Float>(x: &[T]) -> T {
    if x.is_empty() {
        return T::zero();
    }
    let mut lo = x[0];
    let mut hi = x[0];
    for &v in &x[1..] {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    hi - lo
}

/// Solve the 3x3 linear system `m * x = b` by Gaussian elimination with
/// partial pivoting. Returns `None` for a singular system.
fn solve_3x3<T: Float>(m: &[[T; 3]; 3], b: &[T; 3]) -> Option<[T; 3]> {
    let mut aug = [[T::zero(); 4]; 3];
    for i in 0..3 {
        aug[i][..3].copy_from_slice(&m[i]);
        aug[i][3] = b[i];
    }

    for col in 0..3 {
        // Partial pivot
        let mut pivot_row = col;
        let mut pivot_mag = aug[col][col].abs();
        for row in (col + 1)..3 {
            let mag = aug[row][col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        if pivot_mag <= T::from(1e-300).unwrap() {
            return None;
        }
        aug.swap(col, pivot_row);

        for row in (col + 1)..3 {
            let factor = aug[row][col] / aug[col][col];
            for k in col..4 {
                aug[row][k] = aug[row][k] - factor * aug[col][k];
            }
        }
    }

    let mut x = [T::zero(); 3];
    for col in (0..3).rev() {
        let mut sum = aug[col][3];
        for k in (col + 1)..3 {
            sum = sum - aug[col][k] * x[k];
        }
        x[col] = sum / aug[col][col];
    }
    Some(x)
}
