//! Degree-2 polynomial least-squares fit.
//!
//! The basis is shifted to a caller-supplied origin before building the
//! Vandermonde matrix. Shifting spans the same polynomial space, so the
//! fitted curve is identical to an unshifted fit while keeping the design
//! matrix well-conditioned for f64 (raw years near 2000 put x² at ~4e6).

use nalgebra::{DMatrix, DVector};

use crate::ModelError;

/// A fitted quadratic `y = c0 + c1·(x − origin) + c2·(x − origin)²`.
#[derive(Debug, Clone)]
pub struct QuadraticModel {
    origin: f64,
    coeffs: [f64; 3],
}

impl QuadraticModel {
    /// Least-squares fit over paired samples. Requires at least 3 points.
    pub fn fit(xs: &[f64], ys: &[f64], origin: f64) -> Result<Self, ModelError> {
        if xs.len() != ys.len() || xs.len() < 3 {
            return Err(ModelError::InsufficientData(xs.len()));
        }

        let design = DMatrix::from_fn(xs.len(), 3, |row, col| {
            let t = xs[row] - origin;
            match col {
                0 => 1.0,
                1 => t,
                _ => t * t,
            }
        });
        let targets = DVector::from_column_slice(ys);

        let svd = design.svd(true, true);
        let solution = svd
            .solve(&targets, f64::EPSILON)
            .map_err(|e| ModelError::Fit(e.to_string()))?;

        Ok(Self {
            origin,
            coeffs: [solution[0], solution[1], solution[2]],
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        let t = x - self.origin;
        self.coeffs[0] + self.coeffs[1] * t + self.coeffs[2] * t * t
    }
}
