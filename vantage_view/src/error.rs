// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vantage_axis::AxisError;

/// Errors returned by [`crate::Viewport`] mutators.
///
/// A failed operation leaves the viewport exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// A numeric input was non-finite or outside the operation's domain.
    #[error("invalid argument `{what}`: {value}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The operation would have produced a non-invertible transform.
    #[error("operation would produce a non-invertible view transform")]
    DegenerateTransform,
}

impl From<AxisError> for ViewError {
    fn from(err: AxisError) -> Self {
        match err {
            AxisError::InvalidArgument { what, value } => Self::InvalidArgument { what, value },
        }
    }
}
