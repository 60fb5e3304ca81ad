// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors produced by tick planning.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AxisError {
    /// A numeric input was non-finite or outside the domain of the operation.
    #[error("invalid argument `{what}`: {value}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl AxisError {
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        Self::InvalidArgument { what, value }
    }
}
