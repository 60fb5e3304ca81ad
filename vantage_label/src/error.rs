// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors produced while configuring a label placement.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LabelError {
    /// A numeric input was non-finite or outside its allowed range.
    #[error("invalid argument `{what}`: {value}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl LabelError {
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        Self::InvalidArgument { what, value }
    }
}
