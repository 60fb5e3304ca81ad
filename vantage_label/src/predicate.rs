// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use core::fmt;

use kurbo::Rect;

use crate::shape::LabelShape;

/// Shared predicate callback.
pub type ShapeTest = Arc<dyn Fn(&LabelShape) -> bool + Send + Sync>;

/// A composable veto over placed labels.
///
/// Leaves wrap a callback together with a human-readable description;
/// combinators build boolean expressions over them. A label is drawn only
/// when [`LabelPredicate::evaluate`] returns `true` for its shape.
///
/// `Display` renders the whole expression, e.g.
/// `(width in [0, 80] and not within Rect { .. })`.
#[derive(Clone)]
pub enum LabelPredicate {
    /// A primitive test.
    Leaf {
        /// Callback deciding the outcome.
        test: ShapeTest,
        /// What the callback checks.
        description: Arc<str>,
    },
    /// Both operands must accept.
    And(Box<Self>, Box<Self>),
    /// Either operand must accept.
    Or(Box<Self>, Box<Self>),
    /// Inverts the operand.
    Not(Box<Self>),
}

impl LabelPredicate {
    /// Creates a leaf from a description and a callback.
    pub fn leaf(
        description: impl Into<Arc<str>>,
        test: impl Fn(&LabelShape) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::Leaf {
            test: Arc::new(test),
            description: description.into(),
        }
    }

    /// Accepts every label.
    pub fn always() -> Self {
        Self::leaf("always", |_| true)
    }

    /// Accepts labels whose screen bounding box width lies in `[min, max]`.
    pub fn width_between(min: f64, max: f64) -> Self {
        Self::leaf(format!("width in [{min}, {max}]"), move |s| {
            (min..=max).contains(&s.width())
        })
    }

    /// Accepts labels whose screen bounding box height lies in `[min, max]`.
    pub fn height_between(min: f64, max: f64) -> Self {
        Self::leaf(format!("height in [{min}, {max}]"), move |s| {
            (min..=max).contains(&s.height())
        })
    }

    /// Accepts labels whose screen bounding box lies inside `screen_rect`.
    pub fn within(screen_rect: Rect) -> Self {
        Self::leaf(format!("within {screen_rect:?}"), move |s| {
            let b = s.bounding_box();
            b.x0 >= screen_rect.x0
                && b.y0 >= screen_rect.y0
                && b.x1 <= screen_rect.x1
                && b.y1 <= screen_rect.y1
        })
    }

    /// Accepts when both `self` and `other` accept.
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Accepts when either `self` or `other` accepts.
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Runs the expression against a placed label.
    ///
    /// `And` and `Or` short-circuit left to right.
    pub fn evaluate(&self, shape: &LabelShape) -> bool {
        match self {
            Self::Leaf { test, .. } => test(shape),
            Self::And(a, b) => a.evaluate(shape) && b.evaluate(shape),
            Self::Or(a, b) => a.evaluate(shape) || b.evaluate(shape),
            Self::Not(a) => !a.evaluate(shape),
        }
    }
}

impl core::ops::Not for LabelPredicate {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl Default for LabelPredicate {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Display for LabelPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { description, .. } => f.write_str(description),
            Self::And(a, b) => write!(f, "({a} and {b})"),
            Self::Or(a, b) => write!(f, "({a} or {b})"),
            Self::Not(a) => write!(f, "not {a}"),
        }
    }
}

impl fmt::Debug for LabelPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { description, .. } => f
                .debug_struct("Leaf")
                .field("description", description)
                .finish_non_exhaustive(),
            Self::And(a, b) => f.debug_tuple("And").field(a).field(b).finish(),
            Self::Or(a, b) => f.debug_tuple("Or").field(a).field(b).finish(),
            Self::Not(a) => f.debug_tuple("Not").field(a).finish(),
        }
    }
}
