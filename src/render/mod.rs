//! Data handed to an external renderer.
//!
//! The crate draws nothing. A renderer receives a [`Scene`]: the curve
//! parameters, an optional list of points to highlight, and an optional
//! [`OperationLine`] describing a group operation (two inputs and their
//! sum) to overlay on the plot.

use serde::Serialize;

use crate::config::CurveParameters;
use crate::curve::{Curve, Point};
use crate::error::Result;
use crate::field::Ring;

/// Two input points of the group law and its result.
///
/// For an addition the renderer draws the chord through `first` and
/// `second`; for a doubling (`first == second`) the tangent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationLine<E> {
    /// Left operand.
    pub first: Point<E>,
    /// Right operand.
    pub second: Point<E>,
    /// `first + second`.
    pub result: Point<E>,
}

impl<E: Copy + PartialEq + std::fmt::Debug> OperationLine<E> {
    /// Computes `first + second` on `curve` and records the operation.
    pub fn addition<R>(curve: &Curve<R>, first: Point<E>, second: Point<E>) -> Result<Self>
    where
        R: Ring<Element = E>,
    {
        let result = curve.add(&first, &second)?;

        Ok(Self {
            first,
            second,
            result,
        })
    }

    /// Computes `2·point` on `curve` and records the operation.
    pub fn doubling<R>(curve: &Curve<R>, point: Point<E>) -> Result<Self>
    where
        R: Ring<Element = E>,
    {
        Self::addition(curve, point, point)
    }
}

/// Everything a renderer needs to draw one view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene<E> {
    /// Curve to draw.
    pub parameters: CurveParameters,
    /// Points to emphasize.
    pub highlights: Vec<Point<E>>,
    /// Group operation to overlay.
    pub operation: Option<OperationLine<E>>,
}

impl<E> Scene<E> {
    /// Creates a scene with no highlights and no operation.
    pub fn new(parameters: CurveParameters) -> Self {
        Self {
            parameters,
            highlights: Vec::new(),
            operation: None,
        }
    }

    /// Adds a point to highlight.
    pub fn highlight(mut self, point: Point<E>) -> Self {
        self.highlights.push(point);
        self
    }

    /// Adds several points to highlight.
    pub fn highlight_all<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Point<E>>,
    {
        self.highlights.extend(points);
        self
    }

    /// Sets the operation overlay.
    pub fn with_operation(mut self, operation: OperationLine<E>) -> Self {
        self.operation = Some(operation);
        self
    }
}
