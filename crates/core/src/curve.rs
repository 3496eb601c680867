//! Piecewise-linear difficulty curve over ordered control points.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub t: f64,
    pub value: f64,
}

/// Maps normalized traversal distance to a target difficulty. The mapping is
/// not required to be monotonic; callers shape it freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct DifficultyCurve {
    points: Vec<CurvePoint>,
}

impl DifficultyCurve {
    /// Control points are sorted by `t`; supply order does not matter.
    pub fn from_points(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { points }
    }

    /// Straight ramp from (0, 0) to (1, 1).
    pub fn identity() -> Self {
        Self::from_points(vec![
            CurvePoint { t: 0.0, value: 0.0 },
            CurvePoint { t: 1.0, value: 1.0 },
        ])
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Evaluates the curve at `t`, holding the end values outside the covered
    /// range. An empty curve behaves as the identity ramp.
    pub fn evaluate(&self, t: f64) -> f64 {
        let Some(first) = self.points.first() else {
            return t;
        };
        if t <= first.t {
            return first.value;
        }
        for pair in self.points.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            if t <= right.t {
                let span = right.t - left.t;
                if span <= f64::EPSILON {
                    return right.value;
                }
                let blend = (t - left.t) / span;
                return left.value + (right.value - left.value) * blend;
            }
        }
        self.points[self.points.len() - 1].value
    }
}

impl From<Vec<CurvePoint>> for DifficultyCurve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<DifficultyCurve> for Vec<CurvePoint> {
    fn from(curve: DifficultyCurve) -> Self {
        curve.points
    }
}
