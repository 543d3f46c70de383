//! [`PlanarKernel`]: Euclidean-plane geometry on `geo`.

use carta_core::GeometryKernel;
use geo::{
    BooleanOps, BoundingRect, Centroid, EuclideanDistance, EuclideanLength, LineString,
    MultiLineString, MultiPolygon, Point, Relate,
};

use crate::segment::{boundary_segments, collinear_overlap, line_segments};

/// Geometry kernel for projected (planar) coordinates.
///
/// Topology predicates, centroids, distances and unions come from `geo`.
/// Shared border lengths are summed from collinear overlaps of boundary
/// segments. `tolerance` bounds how far a vertex may sit off a line and
/// still count as on it, and is the shortest overlap that counts as shared
/// border.
///
/// # Examples
///
/// ```
/// use carta_core::GeometryKernel;
/// use carta_geom::PlanarKernel;
/// use geo::{polygon, MultiPolygon};
///
/// let left = MultiPolygon::new(vec![polygon![
///     (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0),
/// ]]);
/// let right = MultiPolygon::new(vec![polygon![
///     (x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0),
/// ]]);
///
/// let kernel = PlanarKernel::default();
/// assert!(kernel.touches(&left, &right));
/// assert!((kernel.shared_boundary_length(&left, &right) - 1.0).abs() < 1e-12);
/// assert!((kernel.perimeter(&left) - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarKernel {
    tolerance: f64,
}

impl PlanarKernel {
    /// Default collinearity tolerance, in coordinate units.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Kernel with a custom collinearity tolerance.
    ///
    /// Non-finite or negative tolerances fall back to
    /// [`DEFAULT_TOLERANCE`](Self::DEFAULT_TOLERANCE).
    pub fn with_tolerance(tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance >= 0.0 {
            tolerance
        } else {
            Self::DEFAULT_TOLERANCE
        };
        Self { tolerance }
    }

    /// Collinearity tolerance in use.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for PlanarKernel {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl GeometryKernel for PlanarKernel {
    fn perimeter(&self, geometry: &MultiPolygon<f64>) -> f64 {
        geometry
            .0
            .iter()
            .map(|poly| {
                poly.exterior().euclidean_length()
                    + poly
                        .interiors()
                        .iter()
                        .map(|ring| ring.euclidean_length())
                        .sum::<f64>()
            })
            .sum()
    }

    fn centroid(&self, geometry: &MultiPolygon<f64>) -> Option<Point<f64>> {
        geometry.centroid()
    }

    fn may_touch(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        match (a.bounding_rect(), b.bounding_rect()) {
            (Some(ra), Some(rb)) => {
                let tol = self.tolerance;
                ra.min().x <= rb.max().x + tol
                    && rb.min().x <= ra.max().x + tol
                    && ra.min().y <= rb.max().y + tol
                    && rb.min().y <= ra.max().y + tol
            }
            _ => false,
        }
    }

    fn touches(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        a.relate(b).is_touches()
    }

    fn shared_boundary_length(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        let theirs: Vec<_> = boundary_segments(b).collect();
        boundary_segments(a)
            .map(|mine| {
                theirs
                    .iter()
                    .map(|&other| collinear_overlap(mine, other, self.tolerance))
                    .sum::<f64>()
            })
            .sum()
    }

    fn distance(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        a.euclidean_distance(b)
    }

    fn outer_boundary(&self, geometries: &[&MultiPolygon<f64>]) -> MultiLineString<f64> {
        let dissolved = geometries
            .iter()
            .fold(MultiPolygon::new(Vec::new()), |acc, g| acc.union(*g));
        let rings: Vec<LineString<f64>> = dissolved
            .0
            .into_iter()
            .map(|poly| poly.into_inner().0)
            .collect();
        MultiLineString::new(rings)
    }

    fn boundary_overlap(&self, geometry: &MultiPolygon<f64>, lines: &MultiLineString<f64>) -> f64 {
        let coast: Vec<_> = line_segments(lines).collect();
        boundary_segments(geometry)
            .map(|mine| {
                coast
                    .iter()
                    .map(|&other| collinear_overlap(mine, other, self.tolerance))
                    .sum::<f64>()
            })
            .sum()
    }
}
