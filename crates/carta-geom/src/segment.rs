//! Segment arithmetic for measuring shared linework.

use geo::{Coord, Line, MultiLineString, MultiPolygon};

/// Every boundary segment of a multipolygon, exterior and interior rings.
pub fn boundary_segments(geometry: &MultiPolygon<f64>) -> impl Iterator<Item = Line<f64>> + '_ {
    geometry.0.iter().flat_map(|poly| {
        std::iter::once(poly.exterior())
            .chain(poly.interiors())
            .flat_map(|ring| ring.lines())
    })
}

/// Every segment of a multilinestring.
pub fn line_segments(lines: &MultiLineString<f64>) -> impl Iterator<Item = Line<f64>> + '_ {
    lines.0.iter().flat_map(|ls| ls.lines())
}

fn dot(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Length of the stretch that `a` and `b` have in common when they lie on
/// the same line.
///
/// Both endpoints of `b` must be within `tolerance` of the infinite line
/// through `a`; otherwise the segments are not collinear and the overlap
/// is zero. Degenerate (shorter than `tolerance`) segments never overlap,
/// and neither do segments whose common stretch is no longer than
/// `tolerance`: collinear edges that only meet end to end measure zero
/// even when rounding leaves a sliver between them.
pub fn collinear_overlap(a: Line<f64>, b: Line<f64>, tolerance: f64) -> f64 {
    let along = a.delta();
    let len = along.x.hypot(along.y);
    if len <= tolerance {
        return 0.0;
    }
    let unit = Coord {
        x: along.x / len,
        y: along.y / len,
    };

    let off_start = b.start - a.start;
    let off_end = b.end - a.start;
    if cross(unit, off_start).abs() > tolerance || cross(unit, off_end).abs() > tolerance {
        return 0.0;
    }

    let t0 = dot(unit, off_start);
    let t1 = dot(unit, off_end);
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(len);
    let overlap = hi - lo;
    if overlap <= tolerance {
        0.0
    } else {
        overlap
    }
}
