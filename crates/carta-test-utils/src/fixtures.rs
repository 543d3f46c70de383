//! Region fixtures, mostly axis-aligned unit squares.
//!
//! Every fixture stores its id under [`ID_FIELD`] and its name under
//! [`NAME_FIELD`].

use carta_core::RegionRecord;
use geo_types::{polygon, LineString, Polygon};

/// Property holding fixture ids.
pub const ID_FIELD: &str = "code";

/// Property holding fixture names.
pub const NAME_FIELD: &str = "name";

/// Rectangle `[x0, x1] × [y0, y1]`, wound counter-clockwise.
pub fn rect_record(id: &str, name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> RegionRecord {
    RegionRecord::new(polygon![(x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1)])
        .with_property(ID_FIELD, id)
        .with_property(NAME_FIELD, name)
}

/// Unit square with lower-left corner `(x, y)`.
pub fn unit_square(id: &str, name: &str, x: f64, y: f64) -> RegionRecord {
    rect_record(id, name, x, y, x + 1.0, y + 1.0)
}

/// Four unit squares in a 2×2 block, ordered `sw`, `se`, `nw`, `ne`.
///
/// Each square shares a full edge with two others and only a corner with
/// the diagonally opposite one.
pub fn block_2x2() -> Vec<RegionRecord> {
    vec![
        unit_square("sw", "South West", 0.0, 0.0),
        unit_square("se", "South East", 1.0, 0.0),
        unit_square("nw", "North West", 0.0, 1.0),
        unit_square("ne", "North East", 1.0, 1.0),
    ]
}

/// [`block_2x2`] turned by `degrees` counter-clockwise about its centre.
///
/// Shared corners are rotated from the same input coordinates, so
/// neighbouring squares still meet exactly; only the edge directions pick
/// up rounding.
pub fn rotated_block_2x2(degrees: f64) -> Vec<RegionRecord> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let turn = |x: f64, y: f64| {
        let (dx, dy) = (x - 1.0, y - 1.0);
        (1.0 + dx * cos - dy * sin, 1.0 + dx * sin + dy * cos)
    };
    [
        ("sw", "South West", 0.0, 0.0),
        ("se", "South East", 1.0, 0.0),
        ("nw", "North West", 0.0, 1.0),
        ("ne", "North East", 1.0, 1.0),
    ]
    .into_iter()
    .map(|(id, name, x, y)| {
        let corners = [(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)];
        let ring: Vec<(f64, f64)> = corners.into_iter().map(|(cx, cy)| turn(cx, cy)).collect();
        RegionRecord::new(Polygon::new(LineString::from(ring), Vec::new()))
            .with_property(ID_FIELD, id)
            .with_property(NAME_FIELD, name)
    })
    .collect()
}

/// `n` unit squares in a row along the x axis, ids `s0..s{n-1}`.
pub fn strip(n: usize) -> Vec<RegionRecord> {
    (0..n)
        .map(|i| unit_square(&format!("s{i}"), &format!("Strip {i}"), i as f64, 0.0))
        .collect()
}

/// A single unit square with no neighbours.
pub fn isolated() -> Vec<RegionRecord> {
    vec![unit_square("solo", "Solo", 0.0, 0.0)]
}
