//! Region layouts for benchmarking the Carta relationship engine.
//!
//! - [`reference_profile`]: 16x16 tiling of unit squares (256 regions)
//! - [`stress_profile`]: 40x40 tiling (1600 regions)
//! - [`scattered_profile`]: non-touching squares at deterministic
//!   pseudo-random lattice slots, for distance ranking

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use carta_core::RegionRecord;
use geo_types::polygon;

/// Property holding benchmark region ids.
pub const ID_FIELD: &str = "code";

/// Property holding benchmark region names.
pub const NAME_FIELD: &str = "name";

fn square(col: usize, row: usize, size: f64, spacing: f64) -> RegionRecord {
    let (x, y) = (col as f64 * spacing, row as f64 * spacing);
    RegionRecord::new(polygon![
        (x: x, y: y),
        (x: x + size, y: y),
        (x: x + size, y: y + size),
        (x: x, y: y + size),
    ])
    .with_property(ID_FIELD, format!("r{col}_{row}"))
    .with_property(NAME_FIELD, format!("Region {col}/{row}"))
}

/// `side × side` unit squares tiling the plane without gaps.
pub fn tiled(side: usize) -> Vec<RegionRecord> {
    (0..side)
        .flat_map(|row| (0..side).map(move |col| square(col, row, 1.0, 1.0)))
        .collect()
}

/// Reference profile: 16x16 tiling.
pub fn reference_profile() -> Vec<RegionRecord> {
    tiled(16)
}

/// Stress profile: 40x40 tiling.
pub fn stress_profile() -> Vec<RegionRecord> {
    tiled(40)
}

/// `n` half-unit squares at distinct slots of an `n × n` lattice with
/// unit spacing, chosen by a simple hash of `seed`. No two touch.
pub fn scattered_profile(n: usize, seed: u64) -> Vec<RegionRecord> {
    let slots = (n * n).max(1) as u64;
    let mut occupied = HashSet::with_capacity(n);
    let mut records = Vec::with_capacity(n);
    for i in 0..n as u64 {
        let mut slot = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % slots;
        while !occupied.insert(slot) {
            slot = (slot + 1) % slots;
        }
        let (col, row) = ((slot % n as u64) as usize, (slot / n as u64) as usize);
        records.push(square(col, row, 0.5, 1.0));
    }
    records
}
