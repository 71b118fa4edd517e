use alloc::collections::BTreeMap;

use crate::shape::Shape;

/// Candidate anchors tried per ship instance before placement gives up.
pub const ATTEMPT_BUDGET: usize = 2000;

/// Hull catalog: footprint offsets for ship ids 1..=NUM_SHAPES.
pub const NUM_SHAPES: usize = 7;
pub const SHAPES: [&[(i32, i32)]; NUM_SHAPES] = [
    &[(0, 0), (0, 1)],                                 // 2-cell line
    &[(0, 0), (0, 1), (0, 2)],                         // 3-cell line
    &[(0, 0), (0, 1), (0, 2), (0, 3)],                 // 4-cell line
    &[(0, 0), (0, 1), (0, 2), (1, 1)],                 // T
    &[(0, 0), (1, 0), (2, 0), (2, 1)],                 // L
    &[(0, 0), (0, 1), (1, 1), (1, 2)],                 // S
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 1), (1, 2)], // 6-cell hull
];

/// Footprint for `ship_id`. Ids outside the catalog fall back to a
/// single-cell hull.
pub fn shape_for(ship_id: u8) -> Shape {
    (ship_id as usize)
        .checked_sub(1)
        .and_then(|i| SHAPES.get(i))
        .map(|offsets| Shape::from_offsets(offsets))
        .unwrap_or_else(Shape::single)
}

/// Fleet used by the sim binary: two 2-cell hulls plus one of every other
/// catalog hull.
pub fn default_fleet() -> BTreeMap<u8, usize> {
    let mut fleet = BTreeMap::new();
    fleet.insert(1, 2);
    for id in 2..=NUM_SHAPES as u8 {
        fleet.insert(id, 1);
    }
    fleet
}

/// Collapse a ship-id census into the size census the targeting side keys
/// sinks on. Distinct hulls of equal size share one entry.
pub fn size_census(fleet: &BTreeMap<u8, usize>) -> BTreeMap<usize, usize> {
    let mut sizes = BTreeMap::new();
    for (&id, &count) in fleet {
        *sizes.entry(shape_for(id).len()).or_insert(0) += count;
    }
    sizes
}
