//! Polyomino hull footprints and their orientation variants.

use alloc::vec::Vec;

/// A hull footprint: cell offsets relative to an anchor, normalized so the
/// minimum dx and minimum dy are both zero and the offsets are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    offsets: Vec<(i32, i32)>,
}

impl Shape {
    /// Build a normalized shape from raw offsets.
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Self {
        Self::normalize(offsets.to_vec())
    }

    /// The single-cell hull.
    pub fn single() -> Self {
        Self::normalize([(0, 0)].to_vec())
    }

    /// Normalized cell offsets.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Number of cells in the footprint.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The footprint rotated 90° clockwise about the local origin,
    /// re-normalized. Applying this four times yields the original shape.
    pub fn rotated(&self) -> Self {
        Self::normalize(self.offsets.iter().map(|&(dx, dy)| (-dy, dx)).collect())
    }

    /// The footprint flipped horizontally, re-normalized.
    pub fn mirrored(&self) -> Self {
        Self::normalize(self.offsets.iter().map(|&(dx, dy)| (-dx, dy)).collect())
    }

    /// Every distinct orientation of the footprint: the four rotations of
    /// the shape and of its mirror image. Symmetric hulls yield fewer than
    /// eight variants.
    pub fn orientations(&self) -> Vec<Shape> {
        let mut variants: Vec<Shape> = Vec::with_capacity(8);
        for base in [self.clone(), self.mirrored()] {
            let mut current = base;
            for _ in 0..4 {
                let next = current.rotated();
                if !variants.contains(&current) {
                    variants.push(current);
                }
                current = next;
            }
        }
        variants
    }

    fn normalize(mut offsets: Vec<(i32, i32)>) -> Self {
        let min_dx = offsets.iter().map(|o| o.0).min().unwrap_or(0);
        let min_dy = offsets.iter().map(|o| o.1).min().unwrap_or(0);
        for o in offsets.iter_mut() {
            o.0 -= min_dx;
            o.1 -= min_dy;
        }
        offsets.sort_unstable();
        Shape { offsets }
    }
}
