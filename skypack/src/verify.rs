//! Checks for packing results, used to validate output that came from
//! somewhere other than a packer in this process.

use thiserror::Error;

use crate::{geometry::Rect, id::Id, types::OutputItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{id} at {rect:?} extends past the {}x{} bin", .bin_size.0, .bin_size.1)]
    OutOfBounds {
        id: Id,
        rect: Rect,
        bin_size: (u32, u32),
    },

    #[error("{first} at {first_rect:?} overlaps {second} at {second_rect:?}")]
    Overlap {
        first: Id,
        first_rect: Rect,
        second: Id,
        second_rect: Rect,
    },
}

/// Verifies that all placed items lie inside a bin of the given size and that
/// no two of them overlap. Unplaced items are ignored.
pub fn verify(bin_size: (u32, u32), items: &[OutputItem]) -> Result<(), Violation> {
    let bin = Rect::new((0, 0), bin_size);

    let mut placed: Vec<(Id, Rect)> = Vec::new();
    for item in items {
        if let Some(rect) = item.rect() {
            if !bin.contains(&rect) {
                return Err(Violation::OutOfBounds {
                    id: item.id(),
                    rect,
                    bin_size,
                });
            }
            placed.push((item.id(), rect));
        }
    }

    // Sweep along x so each rect is only compared with the ones that start
    // before it ends.
    placed.sort_by_key(|(_, rect)| rect.pos.0);

    for (i, (first, first_rect)) in placed.iter().enumerate() {
        let first_right = first_rect.max().0;

        for (second, second_rect) in &placed[i + 1..] {
            if u64::from(second_rect.pos.0) >= first_right {
                break;
            }

            if first_rect.intersects(second_rect) {
                return Err(Violation::Overlap {
                    first: *first,
                    first_rect: *first_rect,
                    second: *second,
                    second_rect: *second_rect,
                });
            }
        }
    }

    Ok(())
}
