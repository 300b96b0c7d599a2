use std::{borrow::Borrow, cmp::Reverse, convert::TryFrom};

use crate::{
    context::{validate_bin_size, PackContext},
    error::Error,
    search::Heuristic,
    types::{InputItem, OutputItem, PackOutput},
};

/// Packs rectangles into a single fixed-size bin using a skyline.
///
/// Rectangles are placed tallest first. Ties are broken by width, widest
/// first, and then by ID, smallest first. This order is part of the packing
/// policy: changing it changes the output for the same input.
#[derive(Debug, Clone, Default)]
pub struct SkylinePacker {
    heuristic: Heuristic,
}

impl SkylinePacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heuristic(self, heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    /// Packs the given items into a bin of size `bin_size`.
    ///
    /// Accepts anything that can turn into an iterator of `InputItem` or
    /// `&InputItem`. Items that don't fit are reported as unplaced. The bin
    /// and every item must have a nonzero width and height, otherwise nothing
    /// is packed and an error is returned.
    pub fn pack<I, T>(&self, bin_size: (u32, u32), items: I) -> Result<PackOutput, Error>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<InputItem>,
    {
        validate_bin_size(bin_size)?;

        let items = items.into_iter();
        let mut inputs: Vec<InputItem> = Vec::new();
        inputs.try_reserve(items.size_hint().0)?;
        inputs.extend(items.map(|item| *item.borrow()));

        for (index, input) in inputs.iter().enumerate() {
            if input.size.0 == 0 || input.size.1 == 0 {
                return Err(Error::InvalidItemSize {
                    index,
                    width: i64::from(input.size.0),
                    height: i64::from(input.size.1),
                });
            }
        }

        let num_items = inputs.len();
        log::trace!(
            "Packing {} items into a {}x{} bin",
            num_items,
            bin_size.0,
            bin_size.1
        );

        let mut order: Vec<usize> = Vec::new();
        order.try_reserve_exact(num_items)?;
        order.extend(0..num_items);
        order.sort_by_key(|&index| {
            let input = &inputs[index];
            (Reverse(input.size.1), Reverse(input.size.0), input.id)
        });

        let mut positions: Vec<Option<(u32, u32)>> = Vec::new();
        positions.try_reserve_exact(num_items)?;
        positions.resize(num_items, None);

        let mut context =
            PackContext::with_capacity(bin_size, num_items)?.with_heuristic(self.heuristic);

        for &index in &order {
            let input = &inputs[index];
            let position = context.insert(input.size)?;

            match position {
                Some(pos) => log::trace!(
                    "Item {} ({}x{}) placed at {:?}",
                    input.id,
                    input.size.0,
                    input.size.1,
                    pos
                ),
                None => log::trace!(
                    "Item {} ({}x{}) did not fit",
                    input.id,
                    input.size.0,
                    input.size.1
                ),
            }

            positions[index] = position;
        }

        context.close();

        let mut output_items = Vec::new();
        output_items.try_reserve_exact(num_items)?;
        output_items.extend(
            inputs
                .iter()
                .zip(positions)
                .map(|(input, position)| OutputItem {
                    id: input.id,
                    size: input.size,
                    position,
                }),
        );

        let output = PackOutput {
            bin_size,
            items: output_items,
        };

        log::debug!(
            "Finished packing {} items: {} placed, skyline reached {} of {}",
            num_items,
            output.placed().count(),
            context.skyline().max_height(),
            bin_size.1
        );

        Ok(output)
    }
}

/// Packs rectangles given as parallel lists of widths and heights. The ID of
/// each rectangle is its index in the lists.
///
/// Unlike [`SkylinePacker::pack`], this takes signed values, so that callers
/// holding untyped integers can hand them over as-is and get negative values
/// reported as invalid arguments.
pub fn pack_dimensions(
    bin_size: (i64, i64),
    widths: &[i64],
    heights: &[i64],
    heuristic: Heuristic,
) -> Result<PackOutput, Error> {
    if widths.len() != heights.len() {
        return Err(Error::MismatchedLengths {
            widths: widths.len(),
            heights: heights.len(),
        });
    }

    let (bin_width, bin_height) = bin_size;
    if bin_width <= 0 || bin_height <= 0 {
        return Err(Error::InvalidBinSize {
            width: bin_width,
            height: bin_height,
        });
    }
    let bin_size = (to_dimension(bin_width)?, to_dimension(bin_height)?);

    let mut items = Vec::new();
    items.try_reserve_exact(widths.len())?;

    for (index, (&width, &height)) in widths.iter().zip(heights).enumerate() {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidItemSize {
                index,
                width,
                height,
            });
        }

        let size = (to_dimension(width)?, to_dimension(height)?);
        items.push(InputItem::new(index, size));
    }

    SkylinePacker::new().heuristic(heuristic).pack(bin_size, &items)
}

fn to_dimension(value: i64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::OutOfRange { value })
}
