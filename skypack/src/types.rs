use crate::{geometry::Rect, id::Id, verify};

/// An input to the rectangle packing routines.
///
/// `InputItem` is just a 2D size and a caller-chosen identifier. Results come
/// back in the same order the inputs were given in, so the identifier is only
/// needed when the caller wants to correlate results some other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputItem {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
}

impl InputItem {
    #[inline]
    pub fn new<I: Into<Id>>(id: I, size: (u32, u32)) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }
}

/// The outcome of packing one `InputItem`.
///
/// `OutputItem` corresponds 1:1 to `InputItem` objects that were passed into
/// the packing function. It echoes the ID and size from the input. Items that
/// didn't fit in the bin have no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputItem {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
    pub(crate) position: Option<(u32, u32)>,
}

impl OutputItem {
    /// Builds a result by hand, like when reading back results that were
    /// stored elsewhere.
    #[inline]
    pub fn new<I: Into<Id>>(id: I, size: (u32, u32), position: Option<(u32, u32)>) -> Self {
        Self {
            id: id.into(),
            size,
            position,
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    #[inline]
    pub fn position(&self) -> Option<(u32, u32)> {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.position.map(|pos| Rect::new(pos, self.size))
    }
}

/// The results from running a packing function.
///
/// Contains exactly one `OutputItem` per input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub(crate) bin_size: (u32, u32),
    pub(crate) items: Vec<OutputItem>,
}

impl PackOutput {
    #[inline]
    pub fn bin_size(&self) -> (u32, u32) {
        self.bin_size
    }

    #[inline]
    pub fn items(&self) -> &[OutputItem] {
        &self.items
    }

    pub fn placed(&self) -> impl Iterator<Item = &OutputItem> {
        self.items.iter().filter(|item| item.is_placed())
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &OutputItem> {
        self.items.iter().filter(|item| !item.is_placed())
    }

    pub fn placed_area(&self) -> u64 {
        self.placed()
            .filter_map(OutputItem::rect)
            .map(|rect| rect.area())
            .sum()
    }

    /// Fraction of the bin's area covered by placed rectangles.
    pub fn occupancy(&self) -> f64 {
        let bin_area = u64::from(self.bin_size.0) * u64::from(self.bin_size.1);
        if bin_area == 0 {
            return 0.0;
        }

        self.placed_area() as f64 / bin_area as f64
    }

    /// Checks that every placed item is inside the bin and that no two placed
    /// items overlap.
    pub fn verify(&self) -> Result<(), verify::Violation> {
        verify::verify(self.bin_size, &self.items)
    }

    pub fn into_items(self) -> Vec<OutputItem> {
        self.items
    }
}
