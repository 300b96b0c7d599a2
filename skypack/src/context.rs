use crate::{
    error::Error,
    search::{self, Heuristic, Placement},
    skyline::{segment_capacity, Skyline},
};

/// Whether a [`PackContext`] still accepts placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Open,
    Closed,
}

/// The mutable state of a single packing run: one bin and its skyline.
///
/// A context starts out `Open`. Once closed, it rejects further placements
/// until it is [`reset`][PackContext::reset].
#[derive(Debug, Clone)]
pub struct PackContext {
    bin_size: (u32, u32),
    heuristic: Heuristic,
    skyline: Skyline,
    state: ContextState,
}

impl PackContext {
    pub fn new(bin_size: (u32, u32)) -> Result<Self, Error> {
        Self::with_capacity(bin_size, 0)
    }

    /// Creates a context with storage for placing up to `item_count`
    /// rectangles without reallocating.
    pub fn with_capacity(bin_size: (u32, u32), item_count: usize) -> Result<Self, Error> {
        validate_bin_size(bin_size)?;

        let skyline = Skyline::new(bin_size.0, segment_capacity(bin_size.0, item_count))?;

        Ok(Self {
            bin_size,
            heuristic: Heuristic::default(),
            skyline,
            state: ContextState::Open,
        })
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Empties the bin, possibly resizing it, and reopens the context with
    /// room for placing up to `item_count` rectangles without reallocating.
    pub fn reset(&mut self, bin_size: (u32, u32), item_count: usize) -> Result<(), Error> {
        validate_bin_size(bin_size)?;

        self.skyline
            .reset(bin_size.0, segment_capacity(bin_size.0, item_count))?;
        self.bin_size = bin_size;
        self.state = ContextState::Open;

        Ok(())
    }

    #[inline]
    pub fn bin_size(&self) -> (u32, u32) {
        self.bin_size
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn skyline(&self) -> &Skyline {
        &self.skyline
    }

    #[inline]
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Finds where a rectangle of the given size would go, without placing it.
    pub fn find_position(&self, size: (u32, u32)) -> Option<Placement> {
        search::find_position(&self.skyline, size, self.bin_size.1, self.heuristic)
    }

    /// Places a rectangle of the given size, returning its position, or
    /// `None` if it doesn't fit anywhere in the bin.
    pub fn insert(&mut self, size: (u32, u32)) -> Result<Option<(u32, u32)>, Error> {
        if self.state == ContextState::Closed {
            return Err(Error::ContextClosed);
        }

        let placement = match self.find_position(size) {
            Some(placement) => placement,
            None => return Ok(None),
        };

        let (width, height) = size;
        self.skyline
            .raise(placement.first, placement.x, width, placement.y + height);

        Ok(Some((placement.x, placement.y)))
    }

    pub fn close(&mut self) {
        self.state = ContextState::Closed;
    }
}

pub(crate) fn validate_bin_size(bin_size: (u32, u32)) -> Result<(), Error> {
    if bin_size.0 == 0 || bin_size.1 == 0 {
        return Err(Error::InvalidBinSize {
            width: i64::from(bin_size.0),
            height: i64::from(bin_size.1),
        });
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_sized_bin() {
        let err = PackContext::new((0, 10)).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = PackContext::new((10, 0)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn insert_then_close() {
        let mut context = PackContext::new((10, 10)).unwrap();
        assert_eq!(context.state(), ContextState::Open);

        assert_eq!(context.insert((4, 4)).unwrap(), Some((0, 0)));
        assert_eq!(context.insert((4, 4)).unwrap(), Some((4, 0)));
        assert_eq!(context.insert((4, 4)).unwrap(), Some((0, 4)));
        assert_eq!(context.insert((11, 1)).unwrap(), None);

        context.close();
        assert_eq!(context.state(), ContextState::Closed);
        match context.insert((1, 1)) {
            Err(Error::ContextClosed) => {}
            other => panic!("expected ContextClosed, got {:?}", other),
        }
    }

    #[test]
    fn find_position_leaves_context_untouched() {
        let context = PackContext::new((10, 10)).unwrap();
        let placement = context.find_position((5, 5)).unwrap();

        assert_eq!((placement.x, placement.y), (0, 0));
        assert_eq!(context.skyline().max_height(), 0);
    }

    #[test]
    fn reset_reopens() {
        let mut context = PackContext::with_capacity((10, 10), 4).unwrap();
        context.insert((10, 10)).unwrap();
        assert_eq!(context.insert((1, 1)).unwrap(), None);
        context.close();

        context.reset((20, 5), 4).unwrap();
        assert_eq!(context.state(), ContextState::Open);
        assert_eq!(context.bin_size(), (20, 5));
        assert_eq!(context.skyline().width(), 20);
        assert_eq!(context.insert((1, 1)).unwrap(), Some((0, 0)));
    }

    #[test]
    fn reset_sizes_storage_like_a_new_context() {
        let mut context = PackContext::with_capacity((4, 4), 100).unwrap();
        assert!(context.skyline().capacity() >= 4);

        context.reset((256, 256), 100).unwrap();
        assert!(context.skyline().capacity() >= segment_capacity(256, 100));
        assert_eq!(segment_capacity(256, 100), 201);
    }

    #[test]
    fn reset_rejects_zero_size_and_stays_closed() {
        let mut context = PackContext::new((10, 10)).unwrap();
        context.close();

        assert!(context.reset((0, 0), 1).is_err());
        assert_eq!(context.state(), ContextState::Closed);
    }
}
