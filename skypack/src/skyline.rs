use std::fmt;

use crate::error::Error;

/// A horizontal run of the skyline: from `x` to `x + width`, everything below
/// `y` is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

impl Segment {
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }
}

/// The part of the skyline underneath a horizontal span, as computed by
/// [`Skyline::span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The height a rectangle covering the span would rest at: the tallest
    /// segment it overlaps.
    pub y: u32,

    /// Index of the first segment overlapped by the span.
    pub first: usize,

    /// Index of the last segment overlapped by the span.
    pub last: usize,

    /// Area left empty between the skyline and `y` underneath the span.
    pub waste: u64,
}

/// The occupied-height frontier of a bin.
///
/// Segments are kept sorted by `x` and always cover `[0, width)` exactly, with
/// no gaps and no overlaps. No rectangle may start at or past `width`.
#[derive(Debug, Clone)]
pub struct Skyline {
    width: u32,
    segments: Vec<Segment>,
}

impl Skyline {
    pub(crate) fn new(width: u32, capacity: usize) -> Result<Self, Error> {
        let mut skyline = Skyline {
            width: 0,
            segments: Vec::new(),
        };
        skyline.reset(width, capacity)?;

        Ok(skyline)
    }

    /// Flattens the skyline back to a single segment at height zero, keeping
    /// the existing storage when it is large enough.
    pub(crate) fn reset(&mut self, width: u32, capacity: usize) -> Result<(), Error> {
        debug_assert!(width > 0, "skyline must have a positive width");

        self.width = width;
        self.segments.clear();
        self.segments
            .try_reserve(capacity.max(1).min(width as usize))?;
        self.segments.push(Segment { x: 0, y: 0, width });

        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// How many segments fit in the current storage without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.segments.capacity()
    }

    pub fn max_height(&self) -> u32 {
        self.segments
            .iter()
            .map(|segment| segment.y)
            .max()
            .unwrap_or(0)
    }

    /// Index of the segment containing column `x`, if `x` is inside the bin.
    pub fn segment_at(&self, x: u32) -> Option<usize> {
        if x >= self.width {
            return None;
        }

        Some(
            self.segments
                .partition_point(|segment| segment.right() <= x),
        )
    }

    /// Computes the resting height of a span `[x, x + width)`, along with the
    /// segments it covers and the area it would leave empty.
    ///
    /// Returns `None` if the span doesn't fit inside the bin horizontally.
    pub fn span(&self, x: u32, width: u32) -> Option<Span> {
        if width == 0 || x >= self.width || width > self.width - x {
            return None;
        }

        let right = x + width;
        let first = self.segment_at(x)?;
        let covered_count = self.segments[first..]
            .iter()
            .take_while(|segment| segment.x < right)
            .count();
        let last = first + covered_count - 1;
        let covered = &self.segments[first..=last];

        let y = covered.iter().map(|segment| segment.y).max().unwrap_or(0);
        let waste = covered
            .iter()
            .map(|segment| {
                let overlap = segment.right().min(right) - segment.x.max(x);
                u64::from(y - segment.y) * u64::from(overlap)
            })
            .sum();

        Some(Span {
            y,
            first,
            last,
            waste,
        })
    }

    /// Raises the skyline over `[x, x + width)` to `top`.
    ///
    /// `first` must be the index of the segment containing `x`, as reported by
    /// [`Skyline::span`]. Segments that are only partially covered are split,
    /// and the new segment is merged with neighbors of the same height.
    pub(crate) fn raise(&mut self, first: usize, x: u32, width: u32, top: u32) {
        let right = x + width;
        debug_assert!(right <= self.width);
        debug_assert!(self.segments[first].x <= x && x < self.segments[first].right());

        let covered_count = self.segments[first..]
            .iter()
            .take_while(|segment| segment.x < right)
            .count();
        let last = first + covered_count - 1;

        let head = self.segments[first];
        let tail = self.segments[last];

        let left_rest = if head.x < x {
            Some(Segment {
                x: head.x,
                y: head.y,
                width: x - head.x,
            })
        } else {
            None
        };

        let right_rest = if tail.right() > right {
            Some(Segment {
                x: right,
                y: tail.y,
                width: tail.right() - right,
            })
        } else {
            None
        };

        let raised = Segment { x, y: top, width };
        let mut index = first;
        if left_rest.is_some() {
            index += 1;
        }

        self.segments.splice(
            first..=last,
            left_rest
                .into_iter()
                .chain(Some(raised))
                .chain(right_rest),
        );

        if let Some(next) = self.segments.get(index + 1).copied() {
            if next.y == top {
                self.segments[index].width += next.width;
                self.segments.remove(index + 1);
            }
        }

        if index > 0 && self.segments[index - 1].y == top {
            let width = self.segments[index].width;
            self.segments[index - 1].width += width;
            self.segments.remove(index);
        }

        debug_assert!(self.is_contiguous(), "skyline lost coverage: {}", self);
    }

    /// Whether the segments cover `[0, width)` with no gaps or overlaps.
    pub fn is_contiguous(&self) -> bool {
        let mut expected_x = 0;

        for segment in &self.segments {
            if segment.x != expected_x || segment.width == 0 {
                return false;
            }
            expected_x = segment.right();
        }

        expected_x == self.width
    }
}

/// The segment capacity a run should reserve up front. Each placement adds at
/// most two segments and every segment is at least one unit wide.
pub(crate) fn segment_capacity(width: u32, item_count: usize) -> usize {
    item_count
        .saturating_mul(2)
        .saturating_add(1)
        .min(width as usize)
}

impl fmt::Display for Skyline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}..{}@{}", segment.x, segment.right(), segment.y)?;
        }

        Ok(())
    }
}
