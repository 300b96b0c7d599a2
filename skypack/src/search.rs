use crate::skyline::Skyline;

/// How candidate positions along the skyline are scored against each other.
///
/// Both heuristics consider the same candidates, the left edge of every
/// skyline segment, and both prefer the position where the rectangle's top
/// edge ends up lowest. They differ in how ties are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Lowest top edge, then least wasted area underneath the rectangle, then
    /// smallest x.
    BestFit,

    /// Lowest top edge, then smallest x.
    BottomLeft,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::BestFit
    }
}

/// A position chosen for a rectangle by [`find_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,

    /// Area left empty between the skyline and the bottom of the rectangle.
    pub waste: u64,

    /// Index of the skyline segment containing `x`.
    pub(crate) first: usize,
}

impl Heuristic {
    fn score(self, placement: &Placement, height: u32) -> (u64, u64, u32) {
        let top = u64::from(placement.y) + u64::from(height);

        match self {
            Heuristic::BestFit => (top, placement.waste, placement.x),
            Heuristic::BottomLeft => (top, 0, placement.x),
        }
    }
}

/// Finds the best position for a rectangle of the given size on top of the
/// skyline, or `None` if it fits nowhere inside the bin.
///
/// This never modifies the skyline.
pub fn find_position(
    skyline: &Skyline,
    size: (u32, u32),
    bin_height: u32,
    heuristic: Heuristic,
) -> Option<Placement> {
    let (width, height) = size;
    if width == 0 || height == 0 || height > bin_height {
        return None;
    }

    let mut best: Option<(Placement, (u64, u64, u32))> = None;

    for segment in skyline.segments() {
        // Candidates are visited left to right, so once one runs past the
        // right edge of the bin, all the following ones do too.
        let span = match skyline.span(segment.x, width) {
            Some(span) => span,
            None => break,
        };

        if bin_height.saturating_sub(span.y) < height {
            continue;
        }

        let candidate = Placement {
            x: segment.x,
            y: span.y,
            waste: span.waste,
            first: span.first,
        };
        let score = heuristic.score(&candidate, height);

        let is_better = match &best {
            Some((_, best_score)) => score < *best_score,
            None => true,
        };

        if is_better {
            best = Some((candidate, score));
        }
    }

    best.map(|(placement, _)| placement)
}
