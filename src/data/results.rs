use serde::{Deserialize, Serialize};
use skypack::OutputItem;
use thiserror::Error;

/// One row of a results file, describing what happened to one rectangle.
///
/// `x` and `y` are null for rectangles that weren't placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultRow {
    pub idx: u64,
    pub w: u32,
    pub h: u32,
    pub packed: bool,
    pub x: Option<u32>,
    pub y: Option<u32>,
}

impl From<&OutputItem> for ResultRow {
    fn from(item: &OutputItem) -> Self {
        let (w, h) = item.size();
        let position = item.position();

        ResultRow {
            idx: item.id().get(),
            w,
            h,
            packed: position.is_some(),
            x: position.map(|pos| pos.0),
            y: position.map(|pos| pos.1),
        }
    }
}

impl ResultRow {
    /// Turns the row back into a packing result. Packed rows must have both
    /// coordinates and unpacked rows must have neither.
    pub fn to_output_item(&self) -> Result<OutputItem, RowError> {
        let position = match (self.packed, self.x, self.y) {
            (true, Some(x), Some(y)) => Some((x, y)),
            (false, None, None) => None,
            _ => {
                return Err(RowError::InconsistentPlacement {
                    idx: self.idx,
                    packed: self.packed,
                    x: self.x,
                    y: self.y,
                })
            }
        };

        Ok(OutputItem::new(self.idx, (self.w, self.h), position))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Row with idx {idx} has packed = {packed} but x = {x:?}, y = {y:?}")]
    InconsistentPlacement {
        idx: u64,
        packed: bool,
        x: Option<u32>,
        y: Option<u32>,
    },
}
