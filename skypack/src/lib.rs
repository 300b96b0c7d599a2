//! Skypack packs rectangles into a single, fixed-size bin. It was built for
//! atlas and spritesheet generation, where the bin size is decided up front
//! and anything that doesn't fit is handled by the caller.
//!
//! Packing uses a skyline: the bin keeps track of the highest occupied point
//! in every column, and each rectangle is dropped onto the spot where its top
//! edge ends up lowest. Rectangles are placed tallest first. Results are
//! deterministic for a given input.
//!
//! ## Example
//! ```
//! use skypack::{InputItem, SkylinePacker};
//!
//! // First, transform the rectangles you want to pack into the Skypack
//! // InputItem type. IDs are up to you.
//! let my_items = &[
//!     InputItem::new(0u64, (128, 64)),
//!     InputItem::new(1u64, (64, 64)),
//!     InputItem::new(2u64, (1, 300)),
//! ];
//!
//! // Compute a solution for a 512x512 bin.
//! // SkylinePacker::pack accepts anything that can turn into an iterator of
//! // InputItem or &InputItem.
//! let output = SkylinePacker::new().pack((512, 512), my_items).unwrap();
//!
//! // Results come back in the same order as the inputs.
//! assert_eq!(output.items()[1].position(), Some((129, 0)));
//! ```

mod context;
mod error;
mod geometry;
mod id;
mod packer;
mod search;
mod skyline;
mod types;

pub mod verify;

pub use context::*;
pub use error::*;
pub use geometry::*;
pub use id::*;
pub use packer::*;
pub use search::*;
pub use skyline::{Segment, Skyline, Span};
pub use types::*;
