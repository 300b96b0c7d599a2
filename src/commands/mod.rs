mod check;
mod pack;

pub use check::*;
pub use pack::*;
