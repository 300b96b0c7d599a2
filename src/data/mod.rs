mod job;
mod results;

pub use job::*;
pub use results::*;
