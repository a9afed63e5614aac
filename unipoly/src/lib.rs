mod err;
mod misc;
mod poly;

pub use err::*;
pub use misc::*;
pub use poly::*;

pub mod util;
