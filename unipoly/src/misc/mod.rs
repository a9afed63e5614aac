mod sign;
mod digits;
mod tex;

pub use sign::*;
pub use digits::*;

#[cfg(feature = "tex")]
pub use tex::*;
