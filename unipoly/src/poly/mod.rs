mod poly;
mod mono;
mod parse;
mod calc;
mod div;

pub use poly::*;
pub use parse::MAX_PARSE_DEG;
