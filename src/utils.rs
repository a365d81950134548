mod strings;

pub use strings::*;
