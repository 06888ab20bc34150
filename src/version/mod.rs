pub mod bump;
pub mod digit_run;
pub mod error;
pub mod model;
pub mod parser;

pub use bump::bump_version;
