#![forbid(unsafe_code)]

pub mod model;
pub mod script;
pub mod time;
pub mod transliterate;

pub use time::Clock;
