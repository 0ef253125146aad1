pub mod format;
pub mod modes;
pub mod parse;
