pub mod ansi;
pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
