pub mod colors;
pub mod path;
pub mod table;

pub use table::{ResultSet, render};
