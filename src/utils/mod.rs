pub mod colors;
pub mod date;
pub mod fs_utils;
pub mod table;
