pub mod board;
pub mod interaction;
pub mod palette;
pub mod segments;
