pub mod assets;
pub mod debug;
pub mod predict;
