pub mod predict;
pub mod serve;
pub mod status;

pub use predict::predict;
pub use serve::serve;
pub use status::status;
