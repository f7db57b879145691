pub mod config;
pub mod constants;
pub mod field;
pub mod lifecycle;
pub mod links;
pub mod particle;
pub mod pointer;
pub mod surface;
pub mod viewport;

pub use config::*;
pub use field::*;
pub use lifecycle::*;
pub use pointer::*;
pub use surface::*;
pub use viewport::*;
