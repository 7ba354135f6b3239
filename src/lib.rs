mod app;
mod body;
mod config;
mod controls;
mod driver;
mod error;
mod math;

pub use app::*;
pub use body::*;
pub use config::*;
pub use controls::*;
pub use driver::*;
pub use error::*;
pub use math::*;
