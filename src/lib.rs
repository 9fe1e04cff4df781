pub mod error;
pub mod model;
pub mod output;
pub mod spinner;

pub use error::{Result, StargazeError};
pub use model::{Star, Tag};
pub use output::{Registry, Render};
pub use spinner::Spinner;
