pub mod location;
pub mod settings;
pub mod usage;

pub use location::*;
pub use settings::*;
pub use usage::*;
