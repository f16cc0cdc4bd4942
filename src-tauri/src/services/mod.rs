pub mod metadata;
pub mod processor;
