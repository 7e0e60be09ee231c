pub mod commands;
pub mod outcome;
pub mod value_objects;

pub use outcome::*;
pub use value_objects::*;
