pub mod completion_interface;
pub mod openai_compatible;

pub use completion_interface::*;
pub use openai_compatible::*;
