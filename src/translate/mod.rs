pub mod interface;
pub mod language;
pub mod prompt;

pub use interface::*;
pub use language::*;
pub use prompt::*;
