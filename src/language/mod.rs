// Types representing the Karel robot language

mod error;
mod settings;
mod types;
mod vocabulary;

// Re-export all public symbols
pub use error::*;
pub use settings::*;
pub use types::*;
pub use vocabulary::*;
