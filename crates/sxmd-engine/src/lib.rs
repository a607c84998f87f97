pub mod conversion;
pub mod io;

// Re-export key types for easier usage
pub use conversion::{Converter, convert, convert_bytes};
pub use io::*;
