pub use errors::*;
pub use html::*;

mod errors;
mod html;
pub mod macros;
