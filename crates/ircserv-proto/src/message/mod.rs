//! IRC message types and parsing.

mod borrowed;
mod nom_parser;
mod parse;
mod serialize;
mod types;

pub use self::borrowed::MessageRef;
pub use self::types::Message;
