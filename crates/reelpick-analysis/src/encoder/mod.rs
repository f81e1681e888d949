//! One-hot attribute encoding.
//!
//! Every movie maps to exactly one runtime-bin token plus one token per
//! listed genre. The vocabulary fixes the position of every token; the trie
//! and every query encoding must use the same vocabulary.

pub mod attribute_encoder;
pub mod runtime_bin;
pub mod table;
pub mod token;
pub mod vocabulary;

pub use attribute_encoder::{AttributeEncoder, EncodeDiagnostics, EncodedMovie};
pub use runtime_bin::RuntimeBin;
pub use table::{EncodedRow, EncodedTable};
pub use token::{AttributeToken, TokenCategory};
pub use vocabulary::{GenreOrder, Vocabulary};
