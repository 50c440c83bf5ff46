//! Heuristic claim extraction from free-text model output.
//!
//! Keyword-and-regex based: numbered list items become candidate claims,
//! direction and strength come from ordered keyword rule tables. No
//! semantic parsing happens here; variable resolution belongs to the
//! validator.

pub mod parser;
pub mod types;

pub use parser::ClaimParser;
pub use types::{Claim, ClaimDirection, ClaimStrength};
