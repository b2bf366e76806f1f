/*
[INPUT]:  Exchange field vocabularies and endpoint body layouts
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
