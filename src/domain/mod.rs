// ============================================================
// Domain Layer
// ============================================================
// Plain Rust types that describe the corpus and the vocabulary.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Everything here can be unit tested without touching disk
// or building a tensor backend.

// Line ids, conversations and question/answer pairs
pub mod sentence_pair;

// Bidirectional word ↔ index table with counts
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
