// ============================================================
// Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal: turning the raw corpus into a vocabulary plus batches.
//
// Rules for this layer:
//   - No text processing or encoding logic here
//   - No printing here (that's the CLI)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.

// The corpus preparation workflow
pub mod prepare_use_case;
