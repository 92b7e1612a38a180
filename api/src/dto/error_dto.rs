// The wire shape lives in the shared crate so every layer serializes
// errors the same way.
pub use ph_shared::ErrorResponse;
