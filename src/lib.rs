//! Public library API for typed, path-addressed decoding of JSON documents.

/// JSON value tree, path addressing, typed extraction, and transform chains.
pub mod json;
