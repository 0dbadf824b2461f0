/// Typed extraction command.
pub mod get;
/// Leaf path listing command.
pub mod paths;
/// Text rendering of JSON trees.
pub mod print;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared path and output helpers.
pub mod util;
