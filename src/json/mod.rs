mod convert;
mod cursor;
mod distillate;
mod error;
mod extract;
mod navigate;
mod path;
mod value;

/// Subscript-style deferred lookup handle.
pub use cursor::Cursor;
/// Lazy transform chain and collection emptiness trait.
pub use distillate::{Distillate, Emptiable};
/// Error taxonomy and result alias.
pub use error::{BoxError, DistillError, FilteredPayload, Result, TypeDescriptor};
/// Typed extraction trait and entry points.
pub use extract::{Distillable, extract, extract_optional};
/// Path resolution entry points and miss diagnostics.
pub use navigate::{Miss, MissReason, locate, resolve, resolve_present};
/// Path addressing types.
pub use path::{Path, PathElement};
/// JSON value tree types.
pub use value::{Number, Value, ValueKind};
