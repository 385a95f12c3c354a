//! # Types
//!
//! Value types shared by the formatter and its collaborators.
//!
//! All of these are rebuilt from live debuggee and view state for each
//! format request; nothing here is persisted.

pub mod address;
pub mod location;
pub mod mapping;
pub mod metadata;
pub mod position;

// Re-export all public types
pub use address::Address;
pub use location::{BreakpointLocation, IlCodeLocation, NativeCodeLocation};
pub use mapping::IlOffsetMapping;
pub use metadata::{MethodRef, MethodToken, ModuleId, ModuleTokenId, ParameterRef};
pub use position::{CursorPosition, DisplayPosition, TextSnapshot};
