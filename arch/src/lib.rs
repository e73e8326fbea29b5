//! Registry of x86 and x86-64 instruction set extensions: parsing free-form extension names,
//! rendering them for display and looking up a short description of each one
mod arch;
mod arch_alias;
mod arch_list;
mod error;
pub mod tracing;

pub use arch::*;
pub use arch_alias::*;
pub use arch_list::*;
pub use error::*;
