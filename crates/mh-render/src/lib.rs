//! mh-render - Instruction rendering for Migration Handoff
//!
//! Turns a loaded migration and the project configuration into the text an
//! operator follows to apply the migration by hand. The built-in layout lives
//! in [`template::INSTRUCTIONS_TEMPLATE`]; projects can supply their own
//! template, which sees the same [`InstructionContext`].

pub mod context;
pub mod environment;
pub mod error;
pub(crate) mod filters;
pub mod template;

pub use context::{InstructionContext, MethodContext, PsqlContext};
pub use environment::InstructionRenderer;
pub use error::{RenderError, RenderResult};
