//! Rename-only copy: naming rules, the save plan, and the copy itself.
//!
//! Nothing in here inspects file content. A "rename" is a byte-identical
//! copy under a new name whose extension is always the chosen target.

mod copy;
mod errors;
pub mod naming;
mod plan;

pub use copy::copy_with_metadata;
pub use errors::{CopyError, PreconditionError};
pub use plan::{SavePlan, SAVE_DIALOG_TITLE, WARNING_TITLE};
