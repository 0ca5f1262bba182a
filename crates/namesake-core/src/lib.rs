//! Host-agnostic engine for renaming a file to the symbol under the cursor.
//!
//! The engine is split along the host boundary: pure helpers work on plain
//! document text (`symbol`, `sanitize`, `plan`), while the executor in
//! `rename` drives the host through injected capability traits so it can be
//! tested against fakes. `registry` tracks host registrations as disposable
//! handles with a single teardown point.

pub mod plan;
pub mod registry;
pub mod rename;
pub mod sanitize;
pub mod symbol;

pub use plan::{plan_rename, RenamePlan};
pub use rename::{execute, Editor, FileStore, RenameError, RenameOutcome};
pub use sanitize::sanitize_file_name;
pub use symbol::{extract_symbol, Cursor, NoSymbol, Target};
