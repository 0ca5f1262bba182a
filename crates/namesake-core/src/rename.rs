//! Rename execution over injected host capabilities
//!
//! The executor owns the collision check, the overwrite confirmation, the
//! move itself, and the post-move notifications. Everything it needs from
//! the host comes in through [`FileStore`] and [`Editor`], so the whole
//! sequence is testable against fakes. Every host call is a suspend point;
//! nothing else in an invocation runs while one is outstanding.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::plan::RenamePlan;

/// Terminal failure of a rename invocation. `Display` strings are the
/// user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    #[error("No active editor found")]
    NoActiveEditor,

    #[error("No symbol found at cursor position")]
    SymbolNotFound,

    #[error("No valid symbol found at cursor position")]
    EmptySymbol,

    #[error("Failed to rename file: {message}")]
    Failed { message: String },
}

impl RenameError {
    /// Wrap a host failure, keeping its message for the user.
    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self::Failed {
            message: err.to_string(),
        }
    }
}

/// How a rename invocation ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved to the plan's target path.
    Renamed(RenamePlan),
    /// The user declined the overwrite prompt; nothing was touched.
    Cancelled,
}

/// Host filesystem capability.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to`. With `overwrite` an existing target may be
    /// replaced; without it the move must fail on collision.
    async fn rename(&self, from: &Path, to: &Path, overwrite: bool) -> Result<(), RenameError>;
}

/// Host editor capability: prompts, notifications, opening documents.
#[async_trait]
pub trait Editor: Send + Sync {
    /// Ask whether an existing file may be overwritten. Declining and
    /// dismissing the prompt both answer `false`.
    async fn confirm_overwrite(&self, file_name: &str) -> bool;

    /// Announce a completed rename.
    async fn show_renamed(&self, file_name: &str);

    /// Make the file at `path` the active document.
    async fn open(&self, path: &Path) -> Result<(), RenameError>;
}

/// Carry out a planned rename.
///
/// When the target exists the user is asked first; the target is not
/// compared against the source, so renaming a file to its own name prompts
/// too. Once confirmation is settled the move requests overwrite
/// unconditionally. There is no rollback: if the move lands but opening the
/// result fails, the file stays at the target path.
pub async fn execute<F, E>(
    plan: RenamePlan,
    files: &F,
    editor: &E,
) -> Result<RenameOutcome, RenameError>
where
    F: FileStore + ?Sized,
    E: Editor + ?Sized,
{
    if files.exists(&plan.target).await && !editor.confirm_overwrite(&plan.file_name).await {
        return Ok(RenameOutcome::Cancelled);
    }

    files.rename(&plan.source, &plan.target, true).await?;
    editor.show_renamed(&plan.file_name).await;
    editor.open(&plan.target).await?;

    Ok(RenameOutcome::Renamed(plan))
}
