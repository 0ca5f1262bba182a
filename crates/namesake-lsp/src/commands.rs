//! Command surface exposed through `workspace/executeCommand`

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_lsp::lsp_types::{Range, Url};

/// Command id for the rename-file-to-symbol refactor.
pub const RENAME_FILE_TO_SYMBOL: &str = "namesake.renameFileToSymbol";

/// Arguments carried by the rename command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameFileArgs {
    /// Document whose backing file is renamed.
    pub uri: Url,
    /// Cursor or selection the symbol is derived from. The symbol itself is
    /// re-extracted from the live document at execution time.
    pub range: Range,
}

impl RenameFileArgs {
    pub fn new(uri: Url, range: Range) -> Self {
        Self { uri, range }
    }

    /// Encode as the command's JSON argument list.
    pub fn to_arguments(&self) -> Vec<Value> {
        vec![serde_json::json!({ "uri": self.uri, "range": self.range })]
    }

    /// Decode from an `executeCommand` argument list.
    pub fn parse(arguments: &[Value]) -> anyhow::Result<Self> {
        let first = arguments
            .first()
            .context("rename command expects one argument")?;
        serde_json::from_value(first.clone()).context("malformed rename command argument")
    }
}
