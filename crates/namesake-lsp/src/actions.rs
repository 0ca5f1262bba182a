//! Code actions provider
//!
//! Offers exactly one action: renaming the document's backing file to the
//! symbol at the request range, as a `refactor.rewrite`.

use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, Command, Range, Url,
};

use namesake_core::extract_symbol;

use crate::commands::{RenameFileArgs, RENAME_FILE_TO_SYMBOL};
use crate::convert::target_from_range;

/// Generate the rename-file suggestion for a code action request.
///
/// The range's selection content (or, collapsed, the word around its start)
/// becomes the candidate name in the label. No word, or a selection that
/// trims to nothing, yields no actions. The label is a suggestion-time
/// snapshot: accepting the action re-derives the symbol from the live
/// document, which may have changed in between.
pub fn rename_file_actions(uri: &Url, text: &str, range: Range) -> Vec<CodeActionOrCommand> {
    let Ok(symbol) = extract_symbol(text, target_from_range(range)) else {
        return Vec::new();
    };

    let command = Command {
        title: "Rename File to Symbol".to_string(),
        command: RENAME_FILE_TO_SYMBOL.to_string(),
        arguments: Some(RenameFileArgs::new(uri.clone(), range).to_arguments()),
    };

    vec![CodeActionOrCommand::CodeAction(CodeAction {
        title: format!("Rename file to \"{}\"", symbol),
        kind: Some(CodeActionKind::REFACTOR_REWRITE),
        diagnostics: None,
        edit: None,
        command: Some(command),
        is_preferred: None,
        disabled: None,
        data: None,
    })]
}
