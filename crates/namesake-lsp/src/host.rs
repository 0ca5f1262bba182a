//! Host capability implementations
//!
//! `LocalFiles` backs the core `FileStore` trait with the server's local
//! disk; `ClientEditor` backs the core `Editor` trait with requests to the
//! LSP client (prompts, notifications, opening documents).

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tower_lsp::lsp_types::{MessageActionItem, MessageType, ShowDocumentParams, Url};
use tower_lsp::Client;

use namesake_core::{Editor, FileStore, RenameError};

use crate::settings::Settings;

/// Filesystem capability backed by the disk the server runs on.
pub struct LocalFiles;

#[async_trait]
impl FileStore for LocalFiles {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn rename(&self, from: &Path, to: &Path, overwrite: bool) -> Result<(), RenameError> {
        if !overwrite && from != to && tokio::fs::try_exists(to).await.unwrap_or(false) {
            return Err(RenameError::failed(format!(
                "target already exists: {}",
                to.display()
            )));
        }

        match tokio::fs::rename(from, to).await {
            Ok(()) => Ok(()),
            // Windows refuses to replace an existing file on rename
            Err(err) if overwrite && err.kind() == io::ErrorKind::AlreadyExists => {
                tokio::fs::remove_file(to).await.map_err(RenameError::failed)?;
                tokio::fs::rename(from, to).await.map_err(RenameError::failed)
            }
            Err(err) => Err(RenameError::failed(err)),
        }
    }
}

/// Editor capability bridged over the LSP client.
pub struct ClientEditor<'a> {
    client: &'a Client,
    settings: Settings,
}

impl<'a> ClientEditor<'a> {
    pub fn new(client: &'a Client, settings: Settings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl Editor for ClientEditor<'_> {
    async fn confirm_overwrite(&self, file_name: &str) -> bool {
        if !self.settings.confirm_overwrite {
            // Prompting disabled: treat every collision as declined
            return false;
        }

        let choice = self
            .client
            .show_message_request(
                MessageType::WARNING,
                format!(
                    "A file named \"{}\" already exists. Do you want to overwrite it?",
                    file_name
                ),
                Some(vec![action_item("Yes"), action_item("No")]),
            )
            .await;

        matches!(choice, Ok(Some(picked)) if picked.title == "Yes")
    }

    async fn show_renamed(&self, file_name: &str) {
        self.client
            .show_message(MessageType::INFO, format!("File renamed to {}", file_name))
            .await;
    }

    async fn open(&self, path: &Path) -> Result<(), RenameError> {
        if !self.settings.open_after_rename {
            return Ok(());
        }

        let uri = Url::from_file_path(path).map_err(|_| {
            RenameError::failed(format!("not an absolute file path: {}", path.display()))
        })?;
        let params = ShowDocumentParams {
            uri,
            external: Some(false),
            take_focus: Some(true),
            selection: None,
        };

        match self.client.show_document(params).await {
            Ok(_) => Ok(()),
            Err(err) => Err(RenameError::failed(err)),
        }
    }
}

fn action_item(title: &str) -> MessageActionItem {
    MessageActionItem {
        title: title.to_string(),
        properties: Default::default(),
    }
}
