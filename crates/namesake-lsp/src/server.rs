//! Namesake LSP server implementation

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use namesake_core::registry::{CommandRegistry, Subscriptions};
use namesake_core::{execute, extract_symbol, plan_rename, NoSymbol, RenameError, RenameOutcome};

use crate::actions::rename_file_actions;
use crate::commands::{RenameFileArgs, RENAME_FILE_TO_SYMBOL};
use crate::convert::target_from_range;
use crate::document::DocumentState;
use crate::host::{ClientEditor, LocalFiles};
use crate::settings::Settings;

/// Namesake language server
///
/// Tracks open documents through full-text sync and serves the
/// rename-file-to-symbol refactor for all of them, whatever their language.
pub struct NamesakeLspServer {
    client: Client,
    documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    commands: CommandRegistry,
    registrations: Mutex<Subscriptions>,
    settings: Mutex<Settings>,
}

impl NamesakeLspServer {
    /// Create a new Namesake LSP server
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(Mutex::new(HashMap::new())),
            commands: CommandRegistry::new(),
            registrations: Mutex::new(Subscriptions::new()),
            settings: Mutex::new(Settings::default()),
        }
    }

    async fn rename_file_to_symbol(&self, args: RenameFileArgs) {
        match self.try_rename(args).await {
            Ok(RenameOutcome::Renamed(plan)) => {
                self.client
                    .log_message(
                        MessageType::INFO,
                        format!("renamed to {}", plan.target.display()),
                    )
                    .await;
            }
            // The user declined the overwrite prompt; stay quiet
            Ok(RenameOutcome::Cancelled) => {}
            Err(err) => {
                self.client
                    .show_message(MessageType::ERROR, err.to_string())
                    .await;
            }
        }
    }

    async fn try_rename(&self, args: RenameFileArgs) -> std::result::Result<RenameOutcome, RenameError> {
        // Snapshot the live document, then release the lock: the overwrite
        // prompt must not block incoming document sync. The symbol is
        // re-derived here, not taken from the suggestion-time label.
        let (path, text) = {
            let documents = self.documents.lock().await;
            let doc = documents
                .get(&args.uri)
                .ok_or(RenameError::NoActiveEditor)?;
            let path = doc.file_path().ok_or(RenameError::NoActiveEditor)?;
            (path, doc.text.clone())
        };

        let symbol =
            extract_symbol(&text, target_from_range(args.range)).map_err(|reason| match reason {
                NoSymbol::NotFound => RenameError::SymbolNotFound,
                NoSymbol::Empty => RenameError::EmptySymbol,
            })?;

        let plan = plan_rename(&path, &symbol);
        let settings = self.settings.lock().await.clone();
        let editor = ClientEditor::new(&self.client, settings);

        execute(plan, &LocalFiles, &editor).await
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for NamesakeLspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        *self.settings.lock().await =
            Settings::from_initialization_options(params.initialization_options);

        // Registrations live until shutdown, the single teardown point
        let registration = self.commands.register(RENAME_FILE_TO_SYMBOL);
        self.registrations.lock().await.push(Box::new(registration));

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                code_action_provider: Some(CodeActionProviderCapability::Options(
                    CodeActionOptions {
                        code_action_kinds: Some(vec![CodeActionKind::REFACTOR_REWRITE]),
                        work_done_progress_options: WorkDoneProgressOptions::default(),
                        resolve_provider: Some(false),
                    },
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![RENAME_FILE_TO_SYMBOL.to_string()],
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "namesake-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Namesake LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.registrations.lock().await.dispose_all();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        let version = params.text_document.version;

        let doc = DocumentState::new(uri.clone(), text, version);

        let mut documents = self.documents.lock().await;
        documents.insert(uri, doc);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let mut documents = self.documents.lock().await;
        if let Some(doc) = documents.get_mut(&uri) {
            // Update document text (full sync)
            for change in params.content_changes {
                doc.update(change.text, version);
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let mut documents = self.documents.lock().await;
        documents.remove(&params.text_document.uri);
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let documents = self.documents.lock().await;
        let Some(doc) = documents.get(&uri) else {
            return Ok(None);
        };

        Ok(Some(rename_file_actions(&uri, &doc.text, params.range)))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        if !self.commands.is_registered(&params.command) {
            return Err(Error::method_not_found());
        }

        let args = RenameFileArgs::parse(&params.arguments)
            .map_err(|err| Error::invalid_params(err.to_string()))?;

        self.rename_file_to_symbol(args).await;
        Ok(None)
    }
}
