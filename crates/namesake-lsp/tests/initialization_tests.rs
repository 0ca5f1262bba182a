//! Server initialization and lifecycle tests

use namesake_lsp::commands::RENAME_FILE_TO_SYMBOL;
use namesake_lsp::server::NamesakeLspServer;
use tower_lsp::lsp_types::*;
use tower_lsp::{LanguageServer, LspService};

#[tokio::test]
async fn advertises_code_actions_and_the_rename_command() {
    let (service, _socket) = LspService::new(NamesakeLspServer::new);
    let server = service.inner();

    let result = server
        .initialize(InitializeParams::default())
        .await
        .unwrap();

    assert_eq!(
        result.capabilities.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL))
    );

    let Some(CodeActionProviderCapability::Options(options)) =
        result.capabilities.code_action_provider
    else {
        panic!("expected code action options");
    };
    assert_eq!(
        options.code_action_kinds,
        Some(vec![CodeActionKind::REFACTOR_REWRITE])
    );

    let commands = result
        .capabilities
        .execute_command_provider
        .expect("expected an executeCommand provider")
        .commands;
    assert_eq!(commands, vec![RENAME_FILE_TO_SYMBOL.to_string()]);

    let info = result.server_info.unwrap();
    assert_eq!(info.name, "namesake-lsp");
}

#[tokio::test]
async fn unknown_commands_are_rejected() {
    let (service, _socket) = LspService::new(NamesakeLspServer::new);
    let server = service.inner();

    server
        .initialize(InitializeParams::default())
        .await
        .unwrap();

    let err = server
        .execute_command(ExecuteCommandParams {
            command: "namesake.unknown".to_string(),
            arguments: vec![],
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, tower_lsp::jsonrpc::ErrorCode::MethodNotFound);
}

#[tokio::test]
async fn malformed_command_arguments_are_rejected() {
    let (service, _socket) = LspService::new(NamesakeLspServer::new);
    let server = service.inner();

    server
        .initialize(InitializeParams::default())
        .await
        .unwrap();

    let err = server
        .execute_command(ExecuteCommandParams {
            command: RENAME_FILE_TO_SYMBOL.to_string(),
            arguments: vec![],
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, tower_lsp::jsonrpc::ErrorCode::InvalidParams);
}

// Shutdown is the single teardown point: the command registration is
// disposed there, so later invocations fail as unknown commands.
#[tokio::test]
async fn shutdown_deregisters_the_command() {
    let (service, _socket) = LspService::new(NamesakeLspServer::new);
    let server = service.inner();

    server
        .initialize(InitializeParams::default())
        .await
        .unwrap();
    server.shutdown().await.unwrap();

    let err = server
        .execute_command(ExecuteCommandParams {
            command: RENAME_FILE_TO_SYMBOL.to_string(),
            arguments: vec![],
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, tower_lsp::jsonrpc::ErrorCode::MethodNotFound);
}
