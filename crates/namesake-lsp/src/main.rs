//! Namesake Language Server Protocol (LSP) server
//!
//! Renames the file behind the active document to the symbol under the
//! cursor, offered as a command and as a refactor code action.

use namesake_lsp::server::NamesakeLspServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // Set up LSP service
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(NamesakeLspServer::new);

    // Start the server
    Server::new(stdin, stdout, socket).serve(service).await;
}
