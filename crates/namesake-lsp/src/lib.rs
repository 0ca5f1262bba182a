//! Namesake Language Server Protocol (LSP) library
//!
//! Serves the rename-file-to-symbol refactor to editors like VSCode,
//! Neovim, and Zed, for any document type.

pub mod actions;
pub mod commands;
pub mod convert;
pub mod document;
pub mod host;
pub mod server;
pub mod settings;
