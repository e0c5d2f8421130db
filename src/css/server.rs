//! Stylesheet Language Server Implementation
//!
//! Provides hover for CSS, SCSS and Less files using tower-lsp.

use std::sync::{Arc, Mutex};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use crate::css::data::CssDataset;
use crate::css::document_manager::StyleDocumentManager;
use crate::css::hover::CssHoverProvider;
use crate::css::settings::{HoverCapabilities, ServerOptions};
use crate::error::HoverResult;

/// Stylesheet Language Server
pub struct StyleLanguageServer {
    client: Client,
    /// tower-lsp requires `Send + Sync`, and state is modified from `&self` methods
    state: Arc<Mutex<StyleServerState>>,
}

/// Internal state for the language server
struct StyleServerState {
    document_manager: StyleDocumentManager,
    hover_provider: CssHoverProvider,
}

impl StyleLanguageServer {
    /// Create a new language server
    pub fn new(client: Client, document_manager: StyleDocumentManager) -> Self {
        let state = StyleServerState {
            document_manager,
            hover_provider: CssHoverProvider::new(),
        };

        Self {
            client,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Configure hover from the client's capabilities and initialization options
    fn configure(&self, params: &InitializeParams) {
        let capabilities = HoverCapabilities::from_client(&params.capabilities);
        let options = ServerOptions::from_initialization_options(params.initialization_options.clone());
        let dataset = if options.custom_data.is_empty() {
            CssDataset::builtin().clone()
        } else {
            CssDataset::with_custom_data(&options.custom_data)
        };

        log::info!(
            "Hover configured: markdown {}, {:?}, {} documentation entries",
            capabilities.supports_markdown,
            options.hover,
            dataset.len()
        );

        match self.state.lock() {
            Ok(mut state) => {
                state.hover_provider =
                    CssHoverProvider::with_config(Arc::new(dataset), capabilities, options.hover);
            }
            Err(_) => log::error!("[initialize] Failed to acquire state lock"),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for StyleLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.configure(&params);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::INCREMENTAL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("Stylesheet language server initialized");
        self.client
            .log_message(MessageType::INFO, "Stylesheet language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        log::info!("Shutdown requested");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        log::info!("Opened {} ({})", document.uri, document.language_id);

        match self.state.lock() {
            Ok(mut state) => state.document_manager.open_document(
                document.uri,
                &document.language_id,
                document.text,
                document.version,
            ),
            Err(_) => log::error!("[did_open] Failed to acquire state lock"),
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        match self.state.lock() {
            Ok(mut state) => {
                state
                    .document_manager
                    .update_document(&uri, params.content_changes, version)
            }
            Err(_) => log::error!("[did_change] Failed to acquire state lock"),
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        log::info!("Closed {}", uri);

        if let Ok(mut state) = self.state.lock() {
            state.document_manager.close_document(&uri);
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Ok(state) = self.state.lock() else {
            log::error!("[hover] Failed to acquire state lock");
            return Ok(None);
        };
        let Some(document) = state.document_manager.get_document(&uri) else {
            log::warn!("Hover for a document that is not open: {}", uri);
            return Ok(None);
        };
        let Some(tree) = document.tree() else {
            log::warn!("No syntax tree available for {}", uri);
            return Ok(None);
        };

        Ok(state
            .hover_provider
            .hover(document.text(), position, tree, document.dialect))
    }
}

/// Create and start the language server on stdio
pub async fn start_style_language_server() -> HoverResult<()> {
    let document_manager = StyleDocumentManager::new()?;

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| StyleLanguageServer::new(client, document_manager));
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
