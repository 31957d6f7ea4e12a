use lsp_server::Connection;
use lsp_types::{
    CompletionOptions, InitializeParams, ServerCapabilities, TextDocumentSyncCapability,
    TextDocumentSyncKind, WorkspaceFoldersServerCapabilities, WorkspaceServerCapabilities,
};
use tracing::{debug, error, info};

mod completion;
mod server;
mod settings;

pub(crate) fn run_language_server() -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
    debug!("Starting Karel Language Server");

    let (connection, threads) = Connection::stdio();

    // extract any initialization parameters passed from the editor.
    let (id, params) = connection.initialize_start()?;
    let params: InitializeParams = serde_json::from_value(params)?;

    let workspace_folders = params
        .capabilities
        .workspace
        .as_ref()
        .and_then(|workspace| workspace.workspace_folders)
        .unwrap_or(false);

    let capabilities = ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            ..Default::default()
        }),
        workspace: if workspace_folders {
            Some(WorkspaceServerCapabilities {
                workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                    supported: Some(true),
                    change_notifications: None,
                }),
                file_operations: None,
            })
        } else {
            None
        },
        ..Default::default()
    };

    let result = serde_json::json!({
        "capabilities": capabilities,
        "serverInfo": {
            "name": "karel",
            "version": env!("CARGO_PKG_VERSION"),
        },
    });
    connection.initialize_finish(id, result)?;

    info!("Karel Language Server starting on stdin");

    let server = server::KarelLanguageServer::new(params);

    if let Err(e) = server.run(connection) {
        error!("Server error: {}", e);
    }

    threads.join()?;
    Ok(())
}
