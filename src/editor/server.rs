use std::collections::HashMap;

use karel::checking::{self, Problem};
use karel::language::{Settings, SymbolTable};
use lsp_server::{Connection, Message, Notification, Request, RequestId, Response};
use lsp_types::{
    CompletionItem, CompletionParams, CompletionResponse, Diagnostic,
    DiagnosticRelatedInformation, DiagnosticSeverity, DidChangeConfigurationParams,
    DidChangeTextDocumentParams, DidChangeWatchedFilesParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, InitializeParams, InitializedParams, Location, Position,
    PublishDiagnosticsParams, Range, Registration, RegistrationParams, Uri,
};
use serde::de::DeserializeOwned;
use serde_json::{from_value, to_value, Value};
use tracing::{debug, error, info, warn};

use super::completion;
use super::settings::{Resolution, SettingsStore};
use crate::problem::calculate_line_number;

type Outcome = Result<(), Box<dyn std::error::Error + Sync + Send>>;

/// The tag shown alongside every diagnostic.
const SOURCE: &str = "karelserver";

pub struct KarelLanguageServer {
    /// Map from URI to document content
    documents: HashMap<Uri, String>,
    /// The symbol table from the most recent validation of each document
    tables: HashMap<Uri, SymbolTable>,
    settings: SettingsStore,
    next_id: i32,
    configuration: bool,
    related_information: bool,
}

impl KarelLanguageServer {
    pub fn new(params: InitializeParams) -> Self {
        let capabilities = params.capabilities;

        // Does the client support the `workspace/configuration` request? If
        // not, we fall back to global settings.
        let configuration = capabilities
            .workspace
            .as_ref()
            .and_then(|workspace| workspace.configuration)
            .unwrap_or(false);

        let related_information = capabilities
            .text_document
            .as_ref()
            .and_then(|text| {
                text.publish_diagnostics
                    .as_ref()
            })
            .and_then(|publish| publish.related_information)
            .unwrap_or(false);

        debug!(
            "Client capabilities: configuration={}, related_information={}",
            configuration, related_information
        );

        Self {
            documents: HashMap::new(),
            tables: HashMap::new(),
            settings: SettingsStore::new(configuration),
            next_id: 0,
            configuration,
            related_information,
        }
    }

    /// Main server loop that handles incoming LSP messages
    pub fn run(
        mut self,
        connection: Connection,
    ) -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
        info!("Starting Language Server main loop");

        for message in &connection.receiver {
            match message {
                Message::Request(request) => {
                    if let Err(err) = self.handle_request(request, &|msg| {
                        connection
                            .sender
                            .send(msg)
                    }) {
                        error!("Error handling request: {}", err);
                    }
                }
                Message::Notification(notification) => {
                    if notification.method == "exit" {
                        break;
                    }

                    if let Err(error) = self.handle_notification(notification, &|message| {
                        connection
                            .sender
                            .send(message)
                    }) {
                        error!("Error handling notification: {}", error);
                    }
                }
                Message::Response(response) => {
                    if let Err(error) = self.handle_response(response, &|message| {
                        connection
                            .sender
                            .send(message)
                    }) {
                        error!("Error handling response: {}", error);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_request<E>(&mut self, req: Request, sender: &dyn Fn(Message) -> Result<(), E>) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match req
            .method
            .as_str()
        {
            "textDocument/completion" => {
                let params: CompletionParams = match decode(&req, sender)? {
                    Some(params) => params,
                    None => return Ok(()),
                };
                let result = self.handle_completion(params);
                let response = Response::new_ok(req.id, result);
                sender(Message::Response(response))?;
            }
            "completionItem/resolve" => {
                let item: CompletionItem = match decode(&req, sender)? {
                    Some(item) => item,
                    None => return Ok(()),
                };
                let response = Response::new_ok(req.id, completion::resolve_item(item));
                sender(Message::Response(response))?;
            }
            "shutdown" => {
                info!("Language Server received shutdown request");
                let response = Response::new_ok(req.id, Value::Null);
                sender(Message::Response(response))?;
            }
            _ => {
                warn!("Unhandled request method: {}", req.method);
                let response = Response::new_err(
                    req.id,
                    lsp_server::ErrorCode::MethodNotFound as i32,
                    format!("Method not found: {}", req.method),
                );
                sender(Message::Response(response))?;
            }
        }
        Ok(())
    }

    fn handle_notification<E>(
        &mut self,
        notification: Notification,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match notification
            .method
            .as_str()
        {
            "initialized" => {
                let params: InitializedParams = from_value(notification.params)?;
                self.handle_initialized(params, sender)?;
            }
            "textDocument/didOpen" => {
                let params: DidOpenTextDocumentParams = from_value(notification.params)?;
                self.handle_did_open(params, sender)?;
            }
            "textDocument/didChange" => {
                let params: DidChangeTextDocumentParams = from_value(notification.params)?;
                self.handle_did_change(params, sender)?;
            }
            "textDocument/didClose" => {
                let params: DidCloseTextDocumentParams = from_value(notification.params)?;
                self.handle_did_close(params)?;
            }
            "workspace/didChangeConfiguration" => {
                let params: DidChangeConfigurationParams = from_value(notification.params)?;
                self.handle_did_change_configuration(params, sender)?;
            }
            "workspace/didChangeWatchedFiles" => {
                let params: DidChangeWatchedFilesParams = from_value(notification.params)?;
                info!("Received {} file change events", params.changes.len());
            }
            "workspace/didChangeWorkspaceFolders" => {
                info!("Workspace folder change event received");
            }
            _ => {
                debug!("Unhandled notification method: {}", notification.method);
            }
        }
        Ok(())
    }

    /// Responses arrive for the requests we make of the client: settings
    /// lookups and capability registration.
    fn handle_response<E>(
        &mut self,
        response: Response,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if let Some(error) = &response.error {
            warn!("Client returned error for request {}: {}", response.id, error.message);
        }

        match self
            .settings
            .receive(&response.id, response.result)
        {
            Some((uri, settings)) => self.validate_and_publish(uri, settings, sender),
            None => {
                debug!("Response to request {}", response.id);
                Ok(())
            }
        }
    }

    fn handle_initialized<E>(
        &mut self,
        _params: InitializedParams,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if !self.configuration {
            return Ok(());
        }

        // register for all configuration changes
        let params = RegistrationParams {
            registrations: vec![Registration {
                id: "karel-configuration".to_string(),
                method: "workspace/didChangeConfiguration".to_string(),
                register_options: None,
            }],
        };
        let request = Request::new(
            self.request_id(),
            "client/registerCapability".to_string(),
            params,
        );
        sender(Message::Request(request))?;
        Ok(())
    }

    fn handle_did_open<E>(
        &mut self,
        params: DidOpenTextDocumentParams,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let uri = params
            .text_document
            .uri;
        let content = params
            .text_document
            .text;

        debug!("Document opened: {:?}", uri);

        self.documents
            .insert(uri.clone(), content);

        self.revalidate(uri, sender)
    }

    fn handle_did_change<E>(
        &mut self,
        params: DidChangeTextDocumentParams,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let uri = params
            .text_document
            .uri;

        // with full synchronization the last change holds the whole text
        if let Some(change) = params
            .content_changes
            .into_iter()
            .last()
        {
            debug!("Document changed: {:?}", uri);

            self.documents
                .insert(uri.clone(), change.text);

            self.revalidate(uri, sender)?;
        }
        Ok(())
    }

    fn handle_did_close(&mut self, params: DidCloseTextDocumentParams) -> Outcome {
        let uri = params
            .text_document
            .uri;
        debug!("Document closed: {:?}", uri);

        self.documents
            .remove(&uri);
        self.tables
            .remove(&uri);
        self.settings
            .forget(&uri);
        Ok(())
    }

    fn handle_did_change_configuration<E>(
        &mut self,
        params: DidChangeConfigurationParams,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug!("Configuration changed");

        self.settings
            .changed(&params.settings);

        let uris: Vec<Uri> = self
            .documents
            .keys()
            .cloned()
            .collect();

        for uri in uris {
            self.revalidate(uri, sender)?;
        }
        Ok(())
    }

    fn handle_completion(&self, params: CompletionParams) -> CompletionResponse {
        let uri = params
            .text_document_position
            .text_document
            .uri;

        debug!("Completion request: {:?}", uri);

        CompletionResponse::Array(completion::completion_items(self.tables.get(&uri)))
    }

    /// Validate a document as soon as its settings are known, which may
    /// mean asking the client for them first.
    fn revalidate<E>(&mut self, uri: Uri, sender: &dyn Fn(Message) -> Result<(), E>) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let id = RequestId::from(self.next_id);

        match self
            .settings
            .resolve(&uri, id)
        {
            Resolution::Ready(settings) => self.validate_and_publish(uri, settings, sender),
            Resolution::Fetch(request) => {
                self.next_id += 1;
                sender(Message::Request(request))?;
                Ok(())
            }
            Resolution::Waiting => {
                debug!("Still waiting on settings for {:?}", uri);
                Ok(())
            }
        }
    }

    /// Run a validation pass over the current text of the document and
    /// replace whatever diagnostics were previously published for it.
    fn validate_and_publish<E>(
        &mut self,
        uri: Uri,
        settings: Settings,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let content = match self
            .documents
            .get(&uri)
        {
            Some(content) => content,
            None => {
                debug!("Document no longer open, abandoning validation: {:?}", uri);
                return Ok(());
            }
        };

        let report = checking::validate(content, settings);
        let diagnostics = self.convert_problems(&uri, content, &report.problems);

        self.tables
            .insert(uri.clone(), report.table);

        self.publish_diagnostics(uri, diagnostics, sender)
    }

    fn publish_diagnostics<E>(
        &self,
        uri: Uri,
        diagnostics: Vec<Diagnostic>,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Outcome
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let params = PublishDiagnosticsParams {
            uri,
            diagnostics,
            version: None,
        };

        let notification = Notification::new(
            "textDocument/publishDiagnostics".to_string(),
            to_value(params)?,
        );

        sender(Message::Notification(notification))?;
        Ok(())
    }

    fn convert_problems(&self, uri: &Uri, content: &str, problems: &[Problem]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for problem in problems {
            let offset = problem.offset();
            let range = Range {
                start: offset_to_position(content, offset),
                end: offset_to_position(content, offset + problem.width()),
            };

            let related_information = if self.related_information {
                Some(vec![DiagnosticRelatedInformation {
                    location: Location {
                        uri: uri.clone(),
                        range,
                    },
                    message: String::new(),
                }])
            } else {
                None
            };

            let diagnostic = Diagnostic {
                range,
                severity: Some(DiagnosticSeverity::ERROR),
                code: None,
                code_description: None,
                source: Some(SOURCE.to_string()),
                message: problem.message(),
                related_information,
                tags: None,
                data: None,
            };

            diagnostics.push(diagnostic);
        }

        diagnostics
    }

    fn request_id(&mut self) -> RequestId {
        let id = RequestId::from(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Decode the parameters of a request, answering the request with an error
/// if they are malformed.
fn decode<T, E>(req: &Request, sender: &dyn Fn(Message) -> Result<(), E>) -> Result<Option<T>, E>
where
    T: DeserializeOwned,
{
    match from_value(
        req.params
            .clone(),
    ) {
        Ok(params) => Ok(Some(params)),
        Err(err) => {
            warn!("Invalid parameters for {}: {}", req.method, err);
            let response = Response::new_err(
                req.id
                    .clone(),
                lsp_server::ErrorCode::InvalidParams as i32,
                err.to_string(),
            );
            sender(Message::Response(response))?;
            Ok(None)
        }
    }
}

/// Convert byte offset to LSP Position, counting characters in UTF-16 code
/// units as the protocol requires.
fn offset_to_position(text: &str, offset: usize) -> Position {
    let line = calculate_line_number(text, offset) as u32;
    let start = match text[..offset].rfind('\n') {
        Some(i) => i + 1,
        None => 0,
    };
    let character = text[start..offset]
        .encode_utf16()
        .count() as u32;
    Position { line, character }
}
