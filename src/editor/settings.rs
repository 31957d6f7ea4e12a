use std::collections::{HashMap, HashSet};

use karel::language::Settings;
use lsp_server::{Request, RequestId};
use lsp_types::{ConfigurationItem, ConfigurationParams, Uri};
use serde_json::Value;
use tracing::debug;

/// Name of our section of the editor's configuration.
pub(crate) const SECTION: &str = "karel";

/// What to do about settings before a document can be validated.
#[derive(Debug)]
pub(crate) enum Resolution {
    /// Settings are known, validate now.
    Ready(Settings),
    /// Ask the editor, and validate once it answers.
    Fetch(Request),
    /// Already asked the editor; the answer will trigger validation.
    Waiting,
}

/// Where each document's settings come from. Editors that support
/// `workspace/configuration` are asked per document and the answers cached
/// until the configuration changes; other editors get one global value.
pub(crate) struct SettingsStore {
    per_document: bool,
    global: Settings,
    cached: HashMap<Uri, Settings>,
    pending: HashMap<RequestId, Uri>,
    /// Requests sent before the last configuration change. Their answers
    /// are out of date and get discarded.
    superseded: HashSet<RequestId>,
}

impl SettingsStore {
    pub(crate) fn new(per_document: bool) -> Self {
        Self {
            per_document,
            global: Settings::default(),
            cached: HashMap::new(),
            pending: HashMap::new(),
            superseded: HashSet::new(),
        }
    }

    pub(crate) fn resolve(&mut self, uri: &Uri, id: RequestId) -> Resolution {
        if !self.per_document {
            return Resolution::Ready(self.global);
        }

        if let Some(settings) = self
            .cached
            .get(uri)
        {
            return Resolution::Ready(*settings);
        }

        if self
            .pending
            .values()
            .any(|waiting| waiting == uri)
        {
            return Resolution::Waiting;
        }

        debug!("Requesting settings for {:?}", uri);

        let params = ConfigurationParams {
            items: vec![ConfigurationItem {
                scope_uri: Some(uri.clone()),
                section: Some(SECTION.to_string()),
            }],
        };

        self.pending
            .insert(id.clone(), uri.clone());

        Resolution::Fetch(Request::new(id, "workspace/configuration".to_string(), params))
    }

    /// Record the editor's answer to an earlier request, returning the
    /// document it was for along with its settings. Answers to requests we
    /// didn't make for settings are ignored.
    pub(crate) fn receive(
        &mut self,
        id: &RequestId,
        result: Option<Value>,
    ) -> Option<(Uri, Settings)> {
        if self
            .superseded
            .remove(id)
        {
            debug!("Discarding settings from before the configuration changed");
            return None;
        }

        let uri = self
            .pending
            .remove(id)?;

        // the result is an array with one entry per requested item
        let value = match result {
            Some(Value::Array(mut items)) if !items.is_empty() => items.swap_remove(0),
            _ => Value::Null,
        };

        let settings = Settings::from_json(value);
        self.cached
            .insert(uri.clone(), settings);

        Some((uri, settings))
    }

    /// The configuration changed. Per-document settings are refetched on
    /// demand, including for documents whose request is still outstanding;
    /// the global settings are taken from the notification itself.
    pub(crate) fn changed(&mut self, payload: &Value) {
        if self.per_document {
            self.cached
                .clear();
            self.superseded
                .extend(
                    self.pending
                        .drain()
                        .map(|(id, _)| id),
                );
        } else {
            self.global = Settings::from_json(
                payload
                    .get(SECTION)
                    .cloned()
                    .unwrap_or(Value::Null),
            );
        }
    }

    pub(crate) fn forget(&mut self, uri: &Uri) {
        self.cached
            .remove(uri);
        self.pending
            .retain(|_, waiting| *waiting != *uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn uri(s: &str) -> Uri {
        s.parse()
            .unwrap()
    }

    #[test]
    fn global_settings_without_capability() {
        let mut store = SettingsStore::new(false);
        let document = uri("file:///tmp/a.karel");

        match store.resolve(&document, RequestId::from(1)) {
            Resolution::Ready(settings) => assert_eq!(settings, Settings::default()),
            other => panic!("expected settings, got {:?}", other),
        }

        store.changed(&json!({ "karel": { "maxNumberOfProblems": 5 } }));
        match store.resolve(&document, RequestId::from(2)) {
            Resolution::Ready(settings) => assert_eq!(settings.max_diagnostics, 5),
            other => panic!("expected settings, got {:?}", other),
        }

        store.changed(&json!({}));
        match store.resolve(&document, RequestId::from(3)) {
            Resolution::Ready(settings) => assert_eq!(settings, Settings::default()),
            other => panic!("expected settings, got {:?}", other),
        }
    }

    #[test]
    fn fetch_once_then_cache() {
        let mut store = SettingsStore::new(true);
        let document = uri("file:///tmp/a.karel");

        match store.resolve(&document, RequestId::from(1)) {
            Resolution::Fetch(request) => {
                assert_eq!(request.method, "workspace/configuration");
                assert_eq!(request.params["items"][0]["section"], "karel");
            }
            other => panic!("expected a request, got {:?}", other),
        }

        assert!(matches!(
            store.resolve(&document, RequestId::from(2)),
            Resolution::Waiting
        ));

        let answer = store.receive(
            &RequestId::from(1),
            Some(json!([{ "maxNumberOfProblems": 9 }])),
        );
        assert_eq!(answer, Some((document.clone(), Settings::with_limit(9))));

        match store.resolve(&document, RequestId::from(3)) {
            Resolution::Ready(settings) => assert_eq!(settings.max_diagnostics, 9),
            other => panic!("expected settings, got {:?}", other),
        }

        store.changed(&Value::Null);
        assert!(matches!(
            store.resolve(&document, RequestId::from(4)),
            Resolution::Fetch(_)
        ));
    }

    #[test]
    fn answer_from_before_change_discarded() {
        let mut store = SettingsStore::new(true);
        let document = uri("file:///tmp/a.karel");

        assert!(matches!(
            store.resolve(&document, RequestId::from(1)),
            Resolution::Fetch(_)
        ));

        store.changed(&Value::Null);

        // asked again rather than waiting on the outdated request
        assert!(matches!(
            store.resolve(&document, RequestId::from(2)),
            Resolution::Fetch(_)
        ));

        let answer = store.receive(
            &RequestId::from(1),
            Some(json!([{ "maxNumberOfProblems": 1 }])),
        );
        assert_eq!(answer, None);
        assert!(matches!(
            store.resolve(&document, RequestId::from(3)),
            Resolution::Waiting
        ));

        let answer = store.receive(&RequestId::from(2), Some(json!([{}])));
        assert_eq!(answer, Some((document, Settings::default())));
    }

    #[test]
    fn forgetting_drops_outstanding_request() {
        let mut store = SettingsStore::new(true);
        let document = uri("file:///tmp/a.karel");

        store.resolve(&document, RequestId::from(1));
        store.forget(&document);

        assert!(store
            .pending
            .is_empty());
        assert_eq!(store.receive(&RequestId::from(1), Some(json!([null]))), None);
    }

    #[test]
    fn unknown_response_ignored() {
        let mut store = SettingsStore::new(true);
        assert_eq!(store.receive(&RequestId::from(7), None), None);
    }

    #[test]
    fn empty_answer_means_defaults() {
        let mut store = SettingsStore::new(true);
        let document = uri("file:///tmp/a.karel");

        store.resolve(&document, RequestId::from(1));
        let answer = store.receive(&RequestId::from(1), Some(json!([null])));
        assert_eq!(answer, Some((document, Settings::default())));
    }
}
