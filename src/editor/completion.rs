use karel::language::{builtin, Arity, SymbolTable, BUILTINS};
use lsp_types::{CompletionItem, CompletionItemKind, Documentation};
use serde_json::Value;

/// The built-in words followed by every procedure the document declares.
pub(crate) fn completion_items(table: Option<&SymbolTable>) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = BUILTINS
        .iter()
        .map(|builtin| CompletionItem {
            label: builtin
                .name
                .to_string(),
            kind: Some(CompletionItemKind::METHOD),
            data: Some(Value::String(
                builtin
                    .name
                    .to_string(),
            )),
            ..Default::default()
        })
        .collect();

    if let Some(table) = table {
        for symbol in table.iter() {
            let detail = match symbol.arity {
                Arity::Nullary => format!("{}()", symbol.name),
                Arity::Unary => format!("{}(n)", symbol.name),
            };
            items.push(CompletionItem {
                label: symbol
                    .name
                    .clone(),
                kind: Some(CompletionItemKind::METHOD),
                detail: Some(detail),
                ..Default::default()
            });
        }
    }

    items
}

/// Fill in the detail and documentation of a built-in once the editor
/// selects it. Items we know nothing more about are returned as they came.
pub(crate) fn resolve_item(mut item: CompletionItem) -> CompletionItem {
    let found = match &item.data {
        Some(Value::String(key)) => builtin(key),
        _ => None,
    };

    if let Some(found) = found {
        if let Some(detail) = found.detail {
            item.detail = Some(detail.to_string());
        }
        if let Some(documentation) = found.documentation {
            item.documentation = Some(Documentation::String(documentation.to_string()));
        }
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use karel::checking::validate;
    use karel::language::Settings;

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items
            .iter()
            .map(|item| item.label.as_str())
            .collect()
    }

    #[test]
    fn builtins_without_document() {
        let items = completion_items(None);
        assert_eq!(
            labels(&items),
            vec![
                "move",
                "turnleft",
                "turnoff",
                "putbeeper",
                "pickbeeper",
                "succ",
                "pred",
                "iszero"
            ]
        );
    }

    #[test]
    fn declared_procedures_follow() {
        let report = validate(
            "void turnright() {}\ndefine climb(n) {}\n",
            Settings::default(),
        );
        let items = completion_items(Some(&report.table));

        assert_eq!(items.len(), BUILTINS.len() + 2);
        assert_eq!(items[8].label, "climb");
        assert_eq!(items[8].detail.as_deref(), Some("climb(n)"));
        assert_eq!(items[9].label, "turnright");
        assert_eq!(items[9].detail.as_deref(), Some("turnright()"));
    }

    #[test]
    fn resolving_attaches_documentation() {
        let items = completion_items(None);

        let resolved = resolve_item(items[1].clone());
        assert_eq!(resolved.detail.as_deref(), Some("turnleft()"));
        assert_eq!(
            resolved.documentation,
            Some(Documentation::String(
                "Turns Karel 90 degrees to the left.".to_string()
            ))
        );

        let resolved = resolve_item(items[5].clone());
        assert_eq!(resolved, items[5]);
    }
}
