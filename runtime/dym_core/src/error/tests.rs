use super::{unresolved_name, FailedLookup, SuggestionError};
use crate::candidates::ScopeId;
use pretty_assertions::assert_eq;

fn scope() -> ScopeId {
    ScopeId::from("main")
}

#[test]
fn default_message_names_scope_and_spelling() {
    let err = unresolved_name("Dumpr", scope(), vec!["Dumper".to_string()]);
    assert_eq!(err.original_message(), "`Dumpr` is not defined in scope `main`");
}

#[test]
fn rendering_appends_suggestion_clause() {
    let err = unresolved_name("Dumpr", scope(), vec!["Dumper".to_string()]);
    assert_eq!(
        err.rendered_message(),
        "`Dumpr` is not defined in scope `main`. Did you mean Dumper?"
    );
}

#[test]
fn rendering_joins_ties_with_commas() {
    let err = unresolved_name(
        "Dumpr",
        scope(),
        vec!["Dumber".to_string(), "Dumper".to_string()],
    );
    assert_eq!(
        err.rendered_message(),
        "`Dumpr` is not defined in scope `main`. Did you mean Dumber, Dumper?"
    );
}

#[test]
fn empty_suggestions_render_original_unchanged() {
    let err = unresolved_name("qwzx", scope(), Vec::new());
    assert!(!err.has_suggestions());
    assert_eq!(err.rendered_message(), err.original_message());
}

#[test]
fn original_message_is_preserved_verbatim() {
    let host_text = "Undefined subroutine &main::prnt called";
    let err = unresolved_name("prnt", scope(), vec!["print".to_string()])
        .with_original_message(host_text);
    assert_eq!(err.original_message(), host_text);
    assert_eq!(
        err.rendered_message(),
        "Undefined subroutine &main::prnt called. Did you mean print?"
    );
}

#[test]
fn accessors_expose_structured_data() {
    let err = SuggestionError::new(
        FailedLookup::new("prnt", ScopeId::from("main")),
        vec!["print".to_string()],
    );
    assert_eq!(err.failed_name(), "prnt");
    assert_eq!(err.scope().as_str(), "main");
    assert_eq!(err.suggestions(), vec!["print".to_string()]);
    assert!(err.has_suggestions());
}

#[test]
fn implements_std_error() {
    let err = unresolved_name("prnt", scope(), Vec::new());
    let dynamic: &dyn std::error::Error = &err;
    assert_eq!(
        dynamic.to_string(),
        "`prnt` is not defined in scope `main`"
    );
}
