//! Lookup Notice Component
//!
//! Inline message for a lookup that failed or is still loading.

use leptos::prelude::*;
use point_form::FetchError;

/// Text shown for a failed lookup of `what`
pub fn failure_message(what: &str, err: &FetchError) -> String {
    match err {
        FetchError::PermissionDenied => format!("Sem permissão para {}.", what),
        err if err.is_transient() => {
            format!("Não foi possível carregar {} agora ({}). Tente novamente mais tarde.", what, err)
        }
        other => format!("Não foi possível carregar {} ({}).", what, other),
    }
}

/// Renders nothing when the lookup succeeded
#[component]
pub fn LookupNotice(
    #[prop(into)] what: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<FetchError>>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(err) = error.get() {
                Some(view! { <p class="lookup-error">{failure_message(&what, &err)}</p> }.into_any())
            } else if pending.get() {
                Some(view! { <p class="lookup-pending">"Carregando " {what.clone()} "..."</p> }.into_any())
            } else {
                None
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_message() {
        assert_eq!(
            failure_message("a localização", &FetchError::PermissionDenied),
            "Sem permissão para a localização."
        );
    }

    #[test]
    fn test_status_message_mentions_code() {
        let err = FetchError::Status { status: 404, text: "Not Found".into() };
        let message = failure_message("os itens", &err);
        assert!(message.contains("HTTP 404"));
        assert!(!message.contains("Tente novamente"));
    }

    #[test]
    fn test_transient_failures_suggest_retry() {
        for err in [
            FetchError::Network("offline".into()),
            FetchError::Status { status: 502, text: "Bad Gateway".into() },
        ] {
            assert!(failure_message("os itens", &err).ends_with("Tente novamente mais tarde."));
        }
    }
}
