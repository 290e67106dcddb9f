use yew::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;
use web_sys::HtmlInputElement;

use crate::config;

#[derive(Serialize)]
struct TriggerCallRequest<'a> {
    phone: &'a str,
}

#[derive(Deserialize)]
struct TriggerCallResponse {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Settled result of one call-trigger submission. Replaced wholesale by
/// the next submission, never accumulated.
#[derive(Clone, Debug, PartialEq)]
pub struct CallOutcome {
    pub ok: bool,
    pub message: String,
}

fn trigger_endpoint(base_url: &str) -> String {
    format!("{}/api/trigger-call", base_url.trim_end_matches('/'))
}

fn success_outcome(message: Option<String>) -> CallOutcome {
    CallOutcome {
        ok: true,
        message: message.unwrap_or_else(|| "Call triggered".to_string()),
    }
}

fn rejection_outcome(error: Option<String>) -> CallOutcome {
    CallOutcome {
        ok: false,
        message: error.unwrap_or_else(|| "Failed to trigger call".to_string()),
    }
}

fn transport_outcome(detail: String) -> CallOutcome {
    CallOutcome {
        ok: false,
        message: format!("Request failed: {}", detail),
    }
}

/// Asks the backend to place one demo call. Every failure mode settles
/// into a `CallOutcome`; nothing is propagated past this function.
async fn trigger_call(endpoint: &str, phone: &str) -> CallOutcome {
    let request = match Request::post(endpoint).json(&TriggerCallRequest { phone }) {
        Ok(request) => request,
        Err(e) => return transport_outcome(e.to_string()),
    };
    match request.send().await {
        Ok(response) if response.ok() => match response.json::<TriggerCallResponse>().await {
            Ok(body) => success_outcome(body.message),
            Err(e) => {
                log!("Failed to parse trigger-call response: {}", e.to_string());
                transport_outcome(e.to_string())
            }
        },
        Ok(response) => {
            log!("Trigger call rejected with status: {}", response.status());
            match response.json::<ErrorResponse>().await {
                Ok(body) => rejection_outcome(body.error),
                Err(e) => transport_outcome(e.to_string()),
            }
        }
        Err(e) => {
            log!("Network error: {}", e.to_string());
            transport_outcome(e.to_string())
        }
    }
}

fn default_backend_url() -> String {
    config::default_backend_url().to_string()
}

#[derive(Properties, PartialEq)]
pub struct CallTriggerFormProps {
    /// Where to send the trigger request. Defaults to the build-time
    /// backend URL so the form can be pointed elsewhere in isolation.
    #[prop_or_else(default_backend_url)]
    pub backend_url: String,
}

#[function_component(CallTriggerForm)]
pub fn call_trigger_form(props: &CallTriggerFormProps) -> Html {
    let phone = use_state(String::new);
    let pending = use_state(|| false);
    let outcome = use_state(|| None::<CallOutcome>);

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_submit = {
        let phone = phone.clone();
        let pending = pending.clone();
        let outcome = outcome.clone();
        let backend_url = props.backend_url.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The disabled button is only advisory; this is the real guard
            // against overlapping requests.
            if *pending {
                return;
            }
            pending.set(true);
            outcome.set(None);

            let endpoint = trigger_endpoint(&backend_url);
            let phone_value = (*phone).clone();
            let pending = pending.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                let settled = trigger_call(&endpoint, &phone_value).await;
                outcome.set(Some(settled));
                pending.set(false);
            });
        })
    };

    html! {
        <section id="cta" class="cta-section">
            <style>
                {r#"
                    .cta-section {
                        padding: 6rem 1.5rem;
                    }
                    .cta-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .cta-copy h2 {
                        font-size: 2.2rem;
                        margin-bottom: 0.75rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .cta-copy p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.6;
                    }
                    .cta-form {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    }
                    .cta-form label {
                        display: block;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.5rem;
                    }
                    .cta-form input {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(0, 0, 0, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 10px;
                        padding: 0.85rem 1rem;
                        color: #fff;
                        font-size: 1rem;
                    }
                    .cta-form input:focus {
                        outline: none;
                        border-color: #1E90FF;
                    }
                    .trigger-button {
                        margin-top: 1rem;
                        background: #1E90FF;
                        color: #fff;
                        border: none;
                        border-radius: 10px;
                        padding: 0.85rem 1.5rem;
                        font-size: 0.95rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: opacity 0.2s ease;
                    }
                    .trigger-button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .call-status {
                        margin-top: 0.85rem;
                        font-size: 0.9rem;
                    }
                    .call-status.ok { color: #4CAF50; }
                    .call-status.err { color: #FF6B6B; }
                    @media (max-width: 768px) {
                        .cta-inner { grid-template-columns: 1fr; }
                        .cta-form { padding: 1.5rem; }
                    }
                "#}
            </style>
            <div class="cta-inner">
                <div class="cta-copy">
                    <h2>{"Try a test call"}</h2>
                    <p>{"Enter a phone number to hear how the agent would greet, gather info, and resolve an issue. We log the flow for review."}</p>
                </div>
                <form class="cta-form" onsubmit={on_submit}>
                    <label for="phone">{"Phone number"}</label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="+1 555 123 4567"
                        value={(*phone).clone()}
                        oninput={on_phone_input}
                    />
                    <button type="submit" class="trigger-button" disabled={*pending}>
                        { if *pending { "📞 Triggering..." } else { "📞 Trigger call" } }
                    </button>
                    {
                        if let Some(settled) = (*outcome).as_ref() {
                            let status_class = if settled.ok { "call-status ok" } else { "call-status err" };
                            html! { <p class={status_class}>{ &settled.message }</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_appends_trigger_path() {
        assert_eq!(
            trigger_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/trigger-call"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            trigger_endpoint("https://api.echocall.ai/"),
            "https://api.echocall.ai/api/trigger-call"
        );
    }

    #[test]
    fn request_body_carries_phone_verbatim() {
        let body = serde_json::to_value(TriggerCallRequest {
            phone: "+1 555 123 4567",
        })
        .unwrap();
        assert_eq!(body, json!({ "phone": "+1 555 123 4567" }));
    }

    #[test]
    fn empty_phone_is_a_legal_body() {
        let body = serde_json::to_value(TriggerCallRequest { phone: "" }).unwrap();
        assert_eq!(body, json!({ "phone": "" }));
    }

    #[test]
    fn success_uses_server_message() {
        let outcome = success_outcome(Some("Call queued".to_string()));
        assert!(outcome.ok);
        assert_eq!(outcome.message, "Call queued");
    }

    #[test]
    fn success_without_message_falls_back() {
        let outcome = success_outcome(None);
        assert!(outcome.ok);
        assert!(!outcome.message.is_empty());
    }

    #[test]
    fn rejection_uses_server_error() {
        let outcome = rejection_outcome(Some("Invalid number".to_string()));
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Invalid number");
    }

    #[test]
    fn rejection_without_error_falls_back() {
        let outcome = rejection_outcome(None);
        assert!(!outcome.ok);
        assert!(!outcome.message.is_empty());
    }

    #[test]
    fn transport_failure_is_negative_and_described() {
        let outcome = transport_outcome("connection refused".to_string());
        assert!(!outcome.ok);
        assert!(outcome.message.contains("connection refused"));
    }

    #[test]
    fn success_envelope_tolerates_missing_message() {
        let body: TriggerCallResponse = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: TriggerCallResponse =
            serde_json::from_str(r#"{"message":"Call queued","id":42}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Call queued"));
    }

    #[test]
    fn error_envelope_tolerates_missing_error() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Invalid number"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid number"));
    }
}
