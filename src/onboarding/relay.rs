use gloo_console::error;
use serde_json::Value;
use web_sys::MessageEvent;
use yew::Callback;

use crate::analytics::{self, GaEvent};
use crate::config;

/// Decoded form of a message posted by the embedded application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboundMessage {
    Analytics { category: String, action: String },
    Complete,
    Close,
    Unrecognized,
}

/// The embedded application posts from the configured origin; everything
/// else is dropped. Containment (not equality) matches what the embedded
/// application has always sent.
pub fn origin_is_trusted(origin: &str, base_origin: &str) -> bool {
    origin.contains(base_origin)
}

pub fn classify(data: &Value) -> InboundMessage {
    if let Some(text) = data.as_str() {
        return match text {
            "complete" => InboundMessage::Complete,
            "close" => InboundMessage::Close,
            _ => InboundMessage::Unrecognized,
        };
    }
    if data.get("type").and_then(Value::as_str) == Some("ga-event") {
        return InboundMessage::Analytics {
            category: data
                .get("eventCategory")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            action: data
                .get("eventAction")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };
    }
    InboundMessage::Unrecognized
}

/// Window-level `message` handler. Relays analytics events from the
/// embedded application and tears the modal down on terminal signals.
pub fn handle_message(event: &MessageEvent, on_close: &Callback<()>) {
    let base_origin = config::embedded_app_origin();
    if !origin_is_trusted(&event.origin(), base_origin) {
        return;
    }

    let data: Value = serde_wasm_bindgen::from_value(event.data()).unwrap_or(Value::Null);
    match classify(&data) {
        InboundMessage::Analytics { category, action } => {
            match GaEvent::from_category(&category) {
                Some(ga_event) => analytics::send_ga_event(ga_event, &action),
                None => error!(format!(
                    "Cannot submit GA event with category [{}]. Allowed categories: [{}]",
                    category,
                    GaEvent::allowed_categories()
                )),
            }
        }
        InboundMessage::Complete => {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(base_origin, "_blank");
            }
            on_close.emit(());
        }
        InboundMessage::Close => on_close.emit(()),
        InboundMessage::Unrecognized => {
            log::debug!("ignoring message from embedded application: {}", data);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn literal_complete_and_close_are_terminal_signals() {
        assert_eq!(classify(&json!("complete")), InboundMessage::Complete);
        assert_eq!(classify(&json!("close")), InboundMessage::Close);
    }

    #[test]
    fn ga_event_objects_decode_to_analytics_messages() {
        let message = json!({
            "type": "ga-event",
            "eventCategory": "onboarding_signup",
            "eventAction": "x",
        });
        assert_eq!(
            classify(&message),
            InboundMessage::Analytics {
                category: "onboarding_signup".to_string(),
                action: "x".to_string(),
            }
        );
    }

    #[test]
    fn everything_else_is_unrecognized() {
        for data in [
            json!("finished"),
            json!({ "type": "resize", "height": 900 }),
            json!({ "eventCategory": "onboarding_signup" }),
            json!(42),
            json!(null),
            json!(["complete"]),
        ] {
            assert_eq!(classify(&data), InboundMessage::Unrecognized, "{data}");
        }
    }

    #[test]
    fn origins_are_checked_by_containment() {
        let base = "https://app.stackbeam.io";
        assert!(origin_is_trusted(base, base));
        assert!(!origin_is_trusted("https://evil.example", base));
        assert!(!origin_is_trusted("", base));
        // Containment admits origins that merely embed the base string.
        assert!(origin_is_trusted("https://app.stackbeam.io.evil.example", base));
    }
}
