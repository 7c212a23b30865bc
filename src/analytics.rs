use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;

/// The fixed set of analytics events this site is allowed to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaEvent {
    OnboardingStart,
    OnboardingStartSignup,
    OnboardingChooseIntegration,
    OnboardingChooseProjectType,
    OnboardingSignup,
}

impl GaEvent {
    pub const ALL: [GaEvent; 5] = [
        GaEvent::OnboardingStart,
        GaEvent::OnboardingStartSignup,
        GaEvent::OnboardingChooseIntegration,
        GaEvent::OnboardingChooseProjectType,
        GaEvent::OnboardingSignup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GaEvent::OnboardingStart => "onboarding_start",
            GaEvent::OnboardingStartSignup => "onboarding_start_signup",
            GaEvent::OnboardingChooseIntegration => "onboarding_choose_integration",
            GaEvent::OnboardingChooseProjectType => "onboarding_choose_project_type",
            GaEvent::OnboardingSignup => "onboarding_signup",
        }
    }

    pub fn from_category(category: &str) -> Option<GaEvent> {
        GaEvent::ALL.into_iter().find(|event| event.name() == category)
    }

    pub fn allowed_categories() -> String {
        GaEvent::ALL.map(GaEvent::name).join(", ")
    }
}

#[derive(Serialize)]
struct DataLayerEntry<'a> {
    event: &'a str,
    #[serde(rename = "eventLabel")]
    event_label: &'a str,
}

/// Pushes an event onto the tag-manager `dataLayer`. Pages without the
/// snippet simply drop the event.
pub fn send_ga_event(event: GaEvent, label: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(global) = js_sys::Reflect::get(&window, &JsValue::from_str("dataLayer")) {
            if let Some(data_layer) = global.dyn_ref::<js_sys::Array>() {
                let entry = DataLayerEntry {
                    event: event.name(),
                    event_label: label,
                };
                if let Ok(value) = serde_wasm_bindgen::to_value(&entry) {
                    data_layer.push(&value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_name_round_trips_through_the_category_lookup() {
        for event in GaEvent::ALL {
            assert_eq!(GaEvent::from_category(event.name()), Some(event));
        }
    }

    #[test]
    fn unknown_categories_are_rejected() {
        assert_eq!(GaEvent::from_category("onboarding_launch"), None);
        assert_eq!(GaEvent::from_category(""), None);
    }

    #[test]
    fn allowed_categories_lists_the_full_set() {
        assert_eq!(
            GaEvent::allowed_categories(),
            "onboarding_start, onboarding_start_signup, onboarding_choose_integration, \
             onboarding_choose_project_type, onboarding_signup"
        );
    }
}
