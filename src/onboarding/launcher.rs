use crate::analytics::GaEvent;

pub const DEFAULT_EXTERNAL_PATH: &str = "onboarding";

const COMPACT_MAX_WIDTH: f64 = 600.0;
const FULL_MAX_WIDTH: f64 = 1200.0;
const MIN_HEIGHT: f64 = 800.0;

/// Billing plan preselected inside the embedded onboarding application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Plan {
    #[default]
    Starter,
    Teams,
    Developer,
}

impl Plan {
    /// Unrecognized names fall back to the starter plan.
    pub fn parse(name: &str) -> Plan {
        match name {
            "teams" => Plan::Teams,
            "developer" => Plan::Developer,
            _ => Plan::Starter,
        }
    }

    /// Plan identifier understood by the embedded application.
    pub fn code(self) -> &'static str {
        match self {
            Plan::Starter => "v3-starter",
            Plan::Teams => "v3-teams",
            Plan::Developer => "v2-free",
        }
    }
}

/// One launch of the onboarding modal. Built at the trigger site and
/// consumed by the modal; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Path inside the embedded application, without a leading slash.
    pub external_path: Option<String>,
    /// Smaller dialog without the extra graphics.
    pub compact: bool,
    /// Integration the embedded application should show instructions for.
    pub solution: Option<String>,
    pub plan: Option<Plan>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        LaunchOptions {
            external_path: None,
            compact: true,
            solution: None,
            plan: None,
        }
    }
}

impl LaunchOptions {
    /// The analytics event emitted right before the modal opens. Signup
    /// launches are tracked separately from generic starts.
    pub fn pre_launch_event(&self) -> GaEvent {
        if self.external_path.as_deref() == Some("signup") {
            GaEvent::OnboardingStartSignup
        } else {
            GaEvent::OnboardingStart
        }
    }
}

/// Absolute URL loaded into the onboarding iframe. `external=yes` marks
/// the embedded session as iframe-hosted and is always present.
pub fn build_onboarding_url(base_origin: &str, options: &LaunchOptions) -> String {
    let path = options
        .external_path
        .as_deref()
        .unwrap_or(DEFAULT_EXTERNAL_PATH);

    let mut query = String::from("external=yes");
    if let Some(solution) = &options.solution {
        query.push_str(&format!("&solution={}", urlencoding::encode(solution)));
    }
    if let Some(plan) = options.plan {
        query.push_str(&format!("&plan={}", plan.code()));
    }
    if options.compact {
        query.push_str("&small=true");
    }

    format!("{}/{}?{}", base_origin, path, query)
}

/// Iframe dimensions: capped width, never shorter than the viewport.
pub fn modal_size(viewport_width: f64, viewport_height: f64, compact: bool) -> (f64, f64) {
    let max_width = if compact { COMPACT_MAX_WIDTH } else { FULL_MAX_WIDTH };
    (viewport_width.min(max_width), viewport_height.max(MIN_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_names_map_to_plan_codes() {
        assert_eq!(Plan::parse("starter").code(), "v3-starter");
        assert_eq!(Plan::parse("teams").code(), "v3-teams");
        assert_eq!(Plan::parse("developer").code(), "v2-free");
        assert_eq!(Plan::parse("enterprise").code(), "v3-starter");
        assert_eq!(Plan::default().code(), "v3-starter");
    }

    #[test]
    fn builds_the_full_url_with_every_option_set() {
        let options = LaunchOptions {
            external_path: Some("foo".to_string()),
            compact: false,
            solution: Some("bar".to_string()),
            plan: Some(Plan::Teams),
        };
        assert_eq!(
            build_onboarding_url("https://apm.example", &options),
            "https://apm.example/foo?external=yes&solution=bar&plan=v3-teams"
        );
    }

    #[test]
    fn default_options_launch_the_compact_onboarding_flow() {
        assert_eq!(
            build_onboarding_url("https://apm.example", &LaunchOptions::default()),
            "https://apm.example/onboarding?external=yes&small=true"
        );
    }

    #[test]
    fn external_marker_is_always_present() {
        let variants = [
            LaunchOptions::default(),
            LaunchOptions {
                compact: false,
                ..LaunchOptions::default()
            },
            LaunchOptions {
                external_path: Some("signup".to_string()),
                plan: Some(Plan::Developer),
                ..LaunchOptions::default()
            },
        ];
        for options in &variants {
            let url = build_onboarding_url("https://apm.example", options);
            assert!(url.contains("external=yes"), "missing marker in {url}");
        }
    }

    #[test]
    fn small_flag_appears_iff_compact() {
        let compact = build_onboarding_url("https://apm.example", &LaunchOptions::default());
        assert!(compact.ends_with("&small=true"));

        let full = build_onboarding_url(
            "https://apm.example",
            &LaunchOptions {
                compact: false,
                ..LaunchOptions::default()
            },
        );
        assert!(!full.contains("small=true"));
    }

    #[test]
    fn solution_values_are_percent_encoded() {
        let options = LaunchOptions {
            solution: Some("spring boot".to_string()),
            ..LaunchOptions::default()
        };
        assert_eq!(
            build_onboarding_url("https://apm.example", &options),
            "https://apm.example/onboarding?external=yes&solution=spring%20boot&small=true"
        );
    }

    #[test]
    fn signup_launches_use_the_signup_start_event() {
        let signup = LaunchOptions {
            external_path: Some("signup".to_string()),
            ..LaunchOptions::default()
        };
        assert_eq!(signup.pre_launch_event(), GaEvent::OnboardingStartSignup);
        assert_eq!(
            LaunchOptions::default().pre_launch_event(),
            GaEvent::OnboardingStart
        );
    }

    #[test]
    fn width_is_capped_and_height_never_drops_below_the_floor() {
        assert_eq!(modal_size(1920.0, 1080.0, true), (600.0, 1080.0));
        assert_eq!(modal_size(1920.0, 1080.0, false), (1200.0, 1080.0));
        assert_eq!(modal_size(390.0, 700.0, true), (390.0, 800.0));
        assert_eq!(modal_size(390.0, 700.0, false), (390.0, 800.0));
    }
}
