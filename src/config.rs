/// Hostnames that mean the site is being served from a local checkout.
const LOCAL_HOSTNAMES: [&str; 2] = ["0.0.0.0", "localhost"];

pub const LOCAL_EMBEDDED_APP_ORIGIN: &str = "http://localhost:9999";
pub const PRODUCTION_EMBEDDED_APP_ORIGIN: &str = "https://app.stackbeam.io";

/// Origin of the embedded onboarding application for a given page hostname.
pub fn embedded_app_origin_for(hostname: &str) -> &'static str {
    if LOCAL_HOSTNAMES.contains(&hostname) {
        LOCAL_EMBEDDED_APP_ORIGIN
    } else {
        PRODUCTION_EMBEDDED_APP_ORIGIN
    }
}

pub fn embedded_app_origin() -> &'static str {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    embedded_app_origin_for(&hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hostnames_select_the_development_origin() {
        assert_eq!(embedded_app_origin_for("localhost"), LOCAL_EMBEDDED_APP_ORIGIN);
        assert_eq!(embedded_app_origin_for("0.0.0.0"), LOCAL_EMBEDDED_APP_ORIGIN);
    }

    #[test]
    fn any_other_hostname_selects_the_production_origin() {
        assert_eq!(
            embedded_app_origin_for("stackbeam.io"),
            PRODUCTION_EMBEDDED_APP_ORIGIN
        );
        assert_eq!(embedded_app_origin_for(""), PRODUCTION_EMBEDDED_APP_ORIGIN);
        assert_eq!(
            embedded_app_origin_for("127.0.0.1"),
            PRODUCTION_EMBEDDED_APP_ORIGIN
        );
    }
}
