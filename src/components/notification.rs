use web_sys::MouseEvent;
use yew::prelude::*;

pub const CLOSED_NOTIFICATION_KEY: &str = "ClosedNotification";

const BODY_CLASS: &str = "has-notification";

/// The banner stays hidden only for the notification the visitor already
/// dismissed; a new id shows again.
pub fn should_show(current_id: &str, closed_id: Option<&str>) -> bool {
    closed_id != Some(current_id)
}

fn toggle_class(existing: &str, class: &str, on: bool) -> String {
    let mut classes: Vec<&str> = existing
        .split_whitespace()
        .filter(|c| *c != class)
        .collect();
    if on {
        classes.push(class);
    }
    classes.join(" ")
}

fn closed_notification() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(CLOSED_NOTIFICATION_KEY).ok())
        .flatten()
}

fn remember_closed_notification(id: &str) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(CLOSED_NOTIFICATION_KEY, id);
    }
}

fn set_body_has_notification(active: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let updated = toggle_class(&body.class_name(), BODY_CLASS, active);
        body.set_class_name(&updated);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationBarProps {
    /// Identifier of this announcement; changing it re-shows the banner
    /// for visitors who dismissed an older one.
    pub id: AttrValue,
    pub children: Children,
}

#[function_component(NotificationBar)]
pub fn notification_bar(props: &NotificationBarProps) -> Html {
    let visible = use_state({
        let id = props.id.clone();
        move || should_show(&id, closed_notification().as_deref())
    });

    {
        let shown = *visible;
        use_effect_with_deps(
            move |shown| {
                set_body_has_notification(*shown);
                || ()
            },
            shown,
        );
    }

    let dismiss = {
        let visible = visible.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            remember_closed_notification(&id);
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="notification-bar" id={props.id.clone()}>
            <style>
                {r#"
                    .notification-bar {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        padding: 0.5rem 1rem;
                        background: #1d2d50;
                        color: #fff;
                        font-size: 0.9rem;
                    }
                    .notification-bar a {
                        color: #7eb2ff;
                    }
                    .notification-bar .close {
                        text-decoration: none;
                        font-size: 1.2rem;
                        line-height: 1;
                    }
                "#}
            </style>
            <div class="notification-content">
                { for props.children.iter() }
            </div>
            <a href="#" class="close" onclick={dismiss}>{"×"}</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shows_until_its_own_id_is_dismissed() {
        assert!(should_show("N1", None));
        assert!(!should_show("N1", Some("N1")));
        assert!(should_show("N2", Some("N1")));
    }

    #[test]
    fn body_class_toggling_preserves_other_classes() {
        assert_eq!(toggle_class("", "has-notification", true), "has-notification");
        assert_eq!(
            toggle_class("dark theme", "has-notification", true),
            "dark theme has-notification"
        );
        assert_eq!(
            toggle_class("dark has-notification theme", "has-notification", false),
            "dark theme"
        );
        assert_eq!(
            toggle_class("has-notification has-notification", "has-notification", true),
            "has-notification"
        );
    }
}
