use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::send_ga_event;
use crate::onboarding::launcher::{LaunchOptions, Plan};

/// Call-to-action that opens the onboarding modal. The launch options are
/// declared as typed props at the trigger site; the click handler only
/// packages them up and reports the start.
#[derive(Properties, PartialEq)]
pub struct OnboardingButtonProps {
    #[prop_or_default]
    pub external_path: Option<AttrValue>,
    #[prop_or(true)]
    pub compact: bool,
    #[prop_or_default]
    pub solution: Option<AttrValue>,
    /// Plan name as declared at the trigger site; unrecognized names
    /// fall back to the starter plan.
    #[prop_or_default]
    pub plan: Option<AttrValue>,
    #[prop_or_default]
    pub classes: Classes,
    pub on_launch: Callback<LaunchOptions>,
    pub children: Children,
}

#[function_component(OnboardingButton)]
pub fn onboarding_button(props: &OnboardingButtonProps) -> Html {
    let onclick = {
        let external_path = props.external_path.clone();
        let compact = props.compact;
        let solution = props.solution.clone();
        let plan = props.plan.clone();
        let on_launch = props.on_launch.clone();
        Callback::from(move |_: MouseEvent| {
            let options = LaunchOptions {
                external_path: external_path.as_ref().map(|path| path.to_string()),
                compact,
                solution: solution.as_ref().map(|solution| solution.to_string()),
                plan: plan.as_ref().map(|name| Plan::parse(name)),
            };
            send_ga_event(options.pre_launch_event(), "Via CTA");
            on_launch.emit(options);
        })
    };

    html! {
        <button class={classes!("onboarding-start-button", props.classes.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
