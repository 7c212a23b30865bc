use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::debounce::{debounce, DEFAULT_DEBOUNCE_MS};
use crate::onboarding::launcher::{build_onboarding_url, modal_size, LaunchOptions};

#[derive(Properties, PartialEq)]
pub struct OnboardingModalProps {
    /// `Some` shows the modal, `None` hides it. Re-setting while shown
    /// simply reconfigures the iframe.
    #[prop_or_default]
    pub options: Option<LaunchOptions>,
    pub on_close: Callback<()>,
}

fn viewport_size() -> (f64, f64) {
    let window = web_sys::window();
    let width = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

#[function_component(OnboardingModal)]
pub fn onboarding_modal(props: &OnboardingModalProps) -> Html {
    let viewport = use_state(viewport_size);

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let on_resize = debounce(DEFAULT_DEBOUNCE_MS, move |_: ()| {
                    viewport.set(viewport_size());
                });
                let resize_callback =
                    Closure::wrap(Box::new(move || on_resize(())) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let options = match &props.options {
        Some(options) => options.clone(),
        // Unmounting the iframe drops its browsing context, which stops
        // any audio or background activity in the embedded page.
        None => return html! {},
    };

    let (viewport_width, viewport_height) = *viewport;
    let (width, height) = modal_size(viewport_width, viewport_height, options.compact);
    let url = build_onboarding_url(config::embedded_app_origin(), &options);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id="onboarding-modal" class="onboarding-modal" onclick={close.clone()}>
            <style>
                {r#"
                    .onboarding-modal {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: flex-start;
                        justify-content: center;
                        background: rgba(10, 12, 24, 0.7);
                        overflow-y: auto;
                        z-index: 1000;
                    }
                    .onboarding-modal-dialog {
                        position: relative;
                        margin: 2rem auto;
                        background: #fff;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
                    }
                    .onboarding-modal-dialog.small-dialog {
                        margin-top: 4rem;
                    }
                    .onboarding-modal-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        border: none;
                        background: transparent;
                        font-size: 1.5rem;
                        line-height: 1;
                        cursor: pointer;
                        z-index: 1;
                    }
                    .onboarding-modal iframe {
                        display: block;
                        border: none;
                        max-width: 100%;
                    }
                "#}
            </style>
            <div
                class={classes!(
                    "onboarding-modal-dialog",
                    options.compact.then(|| "small-dialog")
                )}
                onclick={keep_open}
            >
                <button class="onboarding-modal-close" onclick={close}>{"×"}</button>
                <iframe
                    id="onboarding-iframe"
                    src={url}
                    width={format!("{}", width as u32)}
                    height={format!("{}", height as u32)}
                />
            </div>
        </div>
    }
}
