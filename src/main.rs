use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod debounce;
mod components {
    pub mod nav_state;
    pub mod notification;
}
mod onboarding {
    pub mod button;
    pub mod launcher;
    pub mod modal;
    pub mod relay;
}
mod pages {
    pub mod docs;
    pub mod home;
    pub mod pricing;
}

use analytics::{send_ga_event, GaEvent};
use components::nav_state::{header_background, DropdownState, HeaderBackground, MenuState};
use components::notification::NotificationBar;
use onboarding::button::OnboardingButton;
use onboarding::launcher::LaunchOptions;
use onboarding::modal::OnboardingModal;
use onboarding::relay;
use pages::{docs::Docs, home::Home, pricing::Pricing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/docs")]
    Docs,
}

fn switch(routes: Route, on_launch: Callback<LaunchOptions>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home on_launch={on_launch} /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing on_launch={on_launch} /> }
        }
        Route::Docs => {
            info!("Rendering Docs page");
            html! { <Docs /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_launch: Callback<LaunchOptions>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let background = use_state(|| HeaderBackground::Transparent);
    let menu = use_state(|| MenuState::Closed);
    let docs_dropdown = use_state(|| DropdownState::Closed);
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        let background = background.clone();
        use_effect_with_deps(
            move |pathname: &String| {
                let window = web_sys::window().unwrap();
                let pathname = pathname.clone();

                // Set up from the current position in case the page loads
                // already scrolled.
                background.set(header_background(
                    &pathname,
                    window.page_y_offset().unwrap_or(0.0),
                ));

                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.page_y_offset().unwrap_or(0.0);
                    background.set(header_background(&pathname, scroll_y));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            pathname,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MenuState::Closed);
        })
    };

    let open_docs_dropdown = {
        let docs_dropdown = docs_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            docs_dropdown.set(DropdownState::after_hover(true));
        })
    };

    let close_docs_dropdown = {
        let docs_dropdown = docs_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            docs_dropdown.set(DropdownState::after_hover(false));
        })
    };

    let header_class = classes!(
        (*background == HeaderBackground::Solid).then(|| "bg-secondary"),
        (*menu).is_open().then(|| "mobile-expanded"),
    );
    let menu_class = if (*menu).is_open() {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header id="main-header" class={header_class}>
            <style>
                {r#"
                    #main-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        color: #fff;
                        transition: background 0.2s ease;
                    }
                    #main-header.bg-secondary,
                    #main-header.mobile-expanded {
                        background: #16213e;
                    }
                    #main-header .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    #main-header .nav-logo {
                        font-weight: bold;
                        font-size: 1.2rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    #main-header .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    #main-header .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                    }
                    #main-header .dropdown {
                        position: relative;
                    }
                    #main-header .dropdown-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        display: flex;
                        flex-direction: column;
                        min-width: 180px;
                        padding: 0.5rem 0;
                        background: #16213e;
                        border-radius: 6px;
                    }
                    #main-header .dropdown-menu a {
                        padding: 0.4rem 1rem;
                    }
                    #main-header .nav-cta {
                        padding: 0.5rem 1.2rem;
                        border: none;
                        border-radius: 6px;
                        background: #2e86de;
                        color: #fff;
                        cursor: pointer;
                    }
                    #main-header .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: transparent;
                        border: none;
                        cursor: pointer;
                    }
                    #main-header .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        #main-header .burger-menu {
                            display: flex;
                        }
                        #main-header .nav-right {
                            display: none;
                        }
                        #main-header .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 2rem;
                            background: #16213e;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content" id="siteNavigation">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Stackbeam"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div
                        class="dropdown"
                        onmouseenter={open_docs_dropdown}
                        onmouseleave={close_docs_dropdown}
                    >
                        <span class="dropdown-toggle nav-link">{"Docs"}</span>
                        {
                            if (*docs_dropdown).is_open() {
                                html! {
                                    <div class="dropdown-menu">
                                        <a class="nav-link" href="/docs#installation">{"Installation"}</a>
                                        <a class="nav-link" href="/docs#instrumentation">{"Instrumentation"}</a>
                                        <a class="nav-link" href="/docs#dashboards">{"Dashboards"}</a>
                                        <a class="nav-link" href="/docs#release-notes">{"Release notes"}</a>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Pricing"}
                        </Link<Route>>
                    </div>
                    <OnboardingButton
                        classes={classes!("nav-cta")}
                        on_launch={props.on_launch.clone()}
                    >
                        {"Get Started"}
                    </OnboardingButton>
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let onboarding = use_state(|| None::<LaunchOptions>);

    let on_launch = {
        let onboarding = onboarding.clone();
        Callback::from(move |options: LaunchOptions| onboarding.set(Some(options)))
    };
    let on_close = {
        let onboarding = onboarding.clone();
        Callback::from(move |_: ()| onboarding.set(None))
    };

    // Relay messages posted by the embedded application for as long as
    // the app is mounted.
    {
        let on_close = on_close.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let message_callback = Closure::wrap(Box::new(move |event: MessageEvent| {
                    relay::handle_message(&event, &on_close);
                })
                    as Box<dyn FnMut(MessageEvent)>);
                window
                    .add_event_listener_with_callback(
                        "message",
                        message_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "message",
                            message_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Landing on the page with #get-started opens onboarding directly.
    {
        let on_launch = on_launch.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().unwrap_or_default() == "#get-started" {
                        send_ga_event(GaEvent::OnboardingStart, "Via URL");
                        on_launch.emit(LaunchOptions::default());
                    }
                }
                || ()
            },
            (),
        );
    }

    let render = {
        let on_launch = on_launch.clone();
        move |route: Route| switch(route, on_launch.clone())
    };

    html! {
        <BrowserRouter>
            <NotificationBar id="stackbeam-2-0-release">
                <span>
                    {"Stackbeam 2.0 is out. "}
                    <a href="/docs#release-notes">{"See what changed"}</a>
                </span>
            </NotificationBar>
            <Nav on_launch={on_launch.clone()} />
            <Switch<Route> render={render} />
            <OnboardingModal options={(*onboarding).clone()} on_close={on_close} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
