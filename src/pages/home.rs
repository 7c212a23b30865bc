use yew::prelude::*;

use crate::onboarding::button::OnboardingButton;
use crate::onboarding::launcher::LaunchOptions;

const INTEGRATIONS: [(&str, &str); 4] = [
    ("Spring Boot", "spring-boot"),
    ("Akka", "akka"),
    ("Quarkus", "quarkus"),
    ("Kubernetes", "kubernetes"),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_launch: Callback<LaunchOptions>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page .hero {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        min-height: 80vh;
                        padding: 6rem 2rem 4rem;
                        text-align: center;
                        background: linear-gradient(180deg, #0b1020 0%, #16213e 100%);
                        color: #fff;
                    }
                    .landing-page .hero h1 {
                        font-size: 2.8rem;
                        max-width: 720px;
                        margin-bottom: 1rem;
                    }
                    .landing-page .hero-subtitle {
                        max-width: 560px;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 2rem;
                    }
                    .landing-page .hero-cta {
                        padding: 0.9rem 2.2rem;
                        font-size: 1.1rem;
                        border: none;
                        border-radius: 6px;
                        background: #2e86de;
                        color: #fff;
                        cursor: pointer;
                    }
                    .landing-page .integrations {
                        padding: 4rem 2rem;
                        text-align: center;
                    }
                    .landing-page .integration-grid {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        justify-content: center;
                        margin-top: 2rem;
                    }
                    .landing-page .integration-card {
                        width: 220px;
                        padding: 1.5rem;
                        border: 1px solid #e0e4ef;
                        border-radius: 8px;
                    }
                    .landing-page .integration-card button {
                        margin-top: 1rem;
                        padding: 0.5rem 1.2rem;
                        border: 1px solid #2e86de;
                        border-radius: 6px;
                        background: transparent;
                        color: #2e86de;
                        cursor: pointer;
                    }
                "#}
            </style>
            <header class="hero">
                <h1>{"See inside your services in production"}</h1>
                <p class="hero-subtitle">
                    {"Stackbeam collects traces and metrics from your services and \
                      turns them into answers, without code changes."}
                </p>
                <OnboardingButton
                    compact={false}
                    classes={classes!("hero-cta")}
                    on_launch={props.on_launch.clone()}
                >
                    {"Get Started"}
                </OnboardingButton>
            </header>
            <section class="integrations">
                <h2>{"Works with your stack"}</h2>
                <div class="integration-grid">
                    {
                        INTEGRATIONS.iter().map(|(label, solution)| html! {
                            <div class="integration-card" key={*solution}>
                                <h3>{*label}</h3>
                                <OnboardingButton
                                    solution={*solution}
                                    on_launch={props.on_launch.clone()}
                                >
                                    {"Set up"}
                                </OnboardingButton>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
