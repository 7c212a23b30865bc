use yew::prelude::*;

use crate::onboarding::button::OnboardingButton;
use crate::onboarding::launcher::LaunchOptions;

const PLANS: [(&str, &str, &str, &str); 3] = [
    (
        "starter",
        "Starter",
        "Free",
        "One environment, 7 days of retention. For trying things out.",
    ),
    (
        "teams",
        "Teams",
        "$99/mo",
        "Unlimited environments, 30 days of retention, alerting.",
    ),
    (
        "developer",
        "Developer",
        "Free",
        "Local development only. All instruments, no retention.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub on_launch: Callback<LaunchOptions>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <div class="pricing-page">
            <style>
                {r#"
                    .pricing-page {
                        padding: 8rem 2rem 4rem;
                        text-align: center;
                    }
                    .pricing-grid {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2rem;
                        justify-content: center;
                        margin-top: 3rem;
                    }
                    .plan-card {
                        width: 280px;
                        padding: 2rem;
                        border: 1px solid #e0e4ef;
                        border-radius: 10px;
                        text-align: left;
                    }
                    .plan-card .plan-price {
                        font-size: 2rem;
                        margin: 0.5rem 0 1rem;
                    }
                    .plan-card button {
                        width: 100%;
                        margin-top: 1.5rem;
                        padding: 0.7rem;
                        border: none;
                        border-radius: 6px;
                        background: #2e86de;
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>
            <h1>{"Pricing"}</h1>
            <p>{"Start on any plan, switch whenever you want."}</p>
            <div class="pricing-grid">
                {
                    PLANS.iter().map(|(plan, name, price, blurb)| html! {
                        <div class="plan-card" key={*plan}>
                            <h3>{*name}</h3>
                            <div class="plan-price">{*price}</div>
                            <p>{*blurb}</p>
                            <OnboardingButton
                                external_path="signup"
                                plan={*plan}
                                on_launch={props.on_launch.clone()}
                            >
                                {"Start with "}{*name}
                            </OnboardingButton>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
