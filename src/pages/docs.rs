use yew::prelude::*;

const SECTIONS: [(&str, &str, &str); 4] = [
    (
        "installation",
        "Installation",
        "Add the Stackbeam agent to your service and point it at your environment key.",
    ),
    (
        "instrumentation",
        "Instrumentation",
        "Automatic instrumentation for supported frameworks, manual spans for everything else.",
    ),
    (
        "dashboards",
        "Dashboards",
        "Service maps, latency breakdowns and error rates out of the box.",
    ),
    (
        "release-notes",
        "Release notes",
        "What changed in each Stackbeam release.",
    ),
];

#[function_component(Docs)]
pub fn docs() -> Html {
    html! {
        <div class="docs-page">
            <style>
                {r#"
                    .docs-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                    }
                    .docs-page section {
                        margin-bottom: 2.5rem;
                    }
                "#}
            </style>
            <h1>{"Documentation"}</h1>
            {
                SECTIONS.iter().map(|(anchor, title, blurb)| html! {
                    <section id={*anchor} key={*anchor}>
                        <h2>{*title}</h2>
                        <p>{*blurb}</p>
                    </section>
                }).collect::<Html>()
            }
        </div>
    }
}
