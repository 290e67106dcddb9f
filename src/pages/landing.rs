use yew::prelude::*;

use crate::components::call_trigger::CallTriggerForm;
use crate::components::hero_animation::CallPreview;

const SPLINE_SCENE: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let features = [
        (
            "🧠",
            "Understands intent",
            "LLM-powered reasoning keeps calls on track and resolves issues quickly.",
        ),
        (
            "🎙️",
            "Speaks naturally",
            "Low-latency streaming TTS and prosody make conversations feel human.",
        ),
        (
            "🛡️",
            "Secure by default",
            "PII redaction, audit logs, and role-based controls keep data safe.",
        ),
    ];

    let steps = [
        (
            "1",
            "You trigger a call",
            "Drop in a phone number below and the agent dials out within seconds.",
        ),
        (
            "2",
            "The agent handles it",
            "It greets, listens, asks follow-ups, and works the issue to resolution.",
        ),
        (
            "3",
            "You review the flow",
            "Every call is transcribed and logged so you can see exactly what happened.",
        ),
    ];

    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                    }
                    .hero-aura {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        z-index: -1;
                        pointer-events: none;
                    }
                    .hero-aura::before {
                        content: '';
                        position: absolute;
                        left: 50%;
                        top: 40%;
                        width: 1100px;
                        height: 1100px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: conic-gradient(from 0deg, #8b5cf6, #22d3ee, #1E90FF, #8b5cf6);
                        opacity: 0.12;
                        filter: blur(80px);
                    }
                    @keyframes riseIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .hero {
                        position: relative;
                        padding: 9rem 1.5rem 5rem;
                        overflow: hidden;
                    }
                    .hero-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero h1 {
                        font-size: 3.4rem;
                        line-height: 1.1;
                        margin: 0 0 1.25rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: riseIn 0.6s ease-out both;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.6;
                        margin-bottom: 1.75rem;
                        animation: riseIn 0.6s ease-out 0.1s both;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        animation: riseIn 0.6s ease-out 0.2s both;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #1E90FF;
                        color: #fff;
                        border-radius: 12px;
                        padding: 0.9rem 1.4rem;
                        font-size: 0.95rem;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
                    }
                    .hero-cta.secondary {
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        box-shadow: none;
                    }
                    .hero-badges {
                        display: flex;
                        gap: 1.5rem;
                        margin-top: 1.75rem;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .hero-scene {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        border-radius: 20px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        overflow: hidden;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                        animation: riseIn 0.6s ease-out both;
                    }
                    .hero-scene spline-viewer {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .features-section {
                        padding: 5rem 1.5rem;
                    }
                    .features-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.75rem;
                        backdrop-filter: blur(10px);
                    }
                    .feature-icon {
                        font-size: 1.5rem;
                        margin-bottom: 0.85rem;
                    }
                    .feature-card h3 {
                        color: #fff;
                        margin: 0 0 0.4rem;
                        font-size: 1.05rem;
                    }
                    .feature-card p {
                        color: rgba(255, 255, 255, 0.65);
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .how-section {
                        padding: 5rem 1.5rem;
                    }
                    .how-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .how-steps h2 {
                        font-size: 2.2rem;
                        margin: 0 0 1.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .how-step {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.25rem;
                    }
                    .how-step-number {
                        flex-shrink: 0;
                        width: 32px;
                        height: 32px;
                        border-radius: 10px;
                        background: rgba(30, 144, 255, 0.15);
                        color: #7EB2FF;
                        display: grid;
                        place-items: center;
                        font-weight: 600;
                        font-size: 0.9rem;
                    }
                    .how-step h4 {
                        color: #fff;
                        margin: 0 0 0.25rem;
                        font-size: 1rem;
                    }
                    .how-step p {
                        color: rgba(255, 255, 255, 0.65);
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .landing-footer {
                        padding: 3rem 1.5rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.85rem;
                    }
                    @media (max-width: 768px) {
                        .hero { padding-top: 7rem; }
                        .hero h1 { font-size: 2.4rem; }
                        .hero-grid, .how-inner { grid-template-columns: 1fr; }
                        .features-grid { grid-template-columns: 1fr; }
                        .hero-badges { flex-wrap: wrap; gap: 0.75rem; }
                    }
                "#}
            </style>

            <header class="hero">
                <div class="hero-aura"></div>
                <div class="hero-grid">
                    <div>
                        <h1>{"AI calling, that sounds human."}</h1>
                        <p class="hero-subtitle">
                            {"Launch a voice agent that answers, resolves, and follows up — instantly. No hold music, no scripts. Just helpful conversations."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#cta" class="hero-cta">{"📞 Trigger a test call"}</a>
                            <a href="#features" class="hero-cta secondary">{"✨ See what it can do"}</a>
                        </div>
                        <div class="hero-badges">
                            <span>{"🛡️ SOC2-ready"}</span>
                            <span>{"🎙️ Natural voice"}</span>
                            <span>{"🤖 Realtime AI"}</span>
                        </div>
                    </div>
                    <div class="hero-scene">
                        <spline-viewer url={SPLINE_SCENE}></spline-viewer>
                    </div>
                </div>
            </header>

            <section id="features" class="features-section">
                <div class="features-grid">
                    {
                        for features.iter().map(|(icon, title, desc)| {
                            html! {
                                <div key={*title} class="feature-card">
                                    <div class="feature-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section id="how" class="how-section">
                <div class="how-inner">
                    <div class="how-steps">
                        <h2>{"How it works"}</h2>
                        {
                            for steps.iter().map(|(number, title, desc)| {
                                html! {
                                    <div key={*number} class="how-step">
                                        <div class="how-step-number">{*number}</div>
                                        <div>
                                            <h4>{*title}</h4>
                                            <p>{*desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                        }
                    </div>
                    <CallPreview />
                </div>
            </section>

            <CallTriggerForm />

            <footer class="landing-footer">
                {format!("© {} EchoCall AI. All rights reserved.", year)}
            </footer>
        </div>
    }
}
