use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// Looping call preview: the phone rings, the agent picks up, a short
/// transcript plays out, then everything resets.
#[function_component(CallPreview)]
pub fn call_preview() -> Html {
    let stage = use_state(|| 0u32);

    {
        let stage_clone = stage.clone();
        let stage_setter = stage.setter();
        use_effect(move || {
            let delay = match *stage_clone {
                0 => 0,    // Start immediately
                1 => 1800, // Ringing, then agent answers
                2 => 1400, // Greeting line
                3 => 1600, // Caller line
                4 => 1600, // Resolution line
                5 => 4000, // Hold the finished transcript, then reset
                _ => 0,
            };

            let next_stage = match *stage_clone {
                5 => 1, // Loop back to ringing
                _ => *stage_clone + 1,
            };

            let timeout = Timeout::new(delay, move || {
                stage_setter.set(next_stage);
            });
            timeout.forget();

            || ()
        });
    }

    let status = match *stage {
        1 => "Ringing...",
        2 => "Connected · 00:03",
        3 => "Connected · 00:07",
        4 => "Connected · 00:11",
        5 => "Resolved · 00:14",
        _ => "",
    };

    let lines: &[(&str, &str)] = match *stage {
        2 => &[("agent", "Hi, this is Echo from EchoCall. How can I help?")],
        3 => &[
            ("agent", "Hi, this is Echo from EchoCall. How can I help?"),
            ("caller", "I need to move my delivery to Friday."),
        ],
        4 | 5 => &[
            ("agent", "Hi, this is Echo from EchoCall. How can I help?"),
            ("caller", "I need to move my delivery to Friday."),
            ("agent", "Done. It's rescheduled for Friday between 9 and 11."),
        ],
        _ => &[],
    };

    let card_class = if *stage == 1 { "call-card ringing" } else { "call-card" };

    html! {
        <div class="call-preview">
            <style>
                {r#"
                    .call-preview {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        width: 100%;
                    }
                    @keyframes lineIn {
                        from { transform: translateY(8px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes ringPulse {
                        0% { box-shadow: 0 0 0 0 rgba(30, 144, 255, 0.5); }
                        70% { box-shadow: 0 0 0 24px rgba(30, 144, 255, 0); }
                        100% { box-shadow: 0 0 0 0 rgba(30, 144, 255, 0); }
                    }
                    .call-card {
                        width: 360px;
                        min-height: 280px;
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 24px;
                        padding: 1.5rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .call-card.ringing {
                        animation: ringPulse 1.2s ease-out infinite;
                    }
                    .call-card-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .call-avatar {
                        width: 40px;
                        height: 40px;
                        border-radius: 12px;
                        background: #1E90FF;
                        display: grid;
                        place-items: center;
                        font-size: 1.1rem;
                    }
                    .call-card-title { color: #fff; font-weight: 600; }
                    .call-card-status {
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.8rem;
                    }
                    .call-line {
                        border-radius: 12px;
                        padding: 0.6rem 0.85rem;
                        margin-bottom: 0.5rem;
                        font-size: 0.85rem;
                        line-height: 1.4;
                        animation: lineIn 0.4s ease-out;
                    }
                    .call-line.agent {
                        background: rgba(30, 144, 255, 0.15);
                        color: #cfe5ff;
                    }
                    .call-line.caller {
                        background: rgba(255, 255, 255, 0.08);
                        color: #ddd;
                        margin-left: 2rem;
                    }
                "#}
            </style>
            <div class={card_class}>
                <div class="call-card-header">
                    <div class="call-avatar">{"🤖"}</div>
                    <div>
                        <div class="call-card-title">{"Echo"}</div>
                        <div class="call-card-status">{status}</div>
                    </div>
                </div>
                {
                    for lines.iter().map(|(who, text)| {
                        html! {
                            <div key={format!("{}-{}", who, text)} class={format!("call-line {}", who)}>
                                {*text}
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
