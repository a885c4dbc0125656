use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::cursor::PointerClass;
use crate::lifecycle::MountToken;
use crate::trends::{refresh_ticker, GeminiTrends};

#[function_component(TrendTicker)]
pub fn trend_ticker() -> Html {
    let message = use_state(|| config::TICKER_PLACEHOLDER.to_string());

    {
        let message = message.clone();
        use_effect_with_deps(
            move |_| {
                let token = MountToken::new();
                let request_token = token.clone();
                // Same capability gate as the cursor: touch devices keep the placeholder
                let class = web_sys::window()
                    .map(|window| PointerClass::detect(&window))
                    .unwrap_or(PointerClass::Coarse);
                spawn_local(async move {
                    refresh_ticker(class, &GeminiTrends, &request_token, move |text| {
                        message.set(text)
                    })
                    .await;
                });
                move || {
                    token.revoke();
                }
            },
            (),
        );
    }

    html! {
        <div class="trend-ticker" aria-live="polite">
            <style>
                {r#"
                    .trend-ticker {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 0.75rem 1.5rem;
                        background: #9333ea;
                        color: #000;
                        overflow: hidden;
                        white-space: nowrap;
                        font-size: 0.7rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                    }
                    .trend-ticker-label {
                        flex-shrink: 0;
                        padding-right: 1.5rem;
                        border-right: 1px solid rgba(0, 0, 0, 0.3);
                    }
                    .trend-ticker-track {
                        display: flex;
                        gap: 4rem;
                        animation: marquee 40s linear infinite;
                    }
                "#}
            </style>
            <span class="trend-ticker-label">{"LIVE SIGNAL"}</span>
            <div class="trend-ticker-track">
                { for (0..3).map(|i| html! {
                    <span key={i}>{ (*message).clone() }</span>
                }) }
            </div>
        </div>
    }
}
