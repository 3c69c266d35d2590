use yew::prelude::*;

use crate::content::BACKGROUND_IMAGE;
use crate::rotation::FadeState;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub phrase: &'static str,
    pub fade: FadeState,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = format!("background-image: url('{}');", BACKGROUND_IMAGE);

    html! {
        <section id="about" class="hero-section" style={background}>
            <div class="hero-overlay"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>
                        {"我们专注"}
                        <span class={classes!("rotating-phrase", props.fade.class())}>
                            {props.phrase}
                        </span>
                    </h1>
                    <h3>{"从后端到前端，我们以高效、创新的方式应对各种技术挑战。"}</h3>
                    <div class="hero-actions">
                        <a href="#projects" class="hero-button secondary">{"查看案例"}</a>
                        <a href="#contact" class="hero-button primary">{"加入我们"}</a>
                    </div>
                </div>

                <div class="hero-panel">
                    <div class="status">
                        <div><span class="muted">{"#"}</span>{" 最新动态"}</div>
                        <div><span class="muted">{"$"}</span>{" 当前进行中项目：2"}</div>
                    </div>
                    <div class="strengths">
                        <div class="strengths-title">{"核心优势"}</div>
                        <div class="strengths-value font-mono">
                            <span class="muted">{"{"}</span>
                            <span class="key">{"\"技术\""}</span>
                            <span class="muted">{":"}</span>
                            <span class="value">{"\"创新\""}</span>
                            <span class="muted">{"}"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 3rem 1rem;
                    background-repeat: no-repeat;
                    background-size: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }

                .hero-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1280px;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }

                .hero-copy, .hero-panel {
                    flex: 1 1 auto;
                    width: 100%;
                    max-width: 42rem;
                }

                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .hero-copy h1 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.25;
                    margin: 0;
                }

                .rotating-phrase {
                    background: linear-gradient(90deg, #2385FC, #4C23FC);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    transition: opacity 1s;
                }

                .rotating-phrase.fade-in {
                    opacity: 1;
                }

                .rotating-phrase.fade-out {
                    opacity: 0;
                }

                .hero-copy h3 {
                    font-size: 1.125rem;
                    font-weight: 400;
                    line-height: 1.6;
                    color: #d1d5db;
                    margin: 0;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .hero-button {
                    flex: 1;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    color: #fff;
                    text-align: center;
                    text-decoration: none;
                    transition: opacity 0.2s;
                }

                .hero-button:hover {
                    opacity: 0.8;
                }

                .hero-button.secondary {
                    background: #000;
                    border: 1px solid #4b5563;
                }

                .hero-button.primary {
                    background: #2563eb;
                }

                .hero-panel {
                    background: #111827;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }

                .hero-panel .status {
                    color: #4ade80;
                    font-size: 0.875rem;
                }

                .hero-panel .status > div {
                    margin-bottom: 1rem;
                }

                .muted {
                    color: #9ca3af;
                }

                .strengths {
                    border-top: 1px solid #374151;
                    padding-top: 1.5rem;
                }

                .strengths-title {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    margin-bottom: 0.5rem;
                }

                .strengths-value {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.125rem;
                }

                .strengths-value .key {
                    color: #4ade80;
                }

                .strengths-value .value {
                    color: #facc15;
                }

                @media (min-width: 640px) {
                    .hero-actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero-section {
                        padding: 6rem 2rem;
                    }
                    .hero-copy h1 {
                        font-size: 3rem;
                    }
                    .hero-panel {
                        padding: 2rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-inner {
                        flex-direction: row;
                        gap: 3rem;
                    }
                    .hero-copy h1 {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
