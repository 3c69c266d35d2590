use yew::prelude::*;

use crate::content::ContactCard;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub cards: &'static [ContactCard],
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <h2>{"联系我们"}</h2>
                <div class="contact-grid">
                    { for props.cards.iter().map(|card| html! {
                        <div key={card.email} class="contact-card">
                            <h3>{card.title}</h3>
                            <p>{card.blurb}</p>
                            <a href={card.mailto()} class={classes!("contact-action", card.accent)}>
                                {card.action}
                            </a>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1rem;
                    background: #111827;
                }

                .contact-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .contact-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 2rem 0;
                }

                .contact-grid {
                    display: grid;
                    gap: 2rem;
                }

                .contact-card {
                    padding: 2rem;
                    background: #1f2937;
                    border-radius: 12px;
                }

                .contact-card h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1rem 0;
                }

                .contact-card p {
                    color: #9ca3af;
                    margin: 0 0 1.5rem 0;
                }

                .contact-action {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    color: #fff;
                    text-decoration: none;
                }

                .contact-action:hover {
                    opacity: 0.8;
                }

                .bg-blue-600 {
                    background: #2563eb;
                }

                .bg-green-600 {
                    background: #16a34a;
                }

                @media (min-width: 768px) {
                    .contact-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
