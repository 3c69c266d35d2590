use yew::prelude::*;

use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: &'static [Service],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="services-inner">
                <h2>{"服务项目"}</h2>
                <div class="services-grid">
                    { for props.services.iter().map(|service| html! {
                        <div key={service.title} class="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <div class="feature-tags">
                                { for service.features.iter().map(|feature| html! {
                                    <span class="feature-tag">{*feature}</span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 5rem 1rem;
                    background: #111827;
                }

                .services-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .services-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 0 0 4rem 0;
                }

                .services-grid {
                    display: grid;
                    gap: 2rem;
                }

                .service-card {
                    padding: 1.5rem;
                    background: #1f2937;
                    border-radius: 12px;
                    transition: background 0.2s;
                }

                .service-card:hover {
                    background: #374151;
                }

                .service-card h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1rem 0;
                }

                .service-card p {
                    color: #9ca3af;
                    margin: 0 0 1.5rem 0;
                }

                .feature-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .feature-tag {
                    padding: 0.25rem 0.75rem;
                    background: #111827;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
