use yew::prelude::*;

use crate::content::{RegistrationLink, COPYRIGHT, ICP_RECORD, PUBLIC_SECURITY_RECORD};

fn registration_link(link: &RegistrationLink) -> Html {
    html! {
        <a href={link.href} target="_blank" rel="noopener noreferrer" class="footer-link">
            {
                if let Some(icon) = link.icon {
                    html! { <img src={icon} alt="公安备案图标" class="footer-badge" /> }
                } else {
                    html! {}
                }
            }
            {link.label}
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-left">
                    <span>{COPYRIGHT}</span>
                    <span class="footer-divider">{"|"}</span>
                    {registration_link(&ICP_RECORD)}
                </div>
                <div class="footer-right">
                    {registration_link(&PUBLIC_SECURITY_RECORD)}
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    padding: 1rem 0;
                    margin-top: auto;
                }

                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.5rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .footer-left {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                }

                .footer-divider {
                    display: none;
                }

                .footer-link {
                    display: flex;
                    align-items: center;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-badge {
                    width: 1rem;
                    height: 1rem;
                    margin-right: 0.5rem;
                }

                @media (min-width: 768px) {
                    .footer-inner {
                        flex-direction: row;
                        padding: 0 2rem;
                    }
                    .footer-left {
                        flex-direction: row;
                        gap: 1rem;
                    }
                    .footer-divider {
                        display: inline;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
