use yew::prelude::*;

use crate::content::{mobile_nav_items, NavItem, BRAND, NAV_ITEMS};
use crate::menu::MenuState;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu: MenuState,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu, on_toggle, on_close } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <div class="brand">{BRAND}</div>

                <nav class="desktop-nav">
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <NavigationItem key={item.href} item={*item} />
                        }) }
                    </ul>
                </nav>

                <button
                    class="menu-toggle"
                    onclick={toggle_menu}
                    aria-label="菜单"
                    aria-expanded={menu.open.to_string()}
                >
                    { if menu.open { close_icon() } else { menu_icon() } }
                </button>
            </div>

            <div class={menu.panel_class()}>
                <nav>
                    <ul>
                        { for mobile_links(on_close).into_iter().map(|link| html! {
                            <li>
                                // the event is discarded untouched, so the anchor still jumps to its section
                                <a href={link.item.href} class="mobile-nav-link" onclick={link.on_click.reform(|_: MouseEvent| ())}>
                                    {link.item.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                </nav>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    z-index: 30;
                }

                .header-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #60a5fa;
                }

                .desktop-nav {
                    display: none;
                }

                .desktop-nav ul {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-link {
                    position: relative;
                    display: inline-block;
                    color: #fff;
                    text-decoration: none;
                    transition: color 0.3s;
                }

                .nav-link:hover {
                    color: #60a5fa;
                }

                .nav-link .underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 3px;
                    width: 100%;
                    background: #60a5fa;
                    border-radius: 2px;
                    transform: scaleX(0);
                    transform-origin: right;
                    transition: transform 0.5s;
                }

                .nav-link:hover .underline {
                    transform: scaleX(1);
                    transform-origin: left;
                }

                .nav-link .label {
                    position: relative;
                    display: block;
                    padding-bottom: 0.25rem;
                }

                .menu-toggle {
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .mobile-panel {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: #000;
                    overflow: hidden;
                    max-height: 0;
                    transition: max-height 0.3s;
                    border-radius: 0 0 12px 12px;
                }

                .mobile-panel.mobile-menu-open {
                    max-height: 24rem;
                }

                .mobile-panel nav {
                    padding: 1rem;
                }

                .mobile-panel ul {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .mobile-nav-link {
                    display: block;
                    padding: 0.5rem 1rem;
                    color: #fff;
                    text-decoration: none;
                    border-radius: 8px;
                    transition: background 0.2s;
                }

                .mobile-nav-link:hover {
                    background: #1f2937;
                }

                @media (min-width: 768px) {
                    .site-header {
                        padding: 1.25rem;
                        border-radius: 0 0 12px 12px;
                    }
                    .brand {
                        font-size: 1.5rem;
                    }
                    .desktop-nav {
                        display: block;
                    }
                    .menu-toggle, .mobile-panel {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}

struct MobileLink {
    item: &'static NavItem,
    on_click: Callback<()>,
}

/// Entries of the mobile panel; following any of them closes the menu.
fn mobile_links(on_close: &Callback<()>) -> Vec<MobileLink> {
    mobile_nav_items()
        .map(|item| MobileLink {
            item,
            on_click: on_close.clone(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct NavigationItemProps {
    item: NavItem,
}

#[function_component(NavigationItem)]
fn navigation_item(props: &NavigationItemProps) -> Html {
    html! {
        <li>
            <a href={props.item.href} class="nav-link">
                <span class="label">
                    {props.item.label}
                    <span class="underline"></span>
                </span>
            </a>
        </li>
    }
}

fn menu_icon() -> Html {
    html! {
        <svg width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="3" y1="12" x2="21" y2="12"></line>
            <line x1="3" y1="6" x2="21" y2="6"></line>
            <line x1="3" y1="18" x2="21" y2="18"></line>
        </svg>
    }
}

fn close_icon() -> Html {
    html! {
        <svg width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </svg>
    }
}
