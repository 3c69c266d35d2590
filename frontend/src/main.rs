use yew::prelude::*;
use log::info;

mod config;
mod content;
mod menu;
mod rotation;
mod shell;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use shell::Shell;


#[function_component]
fn App() -> Html {
    html! {
        <Shell>
            <Home />
        </Shell>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
