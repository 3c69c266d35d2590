use yew::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, header::Header, hero::Hero, services::Services,
};
use crate::content::{CONTACT_CARDS, PHRASES, SERVICES};
use crate::menu::{MenuAction, MenuState};
use crate::rotation::{PhraseRotation, RotationTimer};

#[function_component(Home)]
pub fn home() -> Html {
    let rotation = use_reducer(|| PhraseRotation::new(PHRASES.len()));
    let menu = use_reducer(MenuState::default);

    // Runs once on mount; the teardown drops the timer, cancelling the tick and any pending swap.
    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timer = RotationTimer::start(dispatcher);
                move || drop(timer)
            },
            (),
        );
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Toggle))
    };

    let on_close = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    html! {
        <div class="home">
            <Header menu={*menu} on_toggle={on_toggle} on_close={on_close} />
            <main>
                <Hero phrase={rotation.current(&PHRASES)} fade={rotation.fade} />
                <Services services={SERVICES} />
                <Contact cards={CONTACT_CARDS} />
            </main>
            <Footer />

            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background: #000;
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
