use std::rc::Rc;

use log::debug;
use yew::prelude::*;

pub enum MenuAction {
    Toggle,
    Close,
}

/// Open/closed state of the collapsible mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn panel_class(self) -> &'static str {
        if self.open {
            "mobile-panel mobile-menu-open"
        } else {
            "mobile-panel"
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        debug!("mobile menu {}", if open { "opened" } else { "closed" });
        Rc::new(Self { open })
    }
}
