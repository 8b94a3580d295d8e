use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::DeckTableView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DeckTableView)] Table {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let api_label = ctx.api_label().to_string();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Deck Table" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "app-footer", "Deck API: {api_label}" }
        }
    }
}
