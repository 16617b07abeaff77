use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, PracticeView, QuestionsView, TopicsView};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/questions?:category", QuestionsView)] Questions { category: String },
        #[route("/practice", PracticeView)] Practice {},
        #[route("/topics", TopicsView)] Topics {},
}

impl Route {
    /// Question browser with every category shown.
    #[must_use]
    pub fn all_questions() -> Self {
        Self::Questions {
            category: String::new(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: Route::Home {}, "JSInterviewPro" }
            ul { class: "navbar__links",
                li { Link { to: Route::all_questions(), "Questions" } }
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Topics {}, "Topics" } }
            }
        }
    }
}
