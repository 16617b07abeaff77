use dioxus::prelude::*;
use dioxus_router::Link;

use prep_core::filter::{DifficultyFilter, QuestionFilter};
use prep_core::model::QuestionId;
use services::{QuestionCatalog, StudyProgress};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuestionCardVm, map_question_cards};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuestionsView(category: String) -> Element {
    let ctx = use_context::<AppContext>();
    let question_service = ctx.questions();

    let filter = use_signal(QuestionFilter::default);
    let progress = use_signal(StudyProgress::new);

    // Keyed on the query category so a route change re-resolves the preselection.
    let resource = use_resource(use_reactive((&category,), move |(category,)| {
        let question_service = question_service.clone();
        let mut filter = filter;
        async move {
            let catalog = question_service.catalog().await.map_err(|err| {
                warn!(error = %err, "failed to load questions");
                ViewError::Unknown
            })?;
            filter.write().category = catalog.resolve_category(&category);
            Ok::<_, ViewError>(catalog)
        }
    }));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionsTestHandles>() {
                handles.register(filter, progress);
            }
        }
    }

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page page--questions",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    QuestionBrowser { data, filter, progress }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error",
                        p { "{err.message()}" }
                        button {
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionBrowser(
    data: QuestionCatalog,
    filter: Signal<QuestionFilter>,
    progress: Signal<StudyProgress>,
) -> Element {
    let total = data.questions.len();
    let current = filter.read().clone();
    let cards = {
        let progress = progress.read();
        let visible = data.filtered(&current, progress.bookmarked());
        map_question_cards(visible, &progress)
    };
    let completion_rate = progress.read().completion_rate(total);
    let bookmark_count = progress.read().bookmarked().len();
    let bookmark_class = if current.bookmarked_only {
        "chip chip--active"
    } else {
        "chip"
    };

    let on_toggle_bookmark = move |id: QuestionId| {
        let mut progress = progress;
        progress.write().toggle_bookmark(id);
    };
    let on_toggle_completed = move |id: QuestionId| {
        let mut progress = progress;
        progress.write().toggle_completed(id);
    };
    let reset_filters = move |_: MouseEvent| {
        let mut filter = filter;
        filter.write().reset();
    };

    rsx! {
        header { class: "page-header",
            Link { class: "back-link", to: Route::Home {}, "Back to Home" }
            h2 { "Interview Questions" }
            p { "Master JavaScript concepts step by step" }
            div { class: "completion",
                span { class: "completion__label", "Progress" }
                span { class: "completion__value", "{completion_rate}%" }
                progress { max: "100", value: "{completion_rate}" }
            }
        }

        div { class: "card filters",
            input {
                class: "filters__search",
                r#type: "search",
                placeholder: "Search questions, answers, or tags...",
                value: "{current.search}",
                oninput: move |evt: FormEvent| {
                    let mut filter = filter;
                    filter.write().search = evt.value();
                },
            }
            button {
                class: "{bookmark_class}",
                r#type: "button",
                onclick: move |_| {
                    let mut filter = filter;
                    let mut current = filter.write();
                    current.bookmarked_only = !current.bookmarked_only;
                },
                "Bookmarked ({bookmark_count})"
            }
            button { class: "chip", r#type: "button", onclick: reset_filters, "Reset" }

            div { class: "filters__row",
                span { "Category:" }
                for choice in data.categories.clone() {
                    FilterChip {
                        label: choice.label().to_string(),
                        active: current.category == choice,
                        on_pick: move |()| {
                            let mut filter = filter;
                            filter.write().category = choice.clone();
                        },
                    }
                }
            }
            div { class: "filters__row",
                span { "Difficulty:" }
                for choice in DifficultyFilter::CHOICES {
                    FilterChip {
                        label: choice.label().to_string(),
                        active: current.difficulty == choice,
                        on_pick: move |()| {
                            let mut filter = filter;
                            filter.write().difficulty = choice;
                        },
                    }
                }
            }
        }

        if cards.is_empty() {
            div { class: "empty-state",
                h3 { "No questions found" }
                p { "Try adjusting your search or filter criteria." }
                button { r#type: "button", onclick: reset_filters, "Reset Filters" }
            }
        } else {
            p { class: "result-count", "Showing {cards.len()} of {total} questions" }
            ul { class: "question-list",
                for card in cards {
                    QuestionCard {
                        key: "{card.id}",
                        card,
                        on_toggle_bookmark,
                        on_toggle_completed,
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(label: String, active: bool, on_pick: EventHandler<()>) -> Element {
    let class = if active { "chip chip--active" } else { "chip" };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_pick.call(()),
            "{label}"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardTab {
    Explanation,
    Code,
}

#[component]
fn QuestionCard(
    card: QuestionCardVm,
    on_toggle_bookmark: EventHandler<QuestionId>,
    on_toggle_completed: EventHandler<QuestionId>,
) -> Element {
    let mut tab = use_signal(|| CardTab::Explanation);
    let id = card.id;
    let bookmark_label = if card.bookmarked { "Bookmarked" } else { "Bookmark" };
    let completed_label = if card.completed { "Completed" } else { "Mark complete" };
    let tab_class = |which: CardTab| {
        if tab() == which {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    rsx! {
        li { class: "card question",
            div { class: "question__meta",
                span { class: "badge", "{card.category}" }
                span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
                span { class: "question__time", "{card.estimated_label}" }
            }
            h3 { class: "question__prompt", "{card.prompt}" }
            div { class: "question__tags",
                for tag in card.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
            div { class: "question__actions",
                button {
                    class: if card.bookmarked { "icon-button icon-button--on" } else { "icon-button" },
                    r#type: "button",
                    onclick: move |_| on_toggle_bookmark.call(id),
                    "{bookmark_label}"
                }
                button {
                    class: if card.completed { "icon-button icon-button--on" } else { "icon-button" },
                    r#type: "button",
                    onclick: move |_| on_toggle_completed.call(id),
                    "{completed_label}"
                }
            }
            div { class: "tabs",
                button {
                    class: tab_class(CardTab::Explanation),
                    r#type: "button",
                    onclick: move |_| tab.set(CardTab::Explanation),
                    "Explanation"
                }
                button {
                    class: tab_class(CardTab::Code),
                    r#type: "button",
                    onclick: move |_| tab.set(CardTab::Code),
                    "Code Example"
                }
            }
            match tab() {
                CardTab::Explanation => rsx! {
                    p { class: "question__explanation", "{card.explanation}" }
                },
                CardTab::Code => match card.code_sample.as_deref() {
                    Some(sample) => rsx! {
                        pre { code { "{sample}" } }
                    },
                    None => rsx! {
                        div { class: "question__no-code",
                            p { "No code example available" }
                            p { "This question focuses on conceptual understanding." }
                        }
                    },
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionsTestHandles {
    filter: Rc<RefCell<Option<Signal<QuestionFilter>>>>,
    progress: Rc<RefCell<Option<Signal<StudyProgress>>>>,
}

#[cfg(test)]
impl QuestionsTestHandles {
    pub(crate) fn register(&self, filter: Signal<QuestionFilter>, progress: Signal<StudyProgress>) {
        *self.filter.borrow_mut() = Some(filter);
        *self.progress.borrow_mut() = Some(progress);
    }

    pub(crate) fn filter(&self) -> Signal<QuestionFilter> {
        (*self.filter.borrow()).expect("question filter registered")
    }

    pub(crate) fn progress(&self) -> Signal<StudyProgress> {
        (*self.progress.borrow()).expect("study progress registered")
    }
}
