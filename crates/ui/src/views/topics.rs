use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TopicCardVm, TopicOverviewVm, map_topic_card, map_topic_overview};

#[derive(Clone, Debug, PartialEq)]
struct TopicsData {
    overview: TopicOverviewVm,
    cards: Vec<TopicCardVm>,
}

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let topics = ctx.topics();

    let resource = use_resource(move || {
        let topics = topics.clone();
        async move {
            let listing = topics.listing().await.map_err(|err| {
                warn!(error = %err, "failed to load topics");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(TopicsData {
                overview: map_topic_overview(listing.overview),
                cards: listing.topics.iter().map(map_topic_card).collect(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page page--topics",
            header { class: "page-header",
                Link { class: "back-link", to: Route::Home {}, "Back to Home" }
                h2 { "Learning Topics" }
                p { "Master JavaScript concepts systematically" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    OverviewPanel { overview: data.overview }
                    div { class: "grid topics",
                        for card in data.cards {
                            TopicCard { key: "{card.slug}", card }
                        }
                    }
                    LearningPath {}
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn OverviewPanel(overview: TopicOverviewVm) -> Element {
    rsx! {
        section { class: "card overview",
            div { class: "overview__progress",
                span { class: "overview__label", "Overall Progress" }
                span { class: "overview__value", "{overview.percent}%" }
                progress { max: "100", value: "{overview.percent}" }
                p { "{overview.summary_label}" }
            }
            div { class: "stats",
                div { class: "stat",
                    div { class: "stat__number", "{overview.topic_count}" }
                    div { class: "stat__label", "Topics Available" }
                }
                div { class: "stat",
                    div { class: "stat__number", "{overview.completed}" }
                    div { class: "stat__label", "Questions Completed" }
                }
                div { class: "stat",
                    div { class: "stat__number", "{overview.total}" }
                    div { class: "stat__label", "Total Questions" }
                }
                div { class: "stat",
                    div { class: "stat__number", "{overview.mastered}" }
                    div { class: "stat__label", "Topics Mastered" }
                }
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    rsx! {
        div { class: if card.is_completed { "card topic topic--mastered" } else { "card topic" },
            div { class: "topic__meta",
                span { class: "{card.tier_class}", "{card.tier_label}" }
                span { class: "topic__time", "{card.estimated_time}" }
            }
            h3 { "{card.title}" }
            p { "{card.description}" }
            div { class: "topic__progress",
                span { "Progress" }
                span { "{card.progress_label}" }
                progress { max: "100", value: "{card.percent}" }
                span { class: "topic__percent", "{card.percent}% complete" }
            }
            div { class: "topic__concepts",
                h4 { "Key Concepts:" }
                for concept in card.concepts.iter() {
                    span { class: "tag", "{concept}" }
                }
            }
            div { class: "topic__actions",
                Link {
                    class: "cta",
                    to: Route::Questions { category: card.category.clone() },
                    "Study"
                }
                Link { class: "cta cta--outline", to: Route::Practice {}, "Practice" }
            }
        }
    }
}

#[component]
fn LearningPath() -> Element {
    rsx! {
        section { class: "card learning-path",
            h2 { "Recommended Learning Path" }
            p {
                "Start with JavaScript Basics, then move to Functions & Scope, followed by Objects & Prototypes. Master these fundamentals before tackling advanced topics."
            }
            div { class: "hero__actions",
                Link {
                    class: "cta",
                    to: Route::Questions { category: "Basics".to_string() },
                    "Start Learning Path"
                }
                Link { class: "cta cta--outline", to: Route::Practice {}, "Take Assessment" }
            }
        }
    }
}
