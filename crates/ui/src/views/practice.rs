use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;
use services::TickOutcome;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PracticeIntent, PracticeVm, start_practice};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice_loop = ctx.practice_loop();

    let vm = use_signal(|| None::<PracticeVm>);

    let practice_loop_for_resource = practice_loop.clone();
    let resource = use_resource(move || {
        let practice_loop = practice_loop_for_resource.clone();
        let mut vm = vm;
        async move {
            let started = start_practice(&practice_loop).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    // One countdown per armed question. A new generation restarts the
    // resource, which drops any tick still pending for the previous question.
    let generation = use_memo(move || vm.read().as_ref().map(PracticeVm::generation));
    let practice_loop_for_timer = practice_loop.clone();
    let _countdown = use_resource(move || {
        let practice_loop = practice_loop_for_timer.clone();
        let armed = generation();
        let mut vm = vm;
        async move {
            if armed.is_none() {
                return;
            }
            loop {
                tokio::time::sleep(TICK).await;
                if !vm.peek().as_ref().is_some_and(PracticeVm::is_answering) {
                    return;
                }
                let outcome = vm.write().as_mut().map(|current| current.tick(&practice_loop));
                if !matches!(outcome, Some(TickOutcome::Counting { .. })) {
                    return;
                }
            }
        }
    });

    let dispatch = {
        let practice_loop = practice_loop.clone();
        use_callback(move |intent: PracticeIntent| {
            let mut vm = vm;
            if let Some(vm) = vm.write().as_mut() {
                let outcome = vm.apply(&practice_loop, intent);
                debug!(?intent, ?outcome, "practice intent");
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page page--practice",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(()) => match vm.read().as_ref() {
                    Some(current) => rsx! {
                        PracticeBoard { vm: current.clone(), dispatch }
                    },
                    None => rsx! {
                        p { "Loading..." }
                    },
                },
                ViewState::Error(ViewError::EmptySession) => rsx! {
                    div { class: "empty-state",
                        p { "{ViewError::EmptySession.message()}" }
                        Link { to: Route::all_questions(), "Study Questions" }
                    }
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
fn PracticeBoard(vm: PracticeVm, dispatch: Callback<PracticeIntent>) -> Element {
    let session = vm.session();
    let can_submit = session.selected().is_some();
    let revealed = session.is_revealed();
    let is_last = session.is_last_question();
    let is_first = session.is_first_question();

    rsx! {
        header { class: "page-header",
            Link { class: "back-link", to: Route::Home {}, "Back to Home" }
            h2 { "Quick Practice" }
            p { "Test your JavaScript knowledge" }
            div { class: "scoreboard",
                div { class: "scoreboard__item",
                    span { class: "scoreboard__label", "Score" }
                    span { class: "scoreboard__value", id: "practice-score", "{vm.score_label()}" }
                }
                div { class: "scoreboard__item",
                    span { class: "scoreboard__label", "Time" }
                    span { class: "{vm.timer_class()}", id: "practice-timer", "{vm.timer_label()}" }
                }
            }
            div { class: "practice-progress",
                span { "{vm.position_label()}" }
                span { "{vm.answered_label()}" }
                progress { max: "100", value: "{vm.progress_percent()}" }
            }
        }

        div { class: "card practice-card",
            div { class: "question__meta",
                span { class: "badge", "{vm.category()}" }
                span { class: "{vm.difficulty_class()}", "{vm.difficulty_label()}" }
                span { class: "question__status", "{vm.status_label()}" }
            }
            h3 { class: "question__prompt", "{vm.prompt()}" }
            if let Some(sample) = vm.code_sample() {
                pre { code { "{sample}" } }
            }

            div { class: "options",
                for option in vm.options() {
                    button {
                        key: "{option.index}",
                        class: "{option.class}",
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| dispatch.call(PracticeIntent::Select(option.index)),
                        span { "{option.label}" }
                        if let Some(marker) = option.marker {
                            span { class: "option__marker", "{marker}" }
                        }
                    }
                }
            }

            if let Some(explanation) = vm.explanation() {
                div { class: "explanation",
                    if vm.timed_out() {
                        p { class: "explanation__timeout", "Time's up!" }
                    }
                    h4 { "Explanation:" }
                    p { "{explanation}" }
                }
            }

            div { class: "practice-actions",
                button {
                    r#type: "button",
                    id: "practice-previous",
                    disabled: is_first,
                    onclick: move |_| dispatch.call(PracticeIntent::Previous),
                    "Previous"
                }
                if !revealed {
                    button {
                        r#type: "button",
                        id: "practice-submit",
                        disabled: !can_submit,
                        onclick: move |_| dispatch.call(PracticeIntent::Submit),
                        "Submit Answer"
                    }
                } else if !is_last {
                    button {
                        r#type: "button",
                        id: "practice-next",
                        onclick: move |_| dispatch.call(PracticeIntent::Next),
                        "Next Question"
                    }
                } else {
                    button {
                        r#type: "button",
                        id: "practice-start-over",
                        onclick: move |_| dispatch.call(PracticeIntent::StartOver),
                        "Start Over"
                    }
                }
            }
        }

        if let Some(summary) = vm.summary() {
            div { class: "card practice-complete",
                h2 { "Practice Complete!" }
                p { class: "practice-complete__score", "{summary.score_label}" }
                p { class: "practice-complete__percent", "{summary.percent}% correct" }
                p { "{summary.message}" }
                p { class: "practice-complete__time", "Finished {summary.completed_at}" }
                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        onclick: move |_| dispatch.call(PracticeIntent::StartOver),
                        "Try Again"
                    }
                    Link { to: Route::all_questions(), "Study More Questions" }
                }
            }
        }

        div { class: "card quick-nav",
            span { "Quick Navigation:" }
            for dot in vm.nav_dots() {
                button {
                    key: "{dot.index}",
                    class: "{dot.class}",
                    r#type: "button",
                    onclick: move |_| dispatch.call(PracticeIntent::Jump(dot.index)),
                    "{dot.number}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<PracticeVm>>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PracticeIntent>,
        vm: Signal<Option<PracticeVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<PracticeVm>> {
        (*self.vm.borrow()).expect("practice vm registered")
    }
}
