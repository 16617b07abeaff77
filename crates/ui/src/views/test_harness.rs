use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::filter::QuestionFilter;
use prep_core::time::fixed_clock;
use services::{
    AppServices, PracticeLoopService, PracticeSettings, QuestionService, StudyProgress,
    TopicService,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::practice::PracticeTestHandles;
use crate::views::questions::QuestionsTestHandles;
use crate::views::{HomeView, PracticeView, QuestionsView, TopicsView};
use crate::vm::{PracticeIntent, PracticeVm};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn practice_loop(&self) -> Arc<PracticeLoopService> {
        self.services.practice_loop()
    }

    fn questions(&self) -> Arc<QuestionService> {
        self.services.questions()
    }

    fn topics(&self) -> Arc<TopicService> {
        self.services.topics()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Questions(&'static str),
    Practice,
    Topics,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    practice_handles: Option<PracticeTestHandles>,
    questions_handles: Option<QuestionsTestHandles>,
    category: CategoryHandle,
}

/// The `category` prop handed to the question browser, switchable mid-test.
#[derive(Clone, Default)]
struct CategoryHandle(Rc<RefCell<Option<Signal<String>>>>);

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.practice_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.questions_handles.clone() {
        use_context_provider(|| handles);
    }
    use_context_provider(|| props.category.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Questions(initial) => rsx! { QuestionsRoot { initial } },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Topics => rsx! { TopicsView {} },
    }
}

#[component]
fn QuestionsRoot(initial: &'static str) -> Element {
    let category = use_signal(|| initial.to_string());
    let handle = use_context::<CategoryHandle>();
    handle.0.borrow_mut().get_or_insert(category);
    rsx! { QuestionsView { category: category() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub practice_handles: Option<PracticeTestHandles>,
    pub questions_handles: Option<QuestionsTestHandles>,
    category: CategoryHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    /// Move paused tokio time forward, then let woken tasks run.
    pub async fn advance(&mut self, by: Duration) {
        tokio::time::advance(by).await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn practice(&mut self, intent: PracticeIntent) {
        let handles = self
            .practice_handles
            .clone()
            .expect("practice handles installed");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn practice_vm(&self) -> Option<PracticeVm> {
        let handles = self.practice_handles.as_ref()?;
        self.dom.in_runtime(|| (*handles.vm().read()).clone())
    }

    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut QuestionFilter)) {
        let handles = self
            .questions_handles
            .clone()
            .expect("question handles installed");
        let mut filter = handles.filter();
        self.dom.in_runtime(|| edit(&mut filter.write()));
        drive_dom(&mut self.dom);
    }

    pub fn edit_progress(&mut self, edit: impl FnOnce(&mut StudyProgress)) {
        let handles = self
            .questions_handles
            .clone()
            .expect("question handles installed");
        let mut progress = handles.progress();
        self.dom.in_runtime(|| edit(&mut progress.write()));
        drive_dom(&mut self.dom);
    }

    /// Re-render the question browser with a new `category` prop.
    pub fn set_category(&mut self, category: &str) {
        let mut signal = (*self.category.0.borrow()).expect("question browser mounted");
        self.dom.in_runtime(|| signal.set(category.to_string()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::builtin().expect("builtin catalog");
    setup_view_harness_with_storage(view, &storage, PracticeSettings::default())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: &Storage,
    settings: PracticeSettings,
) -> ViewHarness {
    let services = AppServices::from_storage(storage, fixed_clock(), settings);
    let practice_handles = match view {
        ViewKind::Practice => Some(PracticeTestHandles::default()),
        _ => None,
    };
    let questions_handles = match view {
        ViewKind::Questions(_) => Some(QuestionsTestHandles::default()),
        _ => None,
    };
    let category = CategoryHandle::default();
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            practice_handles: practice_handles.clone(),
            questions_handles: questions_handles.clone(),
            category: category.clone(),
        },
    );

    ViewHarness {
        dom,
        practice_handles,
        questions_handles,
        category,
    }
}
