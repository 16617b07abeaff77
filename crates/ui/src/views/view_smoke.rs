use std::sync::Arc;
use std::time::Duration;

use prep_core::model::{Question, QuestionId};
use services::PracticeSettings;
use storage::{InMemoryRepository, QuestionRepository, Storage, StorageError};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::PracticeIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_landing_sections() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Interview Questions"), "missing hero in {html}");
    assert!(html.contains("Everything You Need to Succeed"), "missing features in {html}");
    assert!(html.contains("Sarah Chen"), "missing testimonial in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_full_catalog() {
    let mut harness = setup_view_harness(ViewKind::Questions(""));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Showing 6 of 6 questions"), "missing count in {html}");
    assert!(html.contains("Bookmarked (0)"), "missing bookmark toggle in {html}");
    assert!(html.contains("0%"), "missing completion rate in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_preselects_query_category() {
    let mut harness = setup_view_harness(ViewKind::Questions("Async"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Showing 2 of 6 questions"), "missing filtered count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_ignores_unknown_category() {
    let mut harness = setup_view_harness(ViewKind::Questions("Generators"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Showing 6 of 6 questions"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_empty_state_with_reset() {
    let mut harness = setup_view_harness(ViewKind::Questions(""));
    harness.settle().await;

    harness.edit_filter(|filter| filter.search = "no such topic anywhere".to_string());
    let html = harness.render();
    assert!(html.contains("No questions found"), "missing empty state in {html}");
    assert!(html.contains("Reset Filters"), "missing reset action in {html}");
    assert!(!html.contains("Showing "), "count shown for empty result in {html}");

    harness.edit_filter(|filter| filter.reset());
    let html = harness.render();
    assert!(html.contains("Showing 6 of 6 questions"), "reset did not restore list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_filters_to_bookmarked() {
    let mut harness = setup_view_harness(ViewKind::Questions(""));
    harness.settle().await;

    harness.edit_progress(|progress| {
        progress.toggle_bookmark(QuestionId::new(3));
    });
    harness.edit_filter(|filter| filter.bookmarked_only = true);
    let html = harness.render();
    assert!(html.contains("Bookmarked (1)"), "missing bookmark count in {html}");
    assert!(html.contains("Showing 1 of 6 questions"), "missing bookmarked count in {html}");

    harness.edit_progress(|progress| {
        progress.toggle_bookmark(QuestionId::new(3));
    });
    let html = harness.render();
    assert!(html.contains("No questions found"), "unbookmarked question still listed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_follows_category_prop_changes() {
    let mut harness = setup_view_harness(ViewKind::Questions("Async"));
    harness.settle().await;
    assert!(harness.render().contains("Showing 2 of 6 questions"));

    harness.set_category("");
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Showing 6 of 6 questions"), "stale category in {html}");

    harness.set_category("Functions");
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Showing 1 of 6 questions"), "category not applied in {html}");
}

struct FailingQuestionRepo;

#[async_trait::async_trait]
impl QuestionRepository for FailingQuestionRepo {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::NotFound)
    }

    async fn get_question(&self, _id: QuestionId) -> Result<Question, StorageError> {
        Err(StorageError::NotFound)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_error_state() {
    let mut storage = Storage::builtin().unwrap();
    storage.questions = Arc::new(FailingQuestionRepo);
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Questions(""), &storage, PracticeSettings::default());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_overview_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Topics);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("34%"), "missing overall progress in {html}");
    assert!(html.contains("78 of 227 questions completed"), "missing summary in {html}");
    assert!(html.contains("Asynchronous JavaScript"), "missing topic card in {html}");
    assert!(html.contains("18/25"), "missing topic counters in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing position in {html}");
    assert!(html.contains("30s"), "missing timer in {html}");
    assert!(html.contains("0/5"), "missing score in {html}");
    assert!(html.contains("A. "), "missing lettered options in {html}");
    assert!(!html.contains("Explanation:"), "explanation shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_reveals_and_scores_after_submit() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;

    let vm = harness.practice_vm().expect("session started");
    let correct = vm.session().current_question().correct_option();
    harness.practice(PracticeIntent::Select(correct));
    harness.practice(PracticeIntent::Submit);

    let html = harness.render();
    assert!(html.contains("Explanation:"), "missing explanation in {html}");
    assert!(html.contains("1/5"), "missing score in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");

    harness.practice(PracticeIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 5"), "missing advance in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_empty_state() {
    let storage = Storage::from_repository(InMemoryRepository::empty());
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Practice, &storage, PracticeSettings::default());
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No practice questions are available right now."),
        "missing empty state in {html}"
    );
}

fn remaining_secs(harness: &ViewHarness) -> u32 {
    harness
        .practice_vm()
        .expect("session started")
        .session()
        .remaining_secs()
}

async fn started_practice() -> ViewHarness {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;
    harness.drive_async().await;
    harness.drive_async().await;
    harness
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn practice_view_countdown_restarts_on_question_change() {
    let mut harness = started_practice().await;
    assert_eq!(remaining_secs(&harness), 30);

    harness.advance(Duration::from_secs(1)).await;
    assert_eq!(remaining_secs(&harness), 29);

    harness.advance(Duration::from_millis(500)).await;
    harness.practice(PracticeIntent::Jump(1));
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(remaining_secs(&harness), 30);

    // The tick armed for the first question would have fired by now.
    harness.advance(Duration::from_millis(600)).await;
    assert_eq!(remaining_secs(&harness), 30);

    harness.advance(Duration::from_secs(1)).await;
    assert_eq!(remaining_secs(&harness), 29);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn practice_view_countdown_stops_on_reveal_and_rearms_on_next() {
    let mut harness = started_practice().await;

    harness.practice(PracticeIntent::Select(0));
    harness.practice(PracticeIntent::Submit);
    for _ in 0..3 {
        harness.advance(Duration::from_secs(1)).await;
    }
    let vm = harness.practice_vm().expect("session started");
    assert!(vm.session().is_revealed());
    assert_eq!(vm.session().remaining_secs(), 30);

    harness.practice(PracticeIntent::Next);
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(remaining_secs(&harness), 30);

    harness.advance(Duration::from_secs(1)).await;
    assert_eq!(remaining_secs(&harness), 29);
    assert!(harness.render().contains("29s"));
}
