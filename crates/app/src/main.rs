use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, Clock, PracticeLoopService, QuestionService, TopicService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod cli;

use cli::Args;

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
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

fn init_logging(directive: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_filter)?;

    let settings = args.practice_settings()?;
    let services = AppServices::builtin(Clock::default(), settings)?;
    info!(
        countdown_secs = settings.countdown_secs(),
        shuffle = settings.shuffle(),
        "starting desktop app"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("JSInterviewPro")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
