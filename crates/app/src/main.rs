use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use exam_core::model::{ExamSettings, ExamSettingsDraft};
use storage::{BankLocation, QuestionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "exam_core=info,storage=info,services=info,ui=info,app=info";

#[derive(Debug, Parser)]
#[command(name = "exam-sim", version, about = "Timed multiple-choice exam simulator")]
struct Args {
    /// Question bank to load: a JSON file path or an http(s) URL.
    #[arg(long, env = "EXAM_BANK", default_value = "genai.json")]
    bank: String,

    /// Questions pre-filled in the custom exam form.
    #[arg(
        long,
        env = "EXAM_QUESTIONS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    questions: u32,

    /// Minutes pre-filled in the custom exam form.
    #[arg(
        long,
        env = "EXAM_MINUTES",
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    minutes: u32,
}

struct DesktopApp {
    source: Arc<dyn QuestionSource>,
    settings: ExamSettings,
}

impl UiApp for DesktopApp {
    fn bank_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.source)
    }

    fn default_settings(&self) -> ExamSettings {
        self.settings
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ExamSettingsDraft::new(args.questions, args.minutes).validate()?;
    let location = BankLocation::parse(&args.bank);
    tracing::info!(
        bank = %location,
        questions = settings.question_count(),
        minutes = settings.time_limit_minutes(),
        "launching"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        source: location.into_source(),
        settings,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Exam Simulator")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["exam-sim"]).unwrap();
        assert_eq!(args.bank, "genai.json");
        assert_eq!(args.questions, 20);
        assert_eq!(args.minutes, 30);
    }

    #[test]
    fn zero_values_are_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["exam-sim", "--questions", "0"]).is_err());
        assert!(Args::try_parse_from(["exam-sim", "--minutes", "0"]).is_err());
    }

    #[test]
    fn bank_accepts_urls() {
        let args =
            Args::try_parse_from(["exam-sim", "--bank", "https://example.com/genai.json"]).unwrap();
        assert!(matches!(BankLocation::parse(&args.bank), BankLocation::Url(_)));
    }
}
