use std::time::Duration;

use dioxus::prelude::*;
use services::ExamController;
use storage::load_bank;
use tokio::time::{Instant, Interval};

use crate::context::AppContext;
use crate::presenter::{SharedController, use_ui_presenter};
use crate::views::ExamShell;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Interval whose first tick lands one full period after creation.
fn exam_ticker() -> Interval {
    tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD)
}

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let presenter = use_ui_presenter();
    let mut controller: SharedController = use_signal(|| ExamController::new(presenter));
    use_context_provider(|| presenter);
    use_context_provider(|| controller);

    // The only async boundary: the controller sees the bank once it is fully loaded.
    use_future(move || {
        let source = ctx.bank_source();
        async move {
            let outcome = load_bank(source.as_ref()).await;
            controller.write().bank_loaded(outcome);
        }
    });

    // One ticker per exam, aligned to the moment it started.
    let running_exam = use_memo(move || controller.read().session().exam_id());
    use_resource(move || async move {
        if running_exam().is_none() {
            return;
        }
        let mut ticker = exam_ticker();
        loop {
            ticker.tick().await;
            if !controller.peek().is_timer_running() {
                break;
            }
            controller.write().on_second();
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Exam Simulator" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ExamShell {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticker_waits_a_full_second_before_first_tick() {
        let started = Instant::now();
        let mut ticker = exam_ticker();

        ticker.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);
        ticker.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD * 2);
    }
}
