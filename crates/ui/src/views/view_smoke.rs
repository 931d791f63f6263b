use exam_core::model::{ExamId, ExamQuestion, ExamResult, SubmitReason};
use exam_core::time::fixed_now;
use services::{ConfirmPrompt, ExamProgress, QuestionView};

use super::test_harness::{
    ExamHarness, ExamHarnessProps, ResultsHarness, ResultsHarnessProps, ShellHarness,
    ShellHarnessProps, render, sample_questions,
};
use crate::vm::{QuestionVm, ResultsVm};

fn exam_questions(count: u32) -> Vec<ExamQuestion> {
    sample_questions(count)
        .iter()
        .map(ExamQuestion::unshuffled)
        .collect()
}

fn question_vm(index: usize) -> QuestionVm {
    let questions = exam_questions(3);
    QuestionVm::from(&QuestionView {
        question: questions[index].clone(),
        index,
        total: 3,
        selected: Some(0),
        answered: vec![true, false, false],
        progress: ExamProgress {
            total: 3,
            answered: 1,
            unanswered: 2,
            current: index,
        },
    })
}

#[test]
fn results_view_smoke_renders_score_and_review() {
    let questions = exam_questions(5);
    let answers = [Some(1), Some(1), Some(1), Some(0), None];
    let result = ExamResult::score(
        ExamId::generate(),
        SubmitReason::EarlyFinish,
        &questions,
        &answers,
        fixed_now(),
        fixed_now(),
    )
    .unwrap();

    let html = render(
        ResultsHarness,
        ResultsHarnessProps {
            vm: ResultsVm::from(&result),
        },
    );
    assert!(html.contains("60.0%"), "missing score in {html}");
    assert!(html.contains("You answered 3 out of 5 questions correctly."));
    assert!(html.contains("You did not pass. Keep studying!"));
    assert!(html.contains("(Not Answered - Marked as Failed)"));
    assert!(html.contains("Explanation 4"));
    assert!(!html.contains("Time is up!"));
}

#[test]
fn exam_view_smoke_renders_question_and_timer() {
    let html = render(
        ExamHarness,
        ExamHarnessProps {
            vm: question_vm(0),
            remaining: 1799,
            prompt: None,
        },
    );
    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(html.contains("Sample question 0"));
    assert!(html.contains("29:59"));
    assert!(html.contains("option selected"));
    assert!(html.contains("Next"));
    assert!(!html.contains("Submit Exam"));
    assert!(!html.contains("modal-overlay"));
    assert!(
        html.contains(r#"tabindex="0""#),
        "exam page is not focusable in {html}"
    );
}

#[test]
fn exam_view_smoke_last_question_offers_submit() {
    let html = render(
        ExamHarness,
        ExamHarnessProps {
            vm: question_vm(2),
            remaining: 30,
            prompt: None,
        },
    );
    assert!(html.contains("Submit Exam"));
    assert!(html.contains("timer timer-low"));
}

#[test]
fn exam_view_smoke_shows_confirm_modal() {
    let html = render(
        ExamHarness,
        ExamHarnessProps {
            vm: question_vm(1),
            remaining: 600,
            prompt: Some(ConfirmPrompt::EarlyFinish { unanswered: 2 }),
        },
    );
    assert!(html.contains("modal-overlay"));
    assert!(html.contains("You have 2 unanswered questions."));
    assert!(html.contains("Finish test?"));
}

#[test]
fn shell_smoke_home_lists_presets_and_bank_size() {
    let html = render(
        ShellHarness,
        ShellHarnessProps {
            bank_size: 6,
            start: None,
        },
    );
    assert!(html.contains("6 questions available."), "missing bank size in {html}");
    assert!(html.contains("10 Questions"));
    assert!(html.contains("40 Questions"));
}

#[test]
fn shell_smoke_started_exam_shows_first_question() {
    let html = render(
        ShellHarness,
        ShellHarnessProps {
            bank_size: 6,
            start: Some((3, 5)),
        },
    );
    assert!(html.contains("Question 1 of 3"), "missing exam page in {html}");
    assert!(html.contains("05:00"));
}
