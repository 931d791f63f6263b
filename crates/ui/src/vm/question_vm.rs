use services::QuestionView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Select(usize),
    Previous,
    Next,
    GoTo(usize),
    Submit,
    RequestFinish,
    RequestExit,
    Confirm,
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected { "option selected" } else { "option" }
    }
}

/// One dot in the question navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub index: usize,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}

impl NavItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.current, self.answered) {
            (true, _) => "nav-item nav-current",
            (false, true) => "nav-item nav-answered",
            (false, false) => "nav-item",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub is_first: bool,
    pub is_last: bool,
    pub answered_label: String,
    pub navigator: Vec<NavItemVm>,
}

impl QuestionVm {
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

/// Map a typed digit (`1`..`9`) onto an option index.
#[must_use]
pub fn option_for_key(key: &str, option_count: usize) -> Option<usize> {
    let digit = key.parse::<usize>().ok()?;
    (1..=option_count.min(9)).contains(&digit).then(|| digit - 1)
}

impl From<&QuestionView> for QuestionVm {
    fn from(view: &QuestionView) -> Self {
        let options = view
            .question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionVm {
                index,
                text: text.clone(),
                selected: view.selected == Some(index),
            })
            .collect();

        let navigator = view
            .answered
            .iter()
            .enumerate()
            .map(|(index, answered)| NavItemVm {
                index,
                number: index + 1,
                answered: *answered,
                current: index == view.index,
            })
            .collect();

        Self {
            number: view.index + 1,
            total: view.total,
            text: view.question.text().to_string(),
            options,
            is_first: view.is_first(),
            is_last: view.is_last(),
            answered_label: format!(
                "{} of {} answered",
                view.progress.answered, view.progress.total
            ),
            navigator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{ExamQuestion, QuestionDraft, QuestionId};
    use services::ExamProgress;

    fn view(index: usize, selected: Option<usize>) -> QuestionView {
        let question = QuestionDraft {
            text: "Which layer retries requests?".into(),
            options: vec!["client".into(), "server".into(), "proxy".into()],
            correct_index: 0,
            explanation: None,
        }
        .validate(QuestionId::new(0))
        .unwrap();
        QuestionView {
            question: ExamQuestion::unshuffled(&question),
            index,
            total: 3,
            selected,
            answered: vec![true, false, selected.is_some()],
            progress: ExamProgress {
                total: 3,
                answered: 1,
                unanswered: 2,
                current: index,
            },
        }
    }

    #[test]
    fn maps_selection_and_position() {
        let vm = QuestionVm::from(&view(2, Some(1)));
        assert_eq!(vm.number, 3);
        assert_eq!(vm.counter_label(), "Question 3 of 3");
        assert!(vm.is_last);
        assert!(!vm.is_first);
        assert!(vm.options[1].selected);
        assert!(!vm.options[0].selected);
        assert_eq!(vm.answered_label, "1 of 3 answered");
    }

    #[test]
    fn digits_select_options() {
        assert_eq!(option_for_key("1", 4), Some(0));
        assert_eq!(option_for_key("4", 4), Some(3));
        assert_eq!(option_for_key("5", 4), None);
        assert_eq!(option_for_key("0", 4), None);
        assert_eq!(option_for_key("a", 4), None);
    }

    #[test]
    fn navigator_marks_current_and_answered() {
        let vm = QuestionVm::from(&view(1, None));
        assert_eq!(vm.navigator[0].class(), "nav-item nav-answered");
        assert_eq!(vm.navigator[1].class(), "nav-item nav-current");
        assert_eq!(vm.navigator[2].class(), "nav-item");
    }
}
