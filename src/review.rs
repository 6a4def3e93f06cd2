use crate::models::QuizSession;

/// Per-question comparison of the chosen and correct answers, resolved to
/// option text for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question_text: String,
    /// `None` when no answer was recorded (timeout or skip); rendered as
    /// "No answer".
    pub chosen_answer: Option<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// Read-only pass over a finished session, in question order.
pub fn assemble_review(session: &QuizSession) -> Vec<ReviewEntry> {
    session
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let record = session.answers.get(i).and_then(|a| a.as_ref());
            let chosen_answer = record
                .and_then(|r| r.chosen_index)
                .and_then(|idx| question.options.get(idx).cloned());
            ReviewEntry {
                question_text: question.question.clone(),
                chosen_answer,
                correct_answer: question.options[question.correct_index].clone(),
                explanation: question.explanation.clone(),
            }
        })
        .collect()
}
