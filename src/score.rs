use crate::models::QuizSession;

/// Qualitative label for an accuracy percentage. Thresholds are evaluated
/// top-down, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Great,
    Good,
    Try,
}

impl Tier {
    pub fn from_percent(percent: u32) -> Tier {
        if percent == 100 {
            Tier::Perfect
        } else if percent >= 80 {
            Tier::Great
        } else if percent >= 50 {
            Tier::Good
        } else {
            Tier::Try
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Great => "great",
            Tier::Good => "good",
            Tier::Try => "try",
        }
    }

    pub fn quote(&self) -> &'static str {
        match self {
            Tier::Perfect => "Legend! Flawless victory!",
            Tier::Great => "Awesome! Keep the streak!",
            Tier::Good => "Nice! Level up with a new category!",
            Tier::Try => "Learn more and keep trying!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub correct_count: usize,
    pub total: usize,
    pub accuracy_percent: u32,
    pub duration_seconds: i64,
    pub tier: Tier,
}

/// Derives the aggregate result from a finished session. Read-only; a session
/// is never started with zero questions, so `total >= 1` here.
pub fn summarize(session: &QuizSession) -> Summary {
    let total = session.questions.len();
    let correct_count = session
        .answers
        .iter()
        .flatten()
        .filter(|a| a.is_correct)
        .count();
    let accuracy_percent = ((correct_count as f64 / total as f64) * 100.0).round() as u32;
    let duration_seconds = session
        .finished_at
        .map(|finished| (finished - session.started_at).num_seconds())
        .unwrap_or(0);

    Summary {
        correct_count,
        total,
        accuracy_percent,
        duration_seconds,
        tier: Tier::from_percent(accuracy_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SessionClock;
    use crate::models::{AnswerRecord, Difficulty, Domain, Question, QuizSession};
    use chrono::{Duration, Utc};

    fn finished_session(results: &[bool]) -> QuizSession {
        let questions: Vec<Question> = results
            .iter()
            .enumerate()
            .map(|(i, _)| Question {
                question: format!("Q{}", i),
                options: vec!["a".to_string(), "b".to_string()],
                correct_index: 0,
                difficulty: Difficulty::Beginner,
                explanation: None,
            })
            .collect();
        let answers = results
            .iter()
            .map(|&correct| {
                Some(AnswerRecord {
                    chosen_index: if correct { Some(0) } else { Some(1) },
                    correct_index: 0,
                    is_correct: correct,
                    time_taken_seconds: 3,
                })
            })
            .collect();
        let started_at = Utc::now();
        QuizSession {
            domain: Domain::Sports,
            difficulty: Difficulty::Beginner,
            current_index: results.len() - 1,
            questions,
            answers,
            clock: SessionClock::new(true),
            highlighted_option: 0,
            reduced_set: false,
            started_at,
            finished_at: Some(started_at + Duration::seconds(42)),
        }
    }

    #[test]
    fn test_correct_count_matches_answers() {
        let session = finished_session(&[true, false, true, true, false]);
        let summary = summarize(&session);
        assert_eq!(summary.correct_count, 3);
        assert_eq!(summary.total, 5);
        assert!(summary.correct_count <= summary.total);
    }

    #[test]
    fn test_four_of_five_is_great() {
        let session = finished_session(&[true, true, true, true, false]);
        let summary = summarize(&session);
        assert_eq!(summary.accuracy_percent, 80);
        assert_eq!(summary.tier, Tier::Great);
    }

    #[test]
    fn test_all_correct_is_perfect() {
        let session = finished_session(&[true; 5]);
        let summary = summarize(&session);
        assert_eq!(summary.accuracy_percent, 100);
        assert_eq!(summary.tier, Tier::Perfect);
    }

    #[test]
    fn test_low_score_is_try() {
        let session = finished_session(&[true, false, false, false, false]);
        let summary = summarize(&session);
        assert_eq!(summary.accuracy_percent, 20);
        assert_eq!(summary.tier, Tier::Try);
    }

    #[test]
    fn test_accuracy_rounds_to_nearest() {
        // 2/3 = 66.67 -> 67
        let session = finished_session(&[true, true, false]);
        assert_eq!(summarize(&session).accuracy_percent, 67);
        // 1/3 = 33.33 -> 33
        let session = finished_session(&[true, false, false]);
        assert_eq!(summarize(&session).accuracy_percent, 33);
    }

    #[test]
    fn test_accuracy_always_within_bounds() {
        for pattern in [&[false, false][..], &[true, false][..], &[true, true][..]] {
            let summary = summarize(&finished_session(pattern));
            assert!(summary.accuracy_percent <= 100);
        }
    }

    #[test]
    fn test_duration_comes_from_timestamps() {
        let session = finished_session(&[true]);
        assert_eq!(summarize(&session).duration_seconds, 42);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_percent(100), Tier::Perfect);
        assert_eq!(Tier::from_percent(99), Tier::Great);
        assert_eq!(Tier::from_percent(80), Tier::Great);
        assert_eq!(Tier::from_percent(79), Tier::Good);
        assert_eq!(Tier::from_percent(50), Tier::Good);
        assert_eq!(Tier::from_percent(49), Tier::Try);
        assert_eq!(Tier::from_percent(0), Tier::Try);
    }
}
