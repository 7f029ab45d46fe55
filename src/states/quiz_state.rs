use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, ProfileLabel, Question};
use crate::error::{QuizError, QuizResult};
use crate::summary::{Summary, compute_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    InProgress,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Intro => "intro",
            Phase::InProgress => "in_progress",
            Phase::Complete => "complete",
        })
    }
}

/// One run through the quiz.
///
/// `start`, `answer` and `previous` return `InvalidStateTransition` when
/// called outside the phase they belong to; every failing call leaves the
/// session untouched.
#[derive(Debug, Clone)]
pub struct QuizState {
    catalog: Arc<Catalog>,
    phase: Phase,
    current_index: usize,
    answers: Vec<Option<ProfileLabel>>,
}

impl QuizState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            phase: Phase::Intro,
            current_index: 0,
            answers: Vec::new(),
        }
    }

    pub fn start(&mut self) -> QuizResult<()> {
        self.require(Phase::Intro, "start")?;
        self.current_index = 0;
        self.answers = vec![None; self.catalog.question_count()];
        self.phase = Phase::InProgress;
        Ok(())
    }

    pub fn answer(&mut self, label: &str) -> QuizResult<()> {
        self.require(Phase::InProgress, "answer")?;
        let question = self.catalog.question_at(self.current_index)?;
        if !question.offers(label) {
            return Err(QuizError::InvalidSelection {
                label: label.to_string(),
                index: self.current_index,
            });
        }

        self.answers[self.current_index] = Some(ProfileLabel::new(label));
        if self.current_index + 1 < self.catalog.question_count() {
            self.current_index += 1;
        } else {
            self.phase = Phase::Complete;
        }
        Ok(())
    }

    pub fn previous(&mut self) -> QuizResult<()> {
        self.require(Phase::InProgress, "previous")?;
        self.current_index = self.current_index.saturating_sub(1);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Intro;
        self.current_index = 0;
        self.answers.clear();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question on screen, if a question is on screen.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.catalog.question_at(self.current_index).ok(),
            Phase::Intro | Phase::Complete => None,
        }
    }

    /// Answer previously given at the current index, for highlighting.
    pub fn current_answer(&self) -> Option<&ProfileLabel> {
        self.answers.get(self.current_index).and_then(Option::as_ref)
    }

    pub fn answers(&self) -> &[Option<ProfileLabel>] {
        &self.answers
    }

    /// Fraction of the quiz reached, counting the question on screen.
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Intro => 0.0,
            Phase::InProgress => {
                (self.current_index + 1) as f64 / self.catalog.question_count() as f64
            }
            Phase::Complete => 1.0,
        }
    }

    pub fn summary(&self) -> Summary {
        compute_summary(&self.catalog, &self.answers)
    }

    fn require(&self, phase: Phase, operation: &'static str) -> QuizResult<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(QuizError::InvalidStateTransition {
                operation,
                phase: self.phase,
            })
        }
    }
}
