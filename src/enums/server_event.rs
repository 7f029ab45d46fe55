use serde::Serialize;

use crate::catalog::{ProfileDefinition, ProfileLabel, Question};
use crate::states::quiz_state::Phase;
use crate::summary::Summary;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "view")]
    View {
        phase: Phase,
        question_index: usize,
        question_count: usize,
        progress: f64,
        question: Option<Question>,
        selected: Option<ProfileLabel>,
    },

    #[serde(rename = "results")]
    Results {
        summary: Summary,
        profile: ProfileDefinition,
    },

    #[serde(rename = "error")]
    Error { kind: String, message: String },
}
