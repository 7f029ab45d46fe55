use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, QuizError, QuizResult};

const REFERENCE_CATALOG: &str = include_str!("../catalog/economics.toml");

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileLabel(String);

impl ProfileLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl Borrow<str> for ProfileLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: ProfileLabel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position shown to the user.
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn offers(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label.as_str() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    pub label: ProfileLabel,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub emoji: String,
    /// Chart color, e.g. `#2563eb`.
    #[serde(default)]
    pub color: String,
}

/// On-disk shape of a catalog file before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    profiles: Vec<ProfileDefinition>,
    questions: Vec<Question>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    profiles: Vec<ProfileDefinition>,
}

impl Catalog {
    /// Profile order is the scoring tie-break order. Question ids must run
    /// 1..=n in position order.
    pub fn new(
        questions: Vec<Question>,
        profiles: Vec<ProfileDefinition>,
    ) -> Result<Self, CatalogError> {
        validate(&questions, &profiles)?;
        Ok(Self {
            questions,
            profiles,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.questions, file.profiles)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The bundled 10-question economics strengths quiz.
    pub fn reference() -> Result<Self, CatalogError> {
        Self::from_toml_str(REFERENCE_CATALOG)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_at(&self, index: usize) -> QuizResult<&Question> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    pub fn profile_definition(&self, label: &str) -> QuizResult<&ProfileDefinition> {
        self.profiles
            .iter()
            .find(|p| p.label.as_str() == label)
            .ok_or_else(|| QuizError::UnknownProfile(label.to_string()))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Profiles in enumeration order.
    pub fn profiles(&self) -> &[ProfileDefinition] {
        &self.profiles
    }

    pub fn labels(&self) -> impl Iterator<Item = &ProfileLabel> {
        self.profiles.iter().map(|p| &p.label)
    }
}

fn validate(questions: &[Question], profiles: &[ProfileDefinition]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::Invalid("catalog has no questions".into()));
    }
    if profiles.is_empty() {
        return Err(CatalogError::Invalid("catalog has no profiles".into()));
    }

    let mut known = HashSet::new();
    for profile in profiles {
        if !known.insert(profile.label.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate profile label {}",
                profile.label
            )));
        }
    }

    for (index, question) in questions.iter().enumerate() {
        if question.id as usize != index + 1 {
            return Err(CatalogError::Invalid(format!(
                "question at position {} has id {}",
                index + 1,
                question.id
            )));
        }
        if question.options.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "question {index} has no options"
            )));
        }
        let mut seen = HashSet::new();
        for option in &question.options {
            if !known.contains(option.label.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "question {index} offers unknown profile label {}",
                    option.label
                )));
            }
            if !seen.insert(option.label.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "question {index} offers label {} twice",
                    option.label
                )));
            }
        }
    }

    Ok(())
}
