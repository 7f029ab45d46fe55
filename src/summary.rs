use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{Catalog, ProfileLabel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub label: ProfileLabel,
    pub count: u32,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub counts: HashMap<ProfileLabel, u32>,
    pub dominant: ProfileLabel,
    pub breakdown: Vec<BreakdownEntry>,
    pub answered: u32,
}

impl Summary {
    pub fn count(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }
}

pub fn compute_summary(catalog: &Catalog, answers: &[Option<ProfileLabel>]) -> Summary {
    let mut counts: HashMap<ProfileLabel, u32> =
        catalog.labels().map(|label| (label.clone(), 0)).collect();

    let mut answered = 0;
    for label in answers.iter().flatten() {
        *counts.entry(label.clone()).or_insert(0) += 1;
        answered += 1;
    }

    let breakdown: Vec<BreakdownEntry> = catalog
        .profiles()
        .iter()
        .map(|profile| BreakdownEntry {
            label: profile.label.clone(),
            count: counts[&profile.label],
            title: profile.title.clone(),
            color: profile.color.clone(),
        })
        .collect();

    // ties go to the profile listed first in the catalog
    let mut dominant = &breakdown[0];
    for entry in &breakdown[1..] {
        if entry.count > dominant.count {
            dominant = entry;
        }
    }

    Summary {
        dominant: dominant.label.clone(),
        counts,
        breakdown,
        answered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::abcd_catalog;

    fn answers(labels: &[&str]) -> Vec<Option<ProfileLabel>> {
        labels.iter().map(|l| Some(ProfileLabel::from(*l))).collect()
    }

    #[test]
    fn every_label_appears_with_zero() {
        let catalog = abcd_catalog(10);
        let summary = compute_summary(&catalog, &[]);
        assert_eq!(summary.counts.len(), 4);
        assert!(summary.counts.values().all(|c| *c == 0));
        assert_eq!(summary.answered, 0);
        assert_eq!(summary.dominant.as_str(), "A");
    }

    #[test]
    fn tie_goes_to_first_label() {
        let catalog = abcd_catalog(2);
        let summary = compute_summary(&catalog, &answers(&["A", "B"]));
        assert_eq!(summary.dominant.as_str(), "A");

        let summary = compute_summary(&catalog, &answers(&["D", "B"]));
        assert_eq!(summary.dominant.as_str(), "B");
    }

    #[test]
    fn mixed_answers() {
        let catalog = abcd_catalog(10);
        let summary = compute_summary(
            &catalog,
            &answers(&["A", "A", "A", "B", "C", "D", "A", "A", "C", "A"]),
        );
        assert_eq!(summary.count("A"), 6);
        assert_eq!(summary.count("B"), 1);
        assert_eq!(summary.count("C"), 2);
        assert_eq!(summary.count("D"), 1);
        assert_eq!(summary.dominant.as_str(), "A");
        assert_eq!(summary.answered, 10);
    }

    #[test]
    fn unanimous_answers() {
        let catalog = abcd_catalog(10);
        let summary = compute_summary(&catalog, &answers(&["C"; 10]));
        let counts: Vec<(&str, u32)> = summary
            .breakdown
            .iter()
            .map(|e| (e.label.as_str(), e.count))
            .collect();
        assert_eq!(counts, [("A", 0), ("B", 0), ("C", 10), ("D", 0)]);
        assert_eq!(summary.dominant.as_str(), "C");
    }

    #[test]
    fn empty_slots_are_skipped() {
        let catalog = abcd_catalog(4);
        let partial: Vec<Option<ProfileLabel>> =
            vec![Some("B".into()), None, Some("B".into()), None];
        let summary = compute_summary(&catalog, &partial);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.counts.values().sum::<u32>(), 2);
        assert_eq!(summary.dominant.as_str(), "B");
    }

    #[test]
    fn breakdown_carries_titles_in_catalog_order() {
        let catalog = crate::catalog::Catalog::reference().unwrap();
        let summary = compute_summary(&catalog, &answers(&["D"]));
        let titles: Vec<&str> = summary.breakdown.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Analytical Thinker",
                "Real-World Connector",
                "Perspective Balancer",
                "Thinking in Progress"
            ]
        );
        assert_eq!(summary.breakdown[3].color, "#4f46e5");
    }
}
