//! Mapping from a classifier's raw label vocabulary to `Label`

use super::Label;

/// Table deciding which raw model labels mean "genuine"
///
/// A raw label is `Real` when it contains one of `real_labels`
/// (case-insensitive) or equals one of `positive_label_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMapping {
    real_labels: Vec<String>,
    positive_label_ids: Vec<String>,
}

impl Default for LabelMapping {
    fn default() -> Self {
        Self::new(vec!["REAL".to_string()], vec!["LABEL_1".to_string()])
    }
}

impl LabelMapping {
    pub fn new(real_labels: Vec<String>, positive_label_ids: Vec<String>) -> Self {
        Self {
            real_labels: real_labels.into_iter().map(|l| l.to_uppercase()).collect(),
            positive_label_ids,
        }
    }

    pub fn map(&self, raw_label: &str) -> Label {
        let upper = raw_label.to_uppercase();

        let is_real = self.real_labels.iter().any(|l| upper.contains(l.as_str()))
            || self.positive_label_ids.iter().any(|id| id == raw_label);

        if is_real { Label::Real } else { Label::Fake }
    }
}
