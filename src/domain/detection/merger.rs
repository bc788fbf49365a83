//! Combination of the two detection signals

use super::{ClassifierVerdict, FinalDecision, Label, SimilarityVerdict};

/// Merge both verdicts with the pessimistic OR policy
///
/// The result is `Fake` as soon as one side says `Fake`. The confidence is the
/// larger of the two confidences, even when it comes from the side that did
/// not decide the label.
pub fn merge(sim: SimilarityVerdict, clf: ClassifierVerdict) -> FinalDecision {
    let result = if sim.result.is_fake() || clf.result.is_fake() {
        Label::Fake
    } else {
        Label::Real
    };
    let confidence = sim.confidence.max(clf.confidence);

    FinalDecision {
        similarity_check: sim,
        bert_check: clf,
        result,
        confidence,
    }
}
