//! Operator classification — explicit category tag first, inheritance second.
//!
//! A type declares its role with a `[WorkflowElementCategory(...)]` attribute;
//! when the attribute is absent, the inheritance chain decides. Sink and
//! transform base types often also implement a combinator capability, so a
//! sink or transform ancestor match clears a combinator candidate.

use crate::model::{OperatorKind, PageModel};

/// Classification result for one documented type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: Option<OperatorKind>,
    /// Whether the type participates in a visual workflow rendering.
    pub show_workflow: bool,
}

/// Explicit category attributes, as they appear in the rendered declaration.
const CATEGORY_TAGS: &[(&str, OperatorKind)] = &[
    ("[WorkflowElementCategory(ElementCategory.Source)]", OperatorKind::Source),
    ("[WorkflowElementCategory(ElementCategory.Sink)]", OperatorKind::Sink),
    ("[WorkflowElementCategory(ElementCategory.Transform)]", OperatorKind::Transform),
    ("[WorkflowElementCategory(ElementCategory.Combinator)]", OperatorKind::Combinator),
    ("[WorkflowElementCategory(ElementCategory.Workflow)]", OperatorKind::Workflow),
];

const SOURCE_BASES: &[&str] = &["Bonsai.Source"];
const SINK_BASES: &[&str] = &["Bonsai.Sink", "Bonsai.IO.StreamSink", "Bonsai.IO.FileSink"];
const TRANSFORM_BASES: &[&str] = &["Bonsai.Transform"];
const COMBINATOR_BASES: &[&str] = &["Bonsai.Combinator", "Bonsai.WindowCombinator"];

/// Classify one type. Pure function of the type's own declaration and
/// inheritance chain; never consults other types.
pub fn classify(page: &PageModel) -> Classification {
    let kind = explicit_category(page).or_else(|| inherited_category(page));
    Classification {
        kind,
        show_workflow: kind.is_some(),
    }
}

/// An explicit category tag in the declaration wins outright; the
/// inheritance chain is never consulted afterwards.
fn explicit_category(page: &PageModel) -> Option<OperatorKind> {
    let declaration = page.declaration()?;
    CATEGORY_TAGS
        .iter()
        .find(|(tag, _)| declaration.contains(tag))
        .map(|&(_, kind)| kind)
}

fn inherited_category(page: &PageModel) -> Option<OperatorKind> {
    let mut source = false;
    let mut sink = false;
    let mut transform = false;
    let mut combinator = false;

    for ancestor in &page.inheritance {
        let Some(uid) = ancestor.uid.as_deref() else {
            continue;
        };
        if matches_any(uid, SOURCE_BASES) {
            source = true;
        } else if matches_any(uid, SINK_BASES) {
            sink = true;
            combinator = false;
        } else if matches_any(uid, TRANSFORM_BASES) {
            transform = true;
            combinator = false;
        } else if matches_any(uid, COMBINATOR_BASES) {
            combinator = true;
        }
    }

    // Selection precedence: sink > source > transform > combinator.
    if sink {
        Some(OperatorKind::Sink)
    } else if source {
        Some(OperatorKind::Source)
    } else if transform {
        Some(OperatorKind::Transform)
    } else if combinator {
        Some(OperatorKind::Combinator)
    } else {
        None
    }
}

fn matches_any(uid: &str, bases: &[&str]) -> bool {
    bases.iter().any(|base| uid.contains(base))
}
