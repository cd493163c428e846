//! bondoc — template-extension hooks for Bonsai API reference documentation.
//!
//! The external documentation pipeline invokes these hooks at fixed lifecycle
//! points, once per page model:
//!
//! - [`pre_transform`] classifies the page's type into an operator category
//!   (source/sink/transform/combinator/workflow), reshapes its members into
//!   rendering views, and attaches the result as the `bonsai` block.
//! - [`toc::pre_transform`] regroups the API navigation tree's namespaces
//!   into named operator buckets.
//!
//! Both read cross-references from an explicit [`SharedLookup`] supplied by
//! the pipeline. The hooks are synchronous, side-effect-free transformations
//! over already-loaded models: no I/O, no state across invocations.

pub mod classify;
pub mod model;
pub mod reshape;
pub mod text;
pub mod toc;

pub use model::{BonsaiExtension, OperatorKind, PageModel, SharedLookup};

use anyhow::Context as _;

/// Attach the `bonsai` extension block to a reference page.
///
/// Always sets the description; operator pages additionally get their
/// category, workflow flag, and input/output views; classes get the sorted
/// properties table; enums get their field list. Empty views are omitted.
pub fn pre_transform(page: &mut PageModel, shared: &SharedLookup) {
    let mut bonsai = BonsaiExtension {
        description: text::join_docs(page.summary.as_deref(), page.remarks.as_deref()),
        ..Default::default()
    };

    let classification = classify::classify(page);
    if let Some(kind) = classification.kind {
        bonsai.operator_type = Some(kind);
        bonsai.show_workflow = classification.show_workflow;
        let operators = reshape::operators::extract(page, shared);
        if !operators.is_empty() {
            bonsai.operators = Some(operators);
        }
    }

    if page.is_class() {
        let properties = reshape::class_properties(page, shared);
        if !properties.is_empty() {
            bonsai.has_properties = true;
            bonsai.properties = Some(properties);
        }
    } else if page.is_enum() {
        let fields = reshape::enums::extract(page);
        if !fields.is_empty() {
            bonsai.has_enum_fields = true;
            bonsai.enum_fields = Some(fields);
        }
    }

    page.bonsai = Some(bonsai);
}

/// Identity, kept for hook-contract symmetry with the renderer.
pub fn post_transform(_page: &mut PageModel) {}

/// JSON boundary for embedders holding the raw pipeline value.
pub fn pre_transform_value(
    value: serde_json::Value,
    shared: &SharedLookup,
) -> anyhow::Result<serde_json::Value> {
    let mut page: PageModel = serde_json::from_value(value)
        .context("page model does not match the managed reference schema")?;
    pre_transform(&mut page, shared);
    serde_json::to_value(page).context("failed to serialize annotated page model")
}
