//! Table-of-contents shaping — bucket partitioning and workflow patching.
//!
//! The partitioner acts only on the API navigation tree (`api/toc.yml`),
//! regrouping each namespace's flat entry list into named operator buckets.
//! `patch_entries` inserts externally discovered visual-workflow pages into
//! the tree before partitioning.

use crate::classify;
use crate::model::{OperatorKind, SharedLookup};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Navigation-tree key of the API reference TOC.
pub const API_TOC_KEY: &str = "api/toc.yml";

/// Bucket display names, in fixed rendering order.
const BUCKET_NAMES: [&str; 6] = [
    "Sources",
    "Transforms",
    "Sinks",
    "Combinators",
    "Helper Classes",
    "Enums",
];

const HELPER_CLASSES: usize = 4;
const ENUMS: usize = 5;

/// The navigation-tree model handed to TOC template extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TocModel {
    /// Pipeline page key, e.g. "api/toc.yml".
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Namespace nodes in site order.
    pub items: Vec<TocNode>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A navigation node: namespace, bucket, or page entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Uid of the page this entry links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TocNode>>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Regroup every namespace's entries into operator buckets. Trees other than
/// the API TOC pass through untouched.
pub fn pre_transform(model: &mut TocModel, shared: &SharedLookup) {
    if model.key.as_deref() != Some(API_TOC_KEY) {
        return;
    }
    for namespace in &mut model.items {
        if let Some(entries) = namespace.items.take() {
            namespace.items = Some(partition(entries, shared));
        }
    }
}

/// Identity, kept for hook-contract symmetry with the renderer.
pub fn post_transform(_model: &mut TocModel) {}

/// JSON boundary for embedders holding the raw pipeline value.
pub fn pre_transform_value(
    value: serde_json::Value,
    shared: &SharedLookup,
) -> anyhow::Result<serde_json::Value> {
    let mut model: TocModel =
        serde_json::from_value(value).context("TOC model does not match the navigation schema")?;
    pre_transform(&mut model, shared);
    serde_json::to_value(model).context("failed to serialize partitioned TOC model")
}

fn partition(entries: Vec<TocNode>, shared: &SharedLookup) -> Vec<TocNode> {
    let mut buckets: [Vec<TocNode>; 6] = Default::default();

    for entry in entries {
        let Some(page) = entry.topic_uid.as_deref().and_then(|uid| shared.get(uid)) else {
            log::debug!("TOC entry {:?} is not in the shared lookup, dropped", entry.topic_uid);
            continue;
        };
        if page.is_class() {
            let index = match classify::classify(page).kind {
                Some(OperatorKind::Source) => 0,
                Some(OperatorKind::Transform) => 1,
                Some(OperatorKind::Sink) => 2,
                Some(OperatorKind::Combinator) => 3,
                // Workflow containers render alongside plain classes.
                Some(OperatorKind::Workflow) | None => HELPER_CLASSES,
            };
            buckets[index].push(entry);
        } else if page.is_enum() {
            buckets[ENUMS].push(entry);
        } else {
            log::debug!("TOC entry {:?} is neither class nor enum, dropped", entry.topic_uid);
        }
    }

    BUCKET_NAMES
        .iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(name, entries)| TocNode {
            name: Some((*name).to_string()),
            items: Some(entries),
            ..Default::default()
        })
        .collect()
}

/// A visual-workflow page to inject into the TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowEntry {
    pub namespace: String,
    pub uid: String,
    pub name: String,
}

/// Insert workflow entries into their namespace nodes, creating a namespace
/// node at the end of the tree when none matches. Entry discovery (scanning
/// the source tree for workflow files) stays with the caller.
pub fn patch_entries(model: &mut TocModel, entries: &[WorkflowEntry]) {
    for entry in entries {
        let node = TocNode {
            uid: Some(entry.uid.clone()),
            name: Some(entry.name.clone()),
            // topicUid lets a later partition pass classify the entry.
            topic_uid: Some(entry.uid.clone()),
            ..Default::default()
        };
        match model
            .items
            .iter_mut()
            .find(|namespace| namespace.uid.as_deref() == Some(entry.namespace.as_str()))
        {
            Some(namespace) => namespace.items.get_or_insert_with(Vec::new).push(node),
            None => model.items.push(TocNode {
                uid: Some(entry.namespace.clone()),
                name: Some(entry.namespace.clone()),
                items: Some(vec![node]),
                ..Default::default()
            }),
        }
    }
}
