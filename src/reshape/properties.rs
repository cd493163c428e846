//! Properties view — declared and inherited properties, enum-backed
//! properties expanded inline.

use crate::model::{
    Member, PageModel, PropertyDescription, PropertyView, SharedLookup, TypeRef,
};
use crate::reshape::enums;
use crate::text;
use std::cmp::Ordering;

/// Properties declared directly on the type.
pub fn extract(page: &PageModel, shared: &SharedLookup) -> Vec<PropertyView> {
    page.children
        .iter()
        .filter(|member| member.kind.as_deref() == Some("property") && member.syntax.is_some())
        .map(|member| property_view(member, shared))
        .collect()
}

/// Properties inherited from ancestors, resolved through the owning
/// ancestor's page. Types with no inherited members (workflow includes) and
/// ancestors outside the documentation set resolve to nothing.
pub fn extract_inherited(page: &PageModel, shared: &SharedLookup) -> Vec<PropertyView> {
    page.inherited_members
        .iter()
        .filter(|inherited| inherited.kind.as_deref() == Some("property"))
        .filter_map(|inherited| {
            let uid = inherited.uid.as_deref()?;
            let parent = inherited.parent.as_deref()?;
            let Some(ancestor) = shared.get(parent) else {
                log::warn!("ancestor page {parent} for inherited member {uid} is not in the shared lookup");
                return None;
            };
            let Some(member) = ancestor
                .children
                .iter()
                .find(|child| child.uid.as_deref() == Some(uid))
            else {
                log::warn!("inherited member {uid} not found on ancestor page {parent}");
                return None;
            };
            Some(property_view(member, shared))
        })
        .collect()
}

fn property_view(member: &Member, shared: &SharedLookup) -> PropertyView {
    let type_ref = member
        .syntax
        .as_ref()
        .and_then(|syntax| syntax.returns.as_ref())
        .and_then(|returns| returns.type_ref.as_ref());

    let fields = type_ref
        .and_then(|t| t.uid.as_deref())
        .and_then(|uid| shared.get(uid))
        .filter(|resolved| resolved.is_enum())
        .map(enums::extract)
        .unwrap_or_default();

    // Enum-backed descriptions keep their trailing paragraph: the expanded
    // field table renders below the text.
    let text = text::join_docs(member.summary.as_deref(), member.remarks.as_deref());
    let text = if fields.is_empty() {
        text::remove_bottom_margin(&text)
    } else {
        text
    };

    PropertyView {
        name: member.display_name().to_string(),
        type_name: type_ref.map(TypeRef::spec_display).unwrap_or("").to_string(),
        property_description: PropertyDescription {
            text,
            has_enum: !fields.is_empty(),
            fields,
        },
    }
}

/// Order properties for rendering. Declaration order is preserved except for
/// names that share a non-digit prefix and differ only by a trailing numeral,
/// which order by the numeral's integer value ("Device2" before "Device10").
pub fn sort(properties: &mut [PropertyView]) {
    properties.sort_by(|a, b| {
        let (prefix_a, number_a) = split_trailing_number(&a.name);
        let (prefix_b, number_b) = split_trailing_number(&b.name);
        match (number_a, number_b) {
            (Some(number_a), Some(number_b)) if prefix_a == prefix_b => {
                number_a.cmp(&number_b)
            }
            _ => Ordering::Equal,
        }
    });
}

fn split_trailing_number(name: &str) -> (&str, Option<u64>) {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    (prefix, name[prefix.len()..].parse().ok())
}
