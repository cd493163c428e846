//! Member reshaping — the rendering views built from one type's metadata.
//!
//! Three independent views: operator input/output pairs, the properties
//! table (own + inherited, enum-backed properties expanded inline), and enum
//! fields. Every shared-lookup dereference is guarded; missing data degrades
//! to an omitted view, never an error.

pub mod enums;
pub mod operators;
pub mod properties;

use crate::model::{PageModel, PropertyView, SharedLookup};

/// Build the full properties table for a class: declared properties unioned
/// with inherited ones, in declaration order with numeral-suffixed names
/// ordered numerically.
pub fn class_properties(page: &PageModel, shared: &SharedLookup) -> Vec<PropertyView> {
    let mut views = properties::extract(page, shared);
    views.extend(properties::extract_inherited(page, shared));
    properties::sort(&mut views);
    views
}
