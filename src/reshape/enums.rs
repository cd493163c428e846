//! Enum fields view — display value and cleaned description per field.

use crate::model::{EnumFieldView, PageModel};
use crate::text;

/// List the fields of an enum page for table rendering.
pub fn extract(page: &PageModel) -> Vec<EnumFieldView> {
    page.children
        .iter()
        .filter(|member| member.kind.as_deref() == Some("field"))
        .map(|member| EnumFieldView {
            value: member.declaration().unwrap_or("").to_string(),
            description: text::remove_bottom_margin(&text::join_docs(
                member.summary.as_deref(),
                member.remarks.as_deref(),
            )),
        })
        .collect()
}
