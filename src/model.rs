//! Data model for documentation page metadata — pipeline-schema-shaped.
//!
//! Mirrors the managed-reference page schema the external generator hands to
//! template extensions. Every field is optional or defaultable: pages for
//! namespaces, members, and includes carry different subsets. Unknown fields
//! round-trip through `#[serde(flatten)]` maps so the annotated model handed
//! back to the renderer is the same object, extended.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One documentation page: a class, enum, or member reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageModel {
    pub uid: Option<String>,
    /// Page kind: "class", "enum", "struct", ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub summary: Option<String>,
    pub remarks: Option<String>,
    pub syntax: Option<Syntax>,
    /// Ancestor chain in declaration order, root first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inheritance: Vec<TypeRef>,
    /// Direct members: properties, methods, enum fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Member>,
    /// Members inherited from ancestors, by uid + owning ancestor uid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inherited_members: Vec<InheritedMember>,
    /// The namespaced extension block attached by the pre-transform hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonsai: Option<BonsaiExtension>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl PageModel {
    pub fn is_class(&self) -> bool {
        self.kind.as_deref() == Some("class")
    }

    pub fn is_enum(&self) -> bool {
        self.kind.as_deref() == Some("enum")
    }

    /// Rendered declaration text, e.g. the attribute + class signature.
    pub fn declaration(&self) -> Option<&str> {
        self.syntax.as_ref().and_then(Syntax::declaration)
    }
}

/// A direct member of a type: property, method, or enum field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    pub uid: Option<String>,
    /// Member kind: "property", "method", "field", ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Per-language display name spans; the first span is the default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<NameSpan>,
    pub summary: Option<String>,
    pub remarks: Option<String>,
    pub syntax: Option<Syntax>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Member {
    pub fn display_name(&self) -> &str {
        self.name
            .first()
            .and_then(|span| span.value.as_deref())
            .unwrap_or("")
    }

    pub fn declaration(&self) -> Option<&str> {
        self.syntax.as_ref().and_then(Syntax::declaration)
    }
}

/// Declaration syntax: rendered content plus parameter/return references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Syntax {
    /// Per-language rendered declaration spans.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<NameSpan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Return value of a method, or the declared type of a property.
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnValue>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Syntax {
    pub fn declaration(&self) -> Option<&str> {
        self.content.first().and_then(|span| span.value.as_deref())
    }
}

/// A `{ lang, value }` display span.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSpan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A declared method parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
    pub description: Option<String>,
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A return value (or property type) with its documentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnValue {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
    pub description: Option<String>,
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A reference to another documented type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeRef {
    pub uid: Option<String>,
    /// Rendered display-name spans, markup included.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spec_name: Vec<NameSpan>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl TypeRef {
    pub fn spec_display(&self) -> &str {
        self.spec_name
            .first()
            .and_then(|span| span.value.as_deref())
            .unwrap_or("")
    }
}

/// An inherited-member reference: the member uid plus its owning ancestor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InheritedMember {
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Uid of the ancestor type that declares this member.
    pub parent: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Page key for a type uid, as used by the pipeline's shared object.
pub fn page_key(uid: &str) -> String {
    format!("~/api/{uid}.yml")
}

/// Read-only registry of every documented type, keyed by `"~/api/<uid>.yml"`.
///
/// The pipeline builds this once per site; the hooks receive it explicitly on
/// every call instead of reaching into a hidden global.
#[derive(Debug, Default)]
pub struct SharedLookup {
    entries: HashMap<String, PageModel>,
}

impl SharedLookup {
    pub fn new(entries: HashMap<String, PageModel>) -> Self {
        Self { entries }
    }

    /// Deserialize the pipeline's shared object (a map of page key → page).
    pub fn from_value(value: serde_json::Value) -> anyhow::Result<Self> {
        use anyhow::Context as _;
        let entries = serde_json::from_value(value)
            .context("shared lookup does not match the page schema")?;
        Ok(Self { entries })
    }

    /// Register a page under its own uid. Pages without a uid are ignored.
    pub fn insert(&mut self, page: PageModel) {
        if let Some(uid) = page.uid.clone() {
            self.entries.insert(page_key(&uid), page);
        }
    }

    /// Resolve a type uid to its page, if the type is documented here.
    pub fn get(&self, uid: &str) -> Option<&PageModel> {
        self.entries.get(&page_key(uid))
    }
}

/// Operator documentation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Source,
    Sink,
    Transform,
    Combinator,
    Workflow,
}

/// The `bonsai` extension block attached to each annotated page.
///
/// Empty views are omitted entirely, so templates can test the `has*` flags
/// or key presence interchangeably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BonsaiExtension {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_type: Option<OperatorKind>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_workflow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<OperatorOverload>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_properties: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyView>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_enum_fields: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_fields: Option<Vec<EnumFieldView>>,
}

/// One Process/Generate entry point: description plus input/output shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorOverload {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<IoDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<IoDescriptor>,
}

/// Input or output shape of an operator entry point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IoDescriptor {
    /// Normalized type display name (observable wrapper stripped).
    pub spec_name: String,
    pub description: String,
    /// False when the resolved type is a class documented in this site.
    pub external: bool,
}

impl IoDescriptor {
    pub fn is_empty(&self) -> bool {
        self.spec_name.is_empty() && self.description.is_empty()
    }
}

/// One row of the rendered properties table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyView {
    pub name: String,
    /// Declared type display name.
    #[serde(rename = "type")]
    pub type_name: String,
    pub property_description: PropertyDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDescription {
    pub text: String,
    pub has_enum: bool,
    /// Inline expansion of the fields when the property type is an enum.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EnumFieldView>,
}

/// One row of a rendered enum-fields table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumFieldView {
    /// Rendered field declaration, e.g. "High = 1".
    #[serde(rename = "field&value")]
    pub value: String,
    #[serde(rename = "enumDescription")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_key_format() {
        assert_eq!(page_key("Bonsai.Shaders.UpdateTexture"), "~/api/Bonsai.Shaders.UpdateTexture.yml");
    }

    #[test]
    fn lookup_resolves_by_uid() {
        let mut shared = SharedLookup::default();
        shared.insert(PageModel {
            uid: Some("N.Widget".to_string()),
            kind: Some("class".to_string()),
            ..Default::default()
        });

        assert!(shared.get("N.Widget").is_some());
        assert!(shared.get("N.Missing").is_none());
    }

    #[test]
    fn unknown_fields_round_trip() {
        let value = serde_json::json!({
            "uid": "N.Widget",
            "type": "class",
            "langs": ["csharp"],
            "assemblies": ["N"]
        });

        let page: PageModel = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(page.rest.len(), 2);

        let back = serde_json::to_value(&page).unwrap();
        assert_eq!(back["langs"], value["langs"]);
        assert_eq!(back["assemblies"], value["assemblies"]);
    }

    #[test]
    fn empty_extension_serializes_description_only() {
        let ext = BonsaiExtension {
            description: "A widget.".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&ext).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["description"], "A widget.");
    }
}
