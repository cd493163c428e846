//! Operator input/output view — Process/Generate entry points.

use crate::model::{IoDescriptor, Member, OperatorOverload, PageModel, SharedLookup, TypeRef};
use crate::text;

/// Collect the input/output descriptors for every Process/Generate member.
pub fn extract(page: &PageModel, shared: &SharedLookup) -> Vec<OperatorOverload> {
    page.children
        .iter()
        .filter(|member| {
            let name = member.display_name();
            name.contains("Process") || name.contains("Generate")
        })
        .map(|member| overload_view(member, shared))
        .collect()
}

fn overload_view(member: &Member, shared: &SharedLookup) -> OperatorOverload {
    let syntax = member.syntax.as_ref();

    // The observable input is always the first declared parameter; source
    // operators have none.
    let input = syntax
        .and_then(|s| s.parameters.first())
        .map(|parameter| {
            descriptor(
                parameter.type_ref.as_ref(),
                parameter.description.as_deref(),
                parameter.remarks.as_deref(),
                shared,
            )
        })
        .filter(|descriptor| !descriptor.is_empty());

    let output = syntax.and_then(|s| s.returns.as_ref()).map(|returns| {
        descriptor(
            returns.type_ref.as_ref(),
            returns.description.as_deref(),
            returns.remarks.as_deref(),
            shared,
        )
    });

    OperatorOverload {
        description: text::join_docs(member.summary.as_deref(), member.remarks.as_deref()),
        input,
        output,
    }
}

fn descriptor(
    type_ref: Option<&TypeRef>,
    description: Option<&str>,
    remarks: Option<&str>,
    shared: &SharedLookup,
) -> IoDescriptor {
    let resolved_class = type_ref
        .and_then(|t| t.uid.as_deref())
        .and_then(|uid| shared.get(uid))
        .is_some_and(PageModel::is_class);

    IoDescriptor {
        spec_name: text::normalize_spec_name(
            type_ref.map(TypeRef::spec_display).unwrap_or(""),
        ),
        description: text::remove_bottom_margin(&text::join_docs(description, remarks)),
        external: !resolved_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NameSpan, Parameter, ReturnValue, Syntax};

    fn name(value: &str) -> Vec<NameSpan> {
        vec![NameSpan {
            lang: Some("csharp".to_string()),
            value: Some(value.to_string()),
        }]
    }

    fn type_ref(uid: &str, spec: &str) -> TypeRef {
        TypeRef {
            uid: Some(uid.to_string()),
            spec_name: name(spec),
            ..Default::default()
        }
    }

    fn process_member(input: Option<Parameter>, output: ReturnValue) -> Member {
        Member {
            name: name("Process(IObservable<TSource>)"),
            summary: Some("<p>Processes the sequence.</p>".to_string()),
            syntax: Some(Syntax {
                parameters: input.into_iter().collect(),
                returns: Some(output),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn selects_process_and_generate_members() {
        let page = PageModel {
            children: vec![
                Member {
                    name: name("Generate()"),
                    syntax: Some(Syntax::default()),
                    ..Default::default()
                },
                Member {
                    name: name("ToString()"),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let overloads = extract(&page, &SharedLookup::default());
        assert_eq!(overloads.len(), 1);
    }

    #[test]
    fn empty_input_is_omitted() {
        let member = process_member(
            None,
            ReturnValue {
                type_ref: Some(type_ref("System.Int32", "int")),
                ..Default::default()
            },
        );
        let page = PageModel {
            children: vec![member],
            ..Default::default()
        };

        let overloads = extract(&page, &SharedLookup::default());
        assert!(overloads[0].input.is_none());
        assert_eq!(overloads[0].output.as_ref().unwrap().spec_name, "int");
    }

    #[test]
    fn output_resolved_in_lookup_is_internal() {
        let mut shared = SharedLookup::default();
        shared.insert(PageModel {
            uid: Some("N.Frame".to_string()),
            kind: Some("class".to_string()),
            ..Default::default()
        });

        let member = process_member(
            Some(Parameter {
                type_ref: Some(type_ref("N.Frame", "Frame")),
                description: Some("<p>Input frames.</p>".to_string()),
                ..Default::default()
            }),
            ReturnValue {
                type_ref: Some(type_ref("N.Frame", "Frame")),
                description: Some("<p>Output frames.</p>".to_string()),
                ..Default::default()
            },
        );
        let page = PageModel {
            children: vec![member],
            ..Default::default()
        };

        let overloads = extract(&page, &shared);
        let input = overloads[0].input.as_ref().unwrap();
        let output = overloads[0].output.as_ref().unwrap();
        assert!(!input.external);
        assert!(!output.external);
        assert_eq!(
            output.description,
            "<p style=\"margin-bottom:0;\">Output frames.</p>"
        );
    }

    #[test]
    fn unresolved_output_is_external() {
        let member = process_member(
            None,
            ReturnValue {
                type_ref: Some(type_ref("System.String", "string")),
                ..Default::default()
            },
        );
        let page = PageModel {
            children: vec![member],
            ..Default::default()
        };

        let overloads = extract(&page, &SharedLookup::default());
        assert!(overloads[0].output.as_ref().unwrap().external);
    }

    #[test]
    fn missing_syntax_yields_bare_overload() {
        let page = PageModel {
            children: vec![Member {
                name: name("Process()"),
                summary: Some("Doc.".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let overloads = extract(&page, &SharedLookup::default());
        assert_eq!(overloads[0].description, "Doc.");
        assert!(overloads[0].input.is_none());
        assert!(overloads[0].output.is_none());
    }
}
