//! Guard generation.
//!
//! Turns an [`InterfaceDefinition`] into the TypeScript source text of a
//! runtime predicate `is<Name>(value: unknown): value is <Name>`.

use crate::domain::interface::{InterfaceDefinition, PrimitiveKind, PropertyDefinition};

/// Compute the guard function name for an interface: `is` plus the interface
/// name with its first character upper-cased and the remainder unchanged.
pub fn guard_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("is{}{}", first.to_uppercase(), chars.as_str()),
        None => String::from("is"),
    }
}

/// Emits guard function source text. Generation is total over the model:
/// any well-formed definition produces a guard.
pub struct GuardGenerator;

impl GuardGenerator {
    /// Generate the guard function for one interface, doc comment included.
    /// The emitted predicate checks property presence and, where a primitive
    /// kind is known, the runtime type tag; the `&&` chain short-circuits on
    /// the first missing or mismatched property.
    pub fn generate(def: &InterfaceDefinition) -> String {
        let mut lines = Vec::new();

        lines.push("/**".to_string());
        lines.push(format!(" * Ensures that value is a {} interface.", def.name));
        lines.push(" * @param value To check.".to_string());
        lines.push(format!(
            " * @returns True if value is {}, false otherwise.",
            def.name
        ));
        lines.push(" */".to_string());
        lines.push(format!(
            "export function {}(value: unknown): value is {} {{",
            guard_name(&def.name),
            def.name
        ));
        lines.push("  if (typeof value !== \"object\" || value === null) {".to_string());
        lines.push("    return false;".to_string());
        lines.push("  }".to_string());

        let checks: Vec<String> = def
            .properties
            .iter()
            .flat_map(Self::property_checks)
            .collect();
        if checks.is_empty() {
            lines.push("  return true;".to_string());
        } else {
            lines.push("  const obj = value as Record<string, unknown>;".to_string());
            lines.push(format!("  return {};", checks.join("\n    && ")));
        }
        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// The runtime checks for a single property, in evaluation order:
    /// presence first, then the kind check when the kind carries one.
    fn property_checks(prop: &PropertyDefinition) -> Vec<String> {
        let mut checks = vec![format!("\"{}\" in obj", prop.name)];
        match prop.kind {
            Some(PrimitiveKind::Null) => {
                checks.push(format!("obj[\"{}\"] === null", prop.name));
            }
            Some(kind) => {
                if let Some(tag) = kind.typeof_tag() {
                    checks.push(format!("typeof obj[\"{}\"] === \"{}\"", prop.name, tag));
                }
            }
            None => {}
        }
        checks
    }
}

/// Generate guards for every interface in extraction order, separated by one
/// blank line. Zero interfaces yield empty output text.
pub fn generate_module(definitions: &[InterfaceDefinition]) -> String {
    definitions
        .iter()
        .map(GuardGenerator::generate)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn prop(name: &str, kind: Option<PrimitiveKind>) -> PropertyDefinition {
        PropertyDefinition {
            name: name.to_string(),
            kind,
        }
    }

    #[test]
    fn guard_name_upper_cases_the_first_letter() {
        assert_eq!(guard_name("foo"), "isFoo");
        assert_eq!(guard_name("Foo"), "isFoo");
        assert_eq!(guard_name("x"), "isX");
    }

    #[test]
    fn guard_name_leaves_the_remainder_unchanged() {
        assert_eq!(guard_name("fooBar"), "isFooBar");
        assert_eq!(guard_name("HTTPResponse"), "isHTTPResponse");
        assert_eq!(guard_name("foo_bar"), "isFoo_bar");
    }

    #[test]
    fn generates_presence_and_typeof_checks() {
        let def = InterfaceDefinition {
            name: "Foo".to_string(),
            properties: vec![
                prop("prop1", Some(PrimitiveKind::String)),
                prop("prop2", Some(PrimitiveKind::Number)),
                prop("prop3", None),
            ],
        };

        assert_eq!(
            GuardGenerator::generate(&def),
            indoc! {r#"
                /**
                 * Ensures that value is a Foo interface.
                 * @param value To check.
                 * @returns True if value is Foo, false otherwise.
                 */
                export function isFoo(value: unknown): value is Foo {
                  if (typeof value !== "object" || value === null) {
                    return false;
                  }
                  const obj = value as Record<string, unknown>;
                  return "prop1" in obj
                    && typeof obj["prop1"] === "string"
                    && "prop2" in obj
                    && typeof obj["prop2"] === "number"
                    && "prop3" in obj;
                }
            "#}
        );
    }

    #[test]
    fn empty_interface_only_requires_a_non_null_object() {
        let def = InterfaceDefinition {
            name: "Empty".to_string(),
            properties: vec![],
        };

        assert_eq!(
            GuardGenerator::generate(&def),
            indoc! {r#"
                /**
                 * Ensures that value is a Empty interface.
                 * @param value To check.
                 * @returns True if value is Empty, false otherwise.
                 */
                export function isEmpty(value: unknown): value is Empty {
                  if (typeof value !== "object" || value === null) {
                    return false;
                  }
                  return true;
                }
            "#}
        );
    }

    #[test]
    fn null_kind_generates_an_is_null_check() {
        let def = InterfaceDefinition {
            name: "Nothing".to_string(),
            properties: vec![prop("gone", Some(PrimitiveKind::Null))],
        };
        let guard = GuardGenerator::generate(&def);
        assert!(guard.contains(r#""gone" in obj"#));
        assert!(guard.contains(r#"obj["gone"] === null"#));
        assert!(!guard.contains("typeof obj[\"gone\"]"));
    }

    #[test]
    fn undefined_kind_checks_the_undefined_tag() {
        let def = InterfaceDefinition {
            name: "Sparse".to_string(),
            properties: vec![prop("hole", Some(PrimitiveKind::Undefined))],
        };
        let guard = GuardGenerator::generate(&def);
        assert!(guard.contains(r#""hole" in obj"#));
        assert!(guard.contains(r#"typeof obj["hole"] === "undefined""#));
    }

    #[test]
    fn marker_kinds_are_presence_only() {
        for kind in [
            PrimitiveKind::Void,
            PrimitiveKind::Any,
            PrimitiveKind::Unknown,
            PrimitiveKind::Never,
            PrimitiveKind::Object,
        ] {
            let def = InterfaceDefinition {
                name: "Marker".to_string(),
                properties: vec![prop("field", Some(kind))],
            };
            let guard = GuardGenerator::generate(&def);
            assert!(guard.contains(r#"return "field" in obj;"#), "{guard}");
            assert!(!guard.contains("typeof obj"), "{guard}");
        }
    }

    #[test]
    fn module_output_separates_guards_with_a_blank_line() {
        let defs = vec![
            InterfaceDefinition {
                name: "A".to_string(),
                properties: vec![],
            },
            InterfaceDefinition {
                name: "B".to_string(),
                properties: vec![],
            },
        ];
        let out = generate_module(&defs);
        assert!(out.contains("}\n\n/**"));
        assert!(out.ends_with("}\n"));
        assert_eq!(generate_module(&[]), "");
    }
}
