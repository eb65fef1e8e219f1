//! TypeScript type mapper implementation.

use tsclassgen_codegen::language::{MappedType, TypeMapper};

use crate::Error;

/// Generic list type whose element type becomes a TypeScript array.
const LIST_TYPE: &str = "System.Collections.Generic.List";

/// Simple names of the system value types. Everything else is a reference type.
const VALUE_TYPES: &[&str] = &[
    "Boolean",
    "Byte",
    "Char",
    "DateTime",
    "DateTimeOffset",
    "Decimal",
    "Double",
    "Guid",
    "Int16",
    "Int32",
    "Int64",
    "SByte",
    "Single",
    "TimeSpan",
    "UInt16",
    "UInt32",
    "UInt64",
];

/// Look up a simple type name (or its `Name[]` array form) in the mapping table.
///
/// Only the names listed here are translated. Notably `Boolean[]`, `Guid[]`
/// and `DateTime[]` are absent and therefore pass through unchanged.
pub fn lookup(simple_name: &str) -> Option<&'static str> {
    match simple_name {
        "Guid" | "String" => Some("string"),
        "String[]" => Some("string[]"),
        "Int32" | "Int64" | "Single" => Some("number"),
        "Int32[]" | "Int64[]" | "Single[]" => Some("number[]"),
        "Boolean" => Some("boolean"),
        "DateTime" | "DateTimeOffset" => Some("Date"),
        _ => None,
    }
}

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    type Error = Error;

    fn map_type(&self, declared_type: &str) -> Result<MappedType, Error> {
        if let Some(qualified) = list_element(declared_type) {
            let element = simple_name(qualified)?;
            let array = format!("{}[]", element);
            return Ok(MappedType {
                annotation: lookup(&array).map(str::to_string).unwrap_or(array),
                is_reference: true,
                element: element.to_string(),
                namespace: namespace_of(qualified).to_string(),
            });
        }

        let qualified = strip_assembly(declared_type);
        let simple = simple_name(qualified)?;
        let annotation = lookup(simple).unwrap_or(simple).to_string();
        let element = simple.strip_suffix("[]").unwrap_or(simple);
        let is_reference = simple.ends_with("[]") || !VALUE_TYPES.contains(&simple);

        Ok(MappedType {
            annotation,
            is_reference,
            element: element.to_string(),
            namespace: namespace_of(qualified).to_string(),
        })
    }
}

/// Element type of `System.Collections.Generic.List<T>` or of the runtime
/// spelling ``System.Collections.Generic.List`1[[T, Assembly, ...]]``.
fn list_element(declared_type: &str) -> Option<&str> {
    let rest = declared_type.trim().strip_prefix(LIST_TYPE)?;

    if let Some(inner) = rest.strip_prefix('<') {
        let end = inner.rfind('>')?;
        return Some(strip_assembly(&inner[..end]));
    }

    let rest = rest.strip_prefix('`')?;
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    let inner = rest.strip_prefix("[[")?;
    let end = inner.find([',', ']']).unwrap_or(inner.len());
    Some(inner[..end].trim())
}

/// Drop a trailing assembly qualification (`, Assembly, Version=...`),
/// ignoring commas nested inside generic arguments.
fn strip_assembly(name: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in name.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return name[..i].trim(),
            _ => {}
        }
    }
    name.trim()
}

/// Position of the last namespace separator, looking only before any generic arguments.
fn separator(qualified: &str) -> Option<usize> {
    let head_end = qualified.find(['<', '`']).unwrap_or(qualified.len());
    qualified[..head_end].rfind('.')
}

/// The part of a qualified name after its last namespace separator.
fn simple_name(qualified: &str) -> Result<&str, Error> {
    match separator(qualified) {
        Some(dot) if dot + 1 < qualified.len() => Ok(&qualified[dot + 1..]),
        _ => Err(Error::MissingNamespace {
            declared_type: qualified.to_string(),
        }),
    }
}

/// The part of a qualified name before its last namespace separator.
fn namespace_of(qualified: &str) -> &str {
    separator(qualified).map(|dot| &qualified[..dot]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, &str)] = &[
        ("Guid", "string"),
        ("String", "string"),
        ("String[]", "string[]"),
        ("Int32", "number"),
        ("Int64", "number"),
        ("Single", "number"),
        ("Int32[]", "number[]"),
        ("Int64[]", "number[]"),
        ("Single[]", "number[]"),
        ("Boolean", "boolean"),
        ("DateTime", "Date"),
        ("DateTimeOffset", "Date"),
    ];

    fn map(declared: &str) -> MappedType {
        TypeScriptTypeMapper.map_type(declared).unwrap()
    }

    #[test]
    fn test_table_entries() {
        for (simple, ts) in TABLE {
            assert_eq!(lookup(simple), Some(*ts), "lookup({simple})");
            assert_eq!(map(&format!("System.{simple}")).annotation, *ts);
        }
    }

    #[test]
    fn test_pass_through() {
        for simple in ["Address", "Boolean[]", "Guid[]", "DateTime[]", "Double", "Object"] {
            assert_eq!(lookup(simple), None);
            assert_eq!(map(&format!("App.Models.{simple}")).annotation, simple);
        }
    }

    #[test]
    fn test_boolean_array_is_not_translated() {
        assert_eq!(map("System.Boolean[]").annotation, "Boolean[]");
    }

    #[test]
    fn test_list_of_mapped_element() {
        assert_eq!(
            map("System.Collections.Generic.List<System.String>").annotation,
            "string[]"
        );
        assert_eq!(
            map("System.Collections.Generic.List<System.Int64>").annotation,
            "number[]"
        );
    }

    #[test]
    fn test_list_of_unmapped_element() {
        assert_eq!(
            map("System.Collections.Generic.List<System.Boolean>").annotation,
            "Boolean[]"
        );
        assert_eq!(
            map("System.Collections.Generic.List<App.Models.Address>").annotation,
            "Address[]"
        );
    }

    #[test]
    fn test_list_runtime_spelling() {
        let declared = "System.Collections.Generic.List`1[[System.String, System.Private.CoreLib, \
                        Version=4.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e]], \
                        System.Private.CoreLib";
        assert_eq!(map(declared).annotation, "string[]");
    }

    #[test]
    fn test_assembly_qualified_name() {
        let declared = "System.Int32, System.Private.CoreLib, Version=4.0.0.0";
        assert_eq!(map(declared).annotation, "number");
    }

    #[test]
    fn test_last_separator_wins() {
        assert_eq!(map("Company.Product.Models.Customer").annotation, "Customer");
    }

    #[test]
    fn test_missing_namespace_is_an_error() {
        let err = TypeScriptTypeMapper.map_type("String").unwrap_err();
        assert_eq!(
            err,
            Error::MissingNamespace {
                declared_type: "String".to_string()
            }
        );

        assert!(TypeScriptTypeMapper.map_type("System.").is_err());
        assert!(
            TypeScriptTypeMapper
                .map_type("System.Collections.Generic.List<String>")
                .is_err()
        );
    }

    #[test]
    fn test_reference_flag() {
        assert!(!map("System.Int32").is_reference);
        assert!(!map("System.Guid").is_reference);
        assert!(!map("System.DateTimeOffset").is_reference);
        assert!(map("System.String").is_reference);
        assert!(map("System.Int32[]").is_reference);
        assert!(map("System.Collections.Generic.List<System.Int32>").is_reference);
        assert!(map("App.Models.Address").is_reference);
    }

    #[test]
    fn test_element_namespace() {
        assert_eq!(map("App.Models.Address").namespace, "App.Models");
        assert_eq!(
            map("System.Collections.Generic.List<App.Models.Tag>").namespace,
            "App.Models"
        );
        assert_eq!(map("App.Models.Tag[]").namespace, "App.Models");
        assert_eq!(
            map("System.Int32, System.Private.CoreLib, Version=4.0.0.0").namespace,
            "System"
        );
    }

    #[test]
    fn test_element_name() {
        assert_eq!(map("System.Boolean[]").element, "Boolean");
        assert_eq!(
            map("System.Collections.Generic.List<System.String>").element,
            "String"
        );
        assert_eq!(map("System.Int32").element, "Int32");
    }

    #[test]
    fn test_strip_assembly_keeps_generic_arguments() {
        assert_eq!(
            strip_assembly("App.Pair<System.String, System.Int32>, App"),
            "App.Pair<System.String, System.Int32>"
        );
    }
}
