//! TypeScript-specific naming conventions.

use tsclassgen_codegen::language::NamingConvention;
use tsclassgen_core::{lower_first, to_kebab_case};

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Files use kebab-case
    type_to_file: to_kebab_case,
    file_suffix: ".model.ts",
    field_to_property: property_name,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved type names
        "any",
        "boolean",
        "never",
        "number",
        "object",
        "string",
        "symbol",
        "undefined",
        "unknown",
    ],
};

/// Logical name of a field.
///
/// Compiler-generated backing fields look like `<Name>k__BackingField`; the
/// logical name is the text between the first `<` and the `>` after it.
/// Anything else (or an empty bracket pair) is returned unchanged.
pub fn extract_field_name(raw: &str) -> &str {
    let Some(open) = raw.find('<') else {
        return raw;
    };
    let inner = &raw[open + 1..];
    match inner.find('>') {
        Some(close) if close > 0 => &inner[..close],
        _ => raw,
    }
}

/// Property name for a raw field name: the logical name with its first
/// character lower-cased.
pub fn property_name(raw: &str) -> String {
    lower_first(extract_field_name(raw))
}
