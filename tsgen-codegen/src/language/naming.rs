//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how type names become file names, how raw field names become
/// property names, and which words are reserved.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform type name to file stem (e.g., "OrderItem" -> "order-item")
    pub type_to_file: fn(&str) -> String,
    /// Suffix appended to the file stem (e.g., ".model.ts")
    pub file_suffix: &'static str,
    /// Transform a raw field name to a property name
    pub field_to_property: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Output file name for a type.
    pub fn file_name(&self, type_name: &str) -> String {
        format!("{}{}", (self.type_to_file)(type_name), self.file_suffix)
    }

    /// Property name for a raw field name.
    pub fn property_name(&self, raw_name: &str) -> String {
        (self.field_to_property)(raw_name)
    }
}
