//! Type and field descriptors.

use serde::{Deserialize, Serialize};

/// A type found in a compiled module, with its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Simple type name (e.g., "Person").
    pub name: String,
    /// Enclosing namespace, if any (e.g., "App.Models").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Fully-qualified names of the attributes applied to the type.
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Create a descriptor with no namespace and no attributes.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: Vec::new(),
            fields,
        }
    }

    /// Set the namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add an attribute by fully-qualified name.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Namespace-qualified name (e.g., "App.Models.Person").
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }

    /// Returns true if an attribute with exactly this fully-qualified name is applied.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }
}

/// A field of a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as stored in metadata, possibly a compiler-generated
    /// backing field such as `<Name>k__BackingField`.
    #[serde(rename = "name")]
    pub raw_name: String,
    /// Fully-qualified declared type (e.g., "System.String").
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl FieldDescriptor {
    pub fn new(raw_name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            declared_type: declared_type.into(),
        }
    }
}
