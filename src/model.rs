//! Typed model of the API description, shape-checked and YAML-agnostic.

/// Loaded API description: categories in file order.
#[derive(Debug, Default)]
pub struct ApiDescription {
    pub categories: Vec<(String, CategorySpec)>,
}

impl ApiDescription {
    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }
}

/// One category's `functions` list, in file order.
#[derive(Debug, Default)]
pub struct CategorySpec {
    pub functions: Vec<FunctionEntry>,
}

/// A single declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionEntry {
    /// `[name, return-type, comment]`. No params, no doc link.
    Shorthand {
        name: String,
        return_type: String,
        comment: String,
    },
    /// `? [name, return-type, comment, link] : [[param, type], ...]`
    Full {
        signature: Signature,
        params: Vec<Param>,
    },
    /// Same key as `Full`, but the value was not a list of pairs.
    /// `raw` is the value's textual representation.
    Degraded { signature: Signature, raw: String },
}

impl FunctionEntry {
    pub fn name(&self) -> &str {
        match self {
            FunctionEntry::Shorthand { name, .. } => name,
            FunctionEntry::Full { signature, .. } | FunctionEntry::Degraded { signature, .. } => {
                &signature.name
            }
        }
    }
}

/// The 4-tuple key of a full entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub return_type: String,
    pub comment: String,
    /// Path relative to the documentation base URL, e.g. "/object/#getguid"
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}
