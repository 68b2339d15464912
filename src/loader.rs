//! YAML loader: turns the raw API description into the typed model.
//!
//! All shape inspection happens here. An entry is classified as soon as it is
//! read, so the renderer only ever sees [`FunctionEntry`] values:
//!
//! - a sequence `[name, return-type, comment]` is a shorthand entry
//! - a single-entry mapping keyed by `[name, return-type, comment, link]` is a
//!   full entry when its value is a list of `[param, type]` pairs, and a
//!   degraded entry for any other value

use crate::error::LoadError;
use crate::model::*;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Parse `content` and load the functions of `category`.
///
/// Other categories are not inspected.
pub fn parse(content: &str, category: &str) -> Result<ApiDescription, LoadError> {
    let root: Value = serde_yaml::from_str(content)?;
    let Value::Mapping(root) = untag(&root) else {
        return Err(LoadError::RootNotMapping);
    };

    let spec = root
        .get(category)
        .ok_or_else(|| LoadError::MissingCategory(category.to_string()))?;
    let spec = load_category(category, spec)?;
    debug!(category, functions = spec.functions.len(), "loaded category");

    Ok(ApiDescription {
        categories: vec![(category.to_string(), spec)],
    })
}

fn load_category(category: &str, value: &Value) -> Result<CategorySpec, LoadError> {
    let Value::Mapping(map) = untag(value) else {
        return Err(LoadError::CategoryNotMapping(category.to_string()));
    };
    let functions = map
        .get("functions")
        .ok_or_else(|| LoadError::MissingFunctions(category.to_string()))?;
    let Value::Sequence(items) = untag(functions) else {
        return Err(LoadError::FunctionsNotSequence(category.to_string()));
    };

    let functions = items
        .iter()
        .enumerate()
        .map(|(index, item)| load_entry(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CategorySpec { functions })
}

fn load_entry(index: usize, value: &Value) -> Result<FunctionEntry, LoadError> {
    let malformed = |reason: &str| LoadError::MalformedEntry {
        index,
        reason: reason.to_string(),
    };

    match untag(value) {
        Value::Sequence(fields) => {
            if fields.len() < 3 {
                return Err(malformed(
                    "shorthand entry needs [name, return-type, comment]",
                ));
            }
            Ok(FunctionEntry::Shorthand {
                name: value_text(&fields[0]),
                return_type: value_text(&fields[1]),
                comment: value_text(&fields[2]),
            })
        }
        Value::Mapping(map) => load_full_entry(map).map_err(|reason| malformed(reason)),
        _ => Err(malformed("expected a sequence or a single-entry mapping")),
    }
}

fn load_full_entry(map: &Mapping) -> Result<FunctionEntry, &'static str> {
    if map.len() != 1 {
        return Err("full entry must be a mapping with exactly one key");
    }
    let Some((key, value)) = map.iter().next() else {
        return Err("full entry must be a mapping with exactly one key");
    };

    let Value::Sequence(fields) = untag(key) else {
        return Err("full entry key must be [name, return-type, comment, link]");
    };
    let fields: Vec<String> = fields.iter().map(value_text).collect();
    let [name, return_type, comment, link]: [String; 4] = fields
        .try_into()
        .map_err(|_| "full entry key must be [name, return-type, comment, link]")?;
    let signature = Signature {
        name,
        return_type,
        comment,
        link,
    };

    match param_pairs(value) {
        Some(params) => Ok(FunctionEntry::Full { signature, params }),
        None => {
            let raw = value_text(value);
            debug!(function = %signature.name, raw = %raw, "irregular parameter data");
            Ok(FunctionEntry::Degraded { signature, raw })
        }
    }
}

/// `Some` only when every element is a two-element sequence. An empty list is valid.
/// Pair elements need not be scalars: `[cb, ~]` or `[opts, {a: int}]` still count.
fn param_pairs(value: &Value) -> Option<Vec<Param>> {
    let Value::Sequence(items) = untag(value) else {
        return None;
    };
    items
        .iter()
        .map(|item| match untag(item) {
            Value::Sequence(pair) if pair.len() == 2 => Some(Param {
                name: value_text(&pair[0]),
                ty: value_text(&pair[1]),
            }),
            _ => None,
        })
        .collect()
}

fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

/// Text of any value. Strings are verbatim, collections are flow style.
///
/// Used for every field, so odd values (null, tables) render instead of failing.
fn value_text(value: &Value) -> String {
    match untag(value) {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(value_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", value_text(k), value_text(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => value_text(&tagged.value),
    }
}
