//! Lua annotation templates (LuaLS `---@` syntax).
//!
//! Pure formatting over typed fields. Block assembly lives in the parent module.

use crate::model::Param;

/// Base of every documentation link.
pub const DEFAULT_BASE_URL: &str = "https://api.tabletopsimulator.com/lua-in-tabletop-simulator";

/// Per-file preamble: marks the file as a definition file and declares the class.
pub fn meta_header(category: &str) -> String {
    format!("---@meta {category}\n---@class {category}")
}

/// `---text`, with every line of a multi-line text prefixed.
///
/// Trailing newlines (YAML `|` block scalars) are dropped first, so single-line
/// text always renders as exactly `---{text}`.
pub fn doc_comment(text: &str) -> String {
    text.trim_end_matches('\n')
        .split('\n')
        .map(|line| format!("---{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn param_line(param: &Param) -> String {
    format!("---@param {} {}", param.name, param.ty)
}

/// Placeholder for parameter data that could not be read as pairs.
pub fn todo_line(raw: &str) -> String {
    doc_comment(&format!("TODO: {raw}"))
}

pub fn return_line(return_type: &str) -> String {
    format!("---@return {return_type}")
}

/// Horizontal-rule framed link to the online API page.
pub fn doc_link(base_url: &str, link: &str) -> String {
    format!("---\n---***\n---[Open Documentation]({base_url}{link})\n---")
}

pub fn signature_line(category: &str, name: &str, params: &[&str]) -> String {
    format!("function {category}.{name}({}) end", params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_comment() {
        assert_eq!(doc_comment("does foo"), "---does foo");
    }

    #[test]
    fn multi_line_comment() {
        assert_eq!(doc_comment("line one\nline two\n"), "---line one\n---line two");
    }

    #[test]
    fn trailing_newline_dropped() {
        assert_eq!(doc_comment("does foo\n"), "---does foo");
    }

    #[test]
    fn empty_comment() {
        assert_eq!(doc_comment(""), "---");
    }

    #[test]
    fn link_block() {
        assert_eq!(
            doc_link(DEFAULT_BASE_URL, "/object/#getguid"),
            "---\n---***\n---[Open Documentation](https://api.tabletopsimulator.com/lua-in-tabletop-simulator/object/#getguid)\n---"
        );
    }

    #[test]
    fn signature_params_joined() {
        assert_eq!(
            signature_line("Object", "bar", &["self", "n"]),
            "function Object.bar(self, n) end"
        );
        assert_eq!(signature_line("Object", "foo", &[]), "function Object.foo() end");
    }

    #[test]
    fn header() {
        assert_eq!(meta_header("Object"), "---@meta Object\n---@class Object");
    }
}
