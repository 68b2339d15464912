//! Renderer: one annotation block per function entry, joined into the stub file.

pub mod lua;

use crate::error::RenderError;
use crate::model::*;
use tracing::trace;

/// Settings for [`generate`].
pub struct RenderOptions<'a> {
    /// Category to render; also the Lua table the functions hang off.
    pub category: &'a str,
    pub base_url: &'a str,
    /// Emit the `---@meta` preamble before the blocks.
    pub meta_header: bool,
}

/// Render the stub file for `options.category`.
///
/// Blocks come out in entry order, separated by one blank line. No trailing newline.
pub fn generate(
    description: &ApiDescription,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let spec = description
        .category(options.category)
        .ok_or_else(|| RenderError::CategoryNotLoaded(options.category.to_string()))?;

    let mut parts: Vec<String> = Vec::with_capacity(spec.functions.len() + 1);
    if options.meta_header {
        parts.push(lua::meta_header(options.category));
    }
    for entry in &spec.functions {
        trace!(function = entry.name(), "rendering");
        parts.push(render_entry(entry, options.category, options.base_url));
    }

    Ok(parts.join("\n\n"))
}

/// Render a single entry's annotation block.
pub fn render_entry(entry: &FunctionEntry, category: &str, base_url: &str) -> String {
    match entry {
        FunctionEntry::Shorthand {
            name,
            return_type,
            comment,
        } => [
            lua::doc_comment(comment),
            lua::return_line(return_type),
            lua::signature_line(category, name, &[]),
        ]
        .join("\n"),
        FunctionEntry::Full { signature, params } => {
            let param_lines: Vec<String> = params.iter().map(lua::param_line).collect();
            let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
            render_full(signature, param_lines, &names, category, base_url)
        }
        // The real parameters are unknown here, so the signature is left empty.
        FunctionEntry::Degraded { signature, raw } => {
            render_full(signature, vec![lua::todo_line(raw)], &[], category, base_url)
        }
    }
}

/// Comment, params (or TODO), return, link banner, signature; one per line.
///
/// With zero params nothing is emitted between the comment and the return line.
/// A plain positional template would leave an empty line there, which LuaLS treats
/// as the end of the doc comment.
fn render_full(
    signature: &Signature,
    param_lines: Vec<String>,
    param_names: &[&str],
    category: &str,
    base_url: &str,
) -> String {
    let mut lines = Vec::with_capacity(param_lines.len() + 4);
    lines.push(lua::doc_comment(&signature.comment));
    lines.extend(param_lines);
    lines.push(lua::return_line(&signature.return_type));
    lines.push(lua::doc_link(base_url, &signature.link));
    lines.push(lua::signature_line(category, &signature.name, param_names));
    lines.join("\n")
}
