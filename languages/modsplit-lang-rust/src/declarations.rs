//! Module declaration insertion for the rewritten source file

use crate::constants::{module_declaration, module_glob_import};
use tracing::debug;

/// Render the `mod` block and the `use` block for `modules`, one line each
pub fn render_declarations<S: AsRef<str>>(modules: &[S]) -> (String, String) {
    let declarations = modules
        .iter()
        .map(|m| module_declaration(m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    let imports = modules
        .iter()
        .map(|m| module_glob_import(m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    (declarations, imports)
}

/// Insert module declarations and glob imports into `buffer`.
///
/// The block goes right after the line containing `anchor` (literal substring
/// match). When the anchor is empty or absent it is prepended instead. An empty
/// module list leaves the buffer untouched.
pub fn insert_declarations<S: AsRef<str>>(buffer: &str, anchor: &str, modules: &[S]) -> String {
    if modules.is_empty() {
        return buffer.to_string();
    }

    let (declarations, imports) = render_declarations(modules);
    let anchor_at = (!anchor.is_empty())
        .then(|| buffer.find(anchor))
        .flatten();

    match anchor_at {
        Some(at) => match buffer[at..].find('\n') {
            Some(newline) => {
                let line_end = at + newline + 1;
                debug!(anchor = %anchor, offset = line_end, "Inserting declarations after anchor");
                format!(
                    "{}\n{declarations}\n\n{imports}\n{}",
                    &buffer[..line_end],
                    &buffer[line_end..]
                )
            }
            None => {
                debug!(anchor = %anchor, "Anchor is on the last line, appending declarations");
                format!("{buffer}\n\n{declarations}\n\n{imports}\n")
            }
        },
        None => {
            debug!(anchor = %anchor, "Anchor not found, prepending declarations");
            format!("{declarations}\n\n{imports}\n\n{buffer}")
        }
    }
}
