//! Layout shell seam.
//!
//! The visual header/navigation tree is an external collaborator; this
//! module only fixes the interface it plugs in through. The shell is applied
//! outside the page content but inside the provider composition, so shell
//! components resolve the same context values pages do.

use vitrine_render::{Context, RequestContext};

/// Structural wrapper applied around page content.
pub trait Shell: Send + Sync {
    /// Wraps rendered page content in the shell's scaffolding, resolving
    /// provider-supplied values from `context`.
    fn render(&self, ctx: &RequestContext, context: &Context, content: &str) -> String;

    /// Pre-existing style payloads the shell contributes to the document
    /// head. These are ordered after the extracted rules. Defaults to none.
    fn base_styles(&self, _context: &Context) -> Vec<String> {
        Vec::new()
    }
}

/// Default shell: header/navigation scaffolding around a main slot, with a
/// small base stylesheet for the scaffolding itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppShell;

impl Shell for AppShell {
    fn render(&self, _ctx: &RequestContext, _context: &Context, content: &str) -> String {
        format!(
            concat!(
                r#"<header class="app-header"><nav class="app-nav"></nav></header>"#,
                r#"<main class="app-main">{content}</main>"#
            ),
            content = content
        )
    }

    fn base_styles(&self, _context: &Context) -> Vec<String> {
        vec![concat!(
            "<style>",
            ".app-header{position:sticky;top:0}",
            ".app-main{display:block}",
            "</style>"
        )
        .to_string()]
    }
}
