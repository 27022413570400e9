//! One row of the portal tool list.

use super::PageDefinition;

/// A tool entry: a link when `href` is set, an inert entry otherwise.
///
/// Context: `id`, `name`, `description`, optional `href`.
pub struct ToolRowFragment;

impl PageDefinition for ToolRowFragment {
    const NAME: &'static str = "tool_row";

    fn template() -> &'static str {
        concat!(
            r#"<li class="tool{{#if href}} available{{else}} planned{{/if}}" id="tool-{{id}}">"#,
            r#"{{#if href}}<a class="name" href="{{href}}">{{name}}</a>"#,
            r#"{{else}}<span class="name" aria-disabled="true">{{name}}</span><span class="badge">coming soon</span>{{/if}}"#,
            r#"<p class="description">{{description}}</p></li>"#,
            "\n"
        )
    }
}
