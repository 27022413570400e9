//! Portal landing page.

use super::PageDefinition;

/// The landing page listing every registered tool.
///
/// Context: `title`, optional `tagline` and `base`, raw `notice` and raw
/// `rows`.
pub struct IndexPage;

impl PageDefinition for IndexPage {
    const NAME: &'static str = "index";

    fn template() -> &'static str {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{{#if base}}<base href="{{base}}">
{{/if}}<title>{{title}}</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
.tools { list-style: none; padding: 0; }
.tool { padding: .75rem 0; border-bottom: 1px solid #ddd; }
.tool a { font-weight: 600; }
.tool.planned .name { color: #888; }
.badge { font-size: .8rem; padding: .1rem .4rem; border-radius: .25rem; background: #eee; color: #555; margin-left: .5rem; }
.notice { padding: .75rem 1rem; border-radius: .25rem; margin-bottom: 1rem; }
.notice.not-found { background: #fdecea; }
.notice.coming-soon { background: #fff8e1; }
</style>
</head>
<body>
<header>
<h1>{{title}}</h1>
{{#if tagline}}<p class="tagline">{{tagline}}</p>{{/if}}
</header>
<main>
{{{notice}}}
{{#if rows}}<ul class="tools">
{{{rows}}}</ul>{{else}}<p class="empty">No tools yet.</p>{{/if}}
</main>
</body>
</html>
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_metadata() {
        assert_eq!(IndexPage::NAME, "index");
        assert!(IndexPage::template().contains("{{{rows}}}"));
        assert!(IndexPage::template().contains("{{{notice}}}"));
    }
}
