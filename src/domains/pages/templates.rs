//! Page templates module.
//!
//! A small template language for HTML pages:
//! - `{{name}}` inserts the HTML-escaped value of `name` (empty if unset)
//! - `{{{name}}}` inserts the value as-is, for pre-rendered fragments
//! - `{{#if name}}...{{else}}...{{/if}}` keeps the first branch when `name`
//!   is set and non-empty; conditionals may nest

use std::collections::HashMap;

use super::error::PageError;

/// Values available to a template.
pub type PageContext = HashMap<String, String>;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const IF_CLOSE: &str = "{{/if}}";

/// A named page template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    /// The unique name of the page.
    pub name: String,

    /// The template source.
    pub template: String,
}

impl PageTemplate {
    /// Create a new page template.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Render the template with the given context.
    ///
    /// Conditionals are resolved first; placeholders are then substituted in
    /// a single left-to-right pass, so inserted values are never parsed as
    /// template syntax.
    pub fn render(&self, context: &PageContext) -> Result<String, PageError> {
        let resolved = self.process_conditionals(&self.template, context)?;
        self.substitute(&resolved, context)
    }

    /// Resolve `{{#if}}` blocks, innermost first.
    fn process_conditionals(&self, template: &str, context: &PageContext) -> Result<String, PageError> {
        let mut result = template.to_string();

        // The last opening tag never contains another block, so its first
        // closing tag and first else tag belong to it.
        while let Some(if_start) = result.rfind(IF_OPEN) {
            let var_end = result[if_start..]
                .find("}}")
                .map(|p| if_start + p)
                .ok_or_else(|| PageError::template(&self.name, "Unclosed {{#if}} tag"))?;
            let var_name = result[if_start + IF_OPEN.len()..var_end].trim().to_string();

            let body_start = var_end + 2;
            let endif_pos = result[body_start..]
                .find(IF_CLOSE)
                .map(|p| body_start + p)
                .ok_or_else(|| {
                    PageError::template(&self.name, format!("Missing {{{{/if}}}} for '{}'", var_name))
                })?;

            let body = &result[body_start..endif_pos];
            let (when_set, when_unset) = match body.find(ELSE_TAG) {
                Some(else_pos) => (&body[..else_pos], &body[else_pos + ELSE_TAG.len()..]),
                None => (body, ""),
            };

            let is_set = context.get(&var_name).is_some_and(|v| !v.is_empty());
            let replacement = if is_set { when_set } else { when_unset };

            result = format!(
                "{}{}{}",
                &result[..if_start],
                replacement,
                &result[endif_pos + IF_CLOSE.len()..]
            );
        }

        Ok(result)
    }

    /// Substitute `{{var}}` and `{{{var}}}` placeholders.
    fn substitute(&self, template: &str, context: &PageContext) -> Result<String, PageError> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let tag = &rest[start..];

            let (raw, open_len, close) = if tag.starts_with("{{{") {
                (true, 3, "}}}")
            } else {
                (false, 2, "}}")
            };

            let end = tag[open_len..].find(close).ok_or_else(|| {
                PageError::template(&self.name, "Unclosed placeholder")
            })?;
            let key = tag[open_len..open_len + end].trim();

            if key.starts_with('#') || key.starts_with('/') || key == "else" {
                return Err(PageError::template(
                    &self.name,
                    format!("Unexpected tag '{{{{{}}}}}'", key),
                ));
            }

            if let Some(value) = context.get(key) {
                if raw {
                    output.push_str(value);
                } else {
                    output.push_str(&escape_html(value));
                }
            }

            rest = &tag[open_len + end + close.len()..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

/// Escape text for inclusion in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> PageContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution_is_escaped() {
        let template = PageTemplate::new("test", "<h1>{{title}}</h1>");
        let result = template
            .render(&context(&[("title", "Tools & <Things>")]))
            .unwrap();
        assert_eq!(result, "<h1>Tools &amp; &lt;Things&gt;</h1>");
    }

    #[test]
    fn test_raw_substitution() {
        let template = PageTemplate::new("test", "<ul>{{{rows}}}</ul>");
        let result = template
            .render(&context(&[("rows", "<li>a</li>")]))
            .unwrap();
        assert_eq!(result, "<ul><li>a</li></ul>");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let template = PageTemplate::new("test", "a{{missing}}b");
        assert_eq!(template.render(&PageContext::new()).unwrap(), "ab");
    }

    #[test]
    fn test_values_are_not_reparsed() {
        let template = PageTemplate::new("test", "{{a}}");
        let result = template.render(&context(&[("a", "{{b}}"), ("b", "x")])).unwrap();
        assert_eq!(result, "{{b}}");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = PageTemplate::new("test", "{{#if name}}Hi {{name}}{{else}}Hi stranger{{/if}}!");
        assert_eq!(
            template.render(&context(&[("name", "Ada")])).unwrap(),
            "Hi Ada!"
        );
        assert_eq!(template.render(&PageContext::new()).unwrap(), "Hi stranger!");
        assert_eq!(
            template.render(&context(&[("name", "")])).unwrap(),
            "Hi stranger!"
        );
    }

    #[test]
    fn test_nested_conditionals() {
        let template = PageTemplate::new(
            "test",
            "{{#if a}}A{{#if b}}B{{else}}-{{/if}}{{else}}none{{/if}}",
        );
        assert_eq!(template.render(&context(&[("a", "1"), ("b", "1")])).unwrap(), "AB");
        assert_eq!(template.render(&context(&[("a", "1")])).unwrap(), "A-");
        assert_eq!(template.render(&context(&[("b", "1")])).unwrap(), "none");
    }

    #[test]
    fn test_unclosed_tags_are_errors() {
        let missing_endif = PageTemplate::new("test", "{{#if a}}A");
        assert!(matches!(
            missing_endif.render(&PageContext::new()),
            Err(PageError::Template { .. })
        ));

        let unclosed = PageTemplate::new("test", "Hello {{name");
        assert!(unclosed.render(&PageContext::new()).is_err());

        let stray = PageTemplate::new("test", "A{{/if}}");
        assert!(stray.render(&PageContext::new()).is_err());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
