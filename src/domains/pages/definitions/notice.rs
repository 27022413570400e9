//! Notice banner shown above the tool list.

use super::PageDefinition;

/// Non-blocking message banner.
///
/// Context: `kind` (CSS class) and `message`.
pub struct NoticeFragment;

impl PageDefinition for NoticeFragment {
    const NAME: &'static str = "notice";

    fn template() -> &'static str {
        r#"<div class="notice {{kind}}" role="status">{{message}}</div>"#
    }
}
