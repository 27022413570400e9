//! Page Registry - central registration of all page templates.
//!
//! When adding a new page:
//! 1. Create the page file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_pages()`

use super::definitions::{
    IndexPage, NoticeFragment, PageDefinition, PdfCompressorPage, ToolRowFragment,
};
use super::templates::PageTemplate;

/// Build a PageTemplate from a PageDefinition.
fn build_template<P: PageDefinition>() -> PageTemplate {
    PageTemplate::new(P::NAME, P::template())
}

/// Get all registered page templates.
pub fn get_all_pages() -> Vec<PageTemplate> {
    vec![
        build_template::<IndexPage>(),
        build_template::<ToolRowFragment>(),
        build_template::<NoticeFragment>(),
        build_template::<PdfCompressorPage>(),
    ]
}

/// Get the list of all page names.
pub fn page_names() -> Vec<&'static str> {
    vec![
        IndexPage::NAME,
        ToolRowFragment::NAME,
        NoticeFragment::NAME,
        PdfCompressorPage::NAME,
    ]
}
