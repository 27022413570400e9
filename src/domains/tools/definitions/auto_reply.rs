//! Auto-reply generator tool definition.

use super::ToolDefinition;
use crate::domains::tools::ToolStatus;

/// Standalone page generating auto-reply (out-of-office) messages.
pub struct AutoReplyTool;

impl ToolDefinition for AutoReplyTool {
    const ID: &'static str = "auto-reply";
    const NAME: &'static str = "Auto Reply Generator";
    const DESCRIPTION: &'static str = "Generate ready-to-paste automatic reply messages";
    const STATUS: ToolStatus = ToolStatus::Available;
    const HREF: Option<&'static str> = Some("tools/auto-reply-generator.html");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_reply_descriptor() {
        let descriptor = AutoReplyTool::descriptor();
        assert_eq!(descriptor.id, "auto-reply");
        assert_eq!(descriptor.name, "Auto Reply Generator");
        assert!(descriptor.is_clickable());
        assert!(descriptor.validate().is_ok());
    }
}
