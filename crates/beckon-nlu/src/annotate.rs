//! Context annotators.
//!
//! A secondary model can attach a short free-text gloss to a semantic
//! resolution. It sits behind [`beckon_core::traits::IContextAnnotator`];
//! the built-in implementation is a template that names the resolved
//! command and its category. Annotator failures are always swallowed by
//! the lifecycle manager.

use beckon_core::catalog::CommandId;
use beckon_core::errors::BeckonResult;
use beckon_core::traits::IContextAnnotator;

/// Template-based annotator: display-only gloss, no model involved.
pub struct TemplateAnnotator;

impl IContextAnnotator for TemplateAnnotator {
    fn annotate(&self, input: &str, resolved: CommandId) -> BeckonResult<String> {
        Ok(format!(
            "\"{}\" interpreted as {} ({})",
            input.trim(),
            resolved.phrase(),
            resolved.category()
        ))
    }

    fn name(&self) -> &str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_command_and_category() {
        let gloss = TemplateAnnotator
            .annotate("grab the screen", CommandId::TakeScreenshot)
            .unwrap();
        assert!(gloss.contains("take screenshot"));
        assert!(gloss.contains("utilities"));
    }
}
