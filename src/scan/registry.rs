// Scan handler registry for dispatching files by extension

use super::handler::ScanHandler;
use super::handlers::{DocxScanHandler, PdfScanHandler, SpreadsheetScanHandler, TextScanHandler};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping normalized extensions to scan handlers
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn ScanHandler>>,
    by_extension: HashMap<&'static str, usize>,
    /// Extensions in registration order, for display
    extensions: Vec<&'static str>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            by_extension: HashMap::new(),
            extensions: Vec::new(),
        }
    }

    /// Registry with the PDF, DOCX, spreadsheet and text handlers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfScanHandler::new()));
        registry.register(Arc::new(DocxScanHandler::new()));
        registry.register(Arc::new(SpreadsheetScanHandler::new()));
        registry.register(Arc::new(TextScanHandler::new()));
        registry
    }

    /// Register a scan handler
    ///
    /// A later registration takes over extensions claimed earlier.
    pub fn register(&mut self, handler: Arc<dyn ScanHandler>) {
        let index = self.handlers.len();
        for &ext in handler.extensions() {
            if self.by_extension.insert(ext, index).is_none() {
                self.extensions.push(ext);
            }
        }
        self.handlers.push(handler);
    }

    /// Handler for a lowercase extension, if any
    pub fn handler_for(&self, extension: &str) -> Option<&Arc<dyn ScanHandler>> {
        self.by_extension
            .get(extension)
            .map(|&index| &self.handlers[index])
    }

    pub fn is_supported(&self, extension: &str) -> bool {
        self.by_extension.contains_key(extension)
    }

    /// Supported extensions in registration order
    pub fn supported_extensions(&self) -> &[&'static str] {
        &self.extensions
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(
            registry.supported_extensions(),
            &["pdf", "docx", "xlsx", "xls", "txt"]
        );
    }

    #[test]
    fn test_dispatch() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(registry.handler_for("pdf").map(|h| h.name()), Some("pdf"));
        assert_eq!(
            registry.handler_for("xls").map(|h| h.name()),
            Some("spreadsheet")
        );
        assert!(registry.handler_for("jpg").is_none());
        assert!(!registry.is_supported("doc"));
        assert!(registry.is_supported("txt"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = HandlerRegistry::new();
        assert!(registry.supported_extensions().is_empty());
        assert!(!registry.is_supported("txt"));
    }
}
