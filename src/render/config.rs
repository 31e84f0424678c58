//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding added around the computed viewBox, in user units
    pub viewbox_padding: f64,

    /// Physical document width and height
    pub document_size: f64,

    /// Unit suffix for the physical document size
    pub document_units: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 10.0,
            document_size: 100.0,
            document_units: "mm".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set the physical document size (width and height)
    pub fn with_document_size(mut self, size: f64) -> Self {
        self.document_size = size;
        self
    }

    /// Set the physical document units
    pub fn with_document_units(mut self, units: impl Into<String>) -> Self {
        self.document_units = units.into();
        self
    }
}
