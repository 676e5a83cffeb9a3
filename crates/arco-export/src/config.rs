//! Export configuration types.

/// Default wrap threshold for LP lines; long enough for every common reader.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 10_000;

/// Options fixed for the lifetime of a [`ModelExporter`](crate::ModelExporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// List variables with no objective or constraint coefficient in the LP
    /// `Bounds`, `Binaries` and `Generals` sections.
    pub show_unused_variables: bool,
    /// Wrap threshold for LP lines.
    pub max_line_length: usize,
    /// Emit a warning event for every name that fails validation.
    pub log_invalid_names: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            show_unused_variables: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            log_invalid_names: false,
        }
    }
}

impl ExportOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show variables that appear nowhere in the LP declarations.
    pub fn with_show_unused_variables(mut self, enabled: bool) -> Self {
        self.show_unused_variables = enabled;
        self
    }

    /// Set the LP wrap threshold.
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    /// Enable or disable warnings for invalid names.
    pub fn with_log_invalid_names(mut self, enabled: bool) -> Self {
        self.log_invalid_names = enabled;
        self
    }
}

/// Column layout of an MPS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpsLayout {
    /// Rigid columns with 8-character names and 12-character values.
    Fixed,
    /// Wide whitespace-separated fields.
    Free,
}

impl MpsLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            MpsLayout::Fixed => "Fixed",
            MpsLayout::Free => "Free",
        }
    }
}

/// Per-call rendering mode, consulted by the writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExportMode {
    pub(crate) obfuscate: bool,
    pub(crate) layout: MpsLayout,
}
