//! Exporter facade owning the per-model caches.

use std::cell::OnceCell;
use std::time::Instant;

use arco_core::{ConstraintId, Model, VariableId};

use crate::analysis::{ModelAnalysis, NameTable};
use crate::config::{ExportMode, ExportOptions, MpsLayout};
use crate::error::ExportError;
use crate::{lp, mps};

/// Everything a format writer reads during one export call.
pub(crate) struct RenderContext<'a, 'm> {
    pub(crate) model: &'m Model,
    pub(crate) analysis: &'a ModelAnalysis,
    pub(crate) names: &'a NameTable<'m>,
    pub(crate) options: &'a ExportOptions,
    pub(crate) mode: ExportMode,
}

/// Resolve a row entry to a variable index, rejecting dangling references.
pub(crate) fn check_reference(
    model: &Model,
    constraint: ConstraintId,
    position: usize,
    variable: VariableId,
) -> Result<usize, ExportError> {
    let num_variables = model.num_variables();
    let index = variable.index();
    if index < num_variables {
        return Ok(index);
    }
    tracing::error!(
        component = "export",
        operation = "check_reference",
        status = "error",
        constraint = constraint.inner(),
        position,
        variable = variable.inner(),
        num_variables,
        "Constraint references a variable outside the model"
    );
    Err(ExportError::OutOfRangeReference {
        constraint,
        position,
        variable,
        num_variables,
    })
}

/// Renders one borrowed model as LP or MPS text.
///
/// The model analysis and the two name tables (declared and obfuscated) are
/// computed on first use and reused by later calls. An exporter is not
/// `Sync`; give each thread its own.
pub struct ModelExporter<'m> {
    model: &'m Model,
    options: ExportOptions,
    analysis: OnceCell<ModelAnalysis>,
    declared_names: OnceCell<NameTable<'m>>,
    obfuscated_names: OnceCell<NameTable<'m>>,
}

impl<'m> ModelExporter<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self::with_options(model, ExportOptions::default())
    }

    pub fn with_options(model: &'m Model, options: ExportOptions) -> Self {
        Self {
            model,
            options,
            analysis: OnceCell::new(),
            declared_names: OnceCell::new(),
            obfuscated_names: OnceCell::new(),
        }
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Counts and name widths, computed on first call.
    pub fn analysis(&self) -> &ModelAnalysis {
        self.analysis.get_or_init(|| ModelAnalysis::setup(self.model))
    }

    /// Display names for the given naming mode.
    pub fn names(&self, obfuscate: bool) -> &NameTable<'m> {
        let cell = if obfuscate {
            &self.obfuscated_names
        } else {
            &self.declared_names
        };
        cell.get_or_init(|| NameTable::build(self.model, self.analysis(), obfuscate))
    }

    /// Whether every display name fits an 8-character fixed MPS field.
    pub fn can_use_fixed_mps(&self, obfuscate: bool) -> bool {
        self.names(obfuscate).can_use_fixed_mps()
    }

    /// Render the model in LP format.
    ///
    /// # Errors
    ///
    /// [`ExportError::InvalidName`] when a declared name breaks the grammar
    /// and `obfuscate` is false; [`ExportError::OutOfRangeReference`] when a
    /// row references a missing variable.
    pub fn export_as_lp(&self, obfuscate: bool) -> Result<String, ExportError> {
        let mode = ExportMode {
            obfuscate,
            layout: MpsLayout::Free,
        };
        self.render("lp", mode, lp::write_lp)
    }

    /// Render the model in MPS format.
    ///
    /// A fixed layout request falls back to free layout, with a warning,
    /// when some display name is longer than 8 characters.
    ///
    /// # Errors
    ///
    /// Same as [`ModelExporter::export_as_lp`].
    pub fn export_as_mps(
        &self,
        fixed_format: bool,
        obfuscate: bool,
    ) -> Result<String, ExportError> {
        let layout = if !fixed_format {
            MpsLayout::Free
        } else if self.can_use_fixed_mps(obfuscate) {
            MpsLayout::Fixed
        } else {
            tracing::warn!(
                component = "export",
                operation = "export_as_mps",
                status = "fallback",
                model = self.model.name.as_deref().unwrap_or(""),
                "Names do not fit fixed MPS fields; writing free MPS instead"
            );
            MpsLayout::Free
        };
        self.render("mps", ExportMode { obfuscate, layout }, mps::write_mps)
    }

    fn render(
        &self,
        format: &'static str,
        mode: ExportMode,
        write: fn(&RenderContext<'_, 'm>) -> Result<String, ExportError>,
    ) -> Result<String, ExportError> {
        let start = Instant::now();
        let names = self.names(mode.obfuscate);
        if !mode.obfuscate {
            names.check_all_names(self.options.log_invalid_names)?;
        }

        let ctx = RenderContext {
            model: self.model,
            analysis: self.analysis(),
            names,
            options: &self.options,
            mode,
        };
        let output = write(&ctx)?;

        tracing::debug!(
            component = "export",
            operation = "export",
            status = "success",
            format,
            layout = mode.layout.as_str(),
            obfuscate = mode.obfuscate,
            bytes = output.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Exported model"
        );
        Ok(output)
    }
}
