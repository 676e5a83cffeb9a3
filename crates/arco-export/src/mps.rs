//! MPS format writer, fixed or free layout.
//!
//! Sections are rendered into their own buffers and spliced into the output
//! only when non-empty. Name/value pairs are packed two per line.

use std::fmt::Write as _;

use arco_core::{ConstraintId, Model, Variable};

use crate::analysis::is_boolean;
use crate::config::MpsLayout;
use crate::error::ExportError;
use crate::exporter::{check_reference, RenderContext};
use crate::header::append_comments;
use crate::number::{fixed_mps_value, free_mps_value};

const OBJECTIVE_ROW: &str = "COST";
const RHS_SET: &str = "RHS";
const RANGE_SET: &str = "RANGE";
const BOUND_SET: &str = "BOUND";

/// Per-variable `(constraint index, coefficient)` lists, zeros dropped.
type Transpose = Vec<Vec<(usize, f64)>>;

pub(crate) fn write_mps(ctx: &RenderContext<'_, '_>) -> Result<String, ExportError> {
    let model = ctx.model;
    let transpose = transpose_rows(model)?;
    let mut writer = MpsWriter::new(ctx.mode.layout);
    let mut output = String::new();

    append_comments(&mut output, ctx, "*", ctx.mode.layout.as_str());
    let _ = writeln!(output, "{:<14}{}", "NAME", model.name.as_deref().unwrap_or(""));

    let rows = writer.rows_section(ctx);
    append_section(&mut output, "ROWS", &rows);

    let mut columns = writer.columns_section(ctx, &transpose, true);
    if !columns.is_empty() {
        let mut bracketed = int_marker("INTSTART", "'INTORG'");
        bracketed.push_str(&columns);
        bracketed.push_str(&int_marker("INTEND", "'INTEND'"));
        columns = bracketed;
    }
    columns.push_str(&writer.columns_section(ctx, &transpose, false));
    append_section(&mut output, "COLUMNS", &columns);

    let rhs = writer.rhs_section(ctx);
    append_section(&mut output, "RHS", &rhs);

    let ranges = writer.ranges_section(ctx);
    append_section(&mut output, "RANGES", &ranges);

    let bounds = writer.bounds_section(ctx);
    append_section(&mut output, "BOUNDS", &bounds);

    output.push_str("ENDATA\n");
    Ok(output)
}

/// Column-major view of the row-major constraint matrix.
fn transpose_rows(model: &Model) -> Result<Transpose, ExportError> {
    let mut transpose: Transpose = vec![Vec::new(); model.num_variables()];
    for (cst_index, constraint) in model.constraints.iter().enumerate() {
        let cst_id = ConstraintId::new(cst_index as u32);
        for (position, &(var_id, coeff)) in constraint.terms.iter().enumerate() {
            let var_index = check_reference(model, cst_id, position, var_id)?;
            if coeff != 0.0 {
                transpose[var_index].push((cst_index, coeff));
            }
        }
    }
    Ok(transpose)
}

fn append_section(output: &mut String, keyword: &str, section: &str) {
    if section.is_empty() {
        return;
    }
    output.push_str(keyword);
    output.push('\n');
    output.push_str(section);
}

fn int_marker(name: &str, kind: &str) -> String {
    format!("  {:<10}{:<36}{:<10}\n", name, "'MARKER'", kind)
}

/// Line-level formatting plus the two-entries-per-line toggle.
struct MpsWriter {
    layout: MpsLayout,
    entries_on_line: usize,
}

impl MpsWriter {
    fn new(layout: MpsLayout) -> Self {
        Self {
            layout,
            entries_on_line: 0,
        }
    }

    fn line_header(&self, out: &mut String, indicator: &str, name: &str) {
        let _ = match self.layout {
            MpsLayout::Fixed => write!(out, " {indicator:<2} {name:<8}"),
            MpsLayout::Free => write!(out, " {indicator:<2}  {name:<16}"),
        };
    }

    fn pair(&self, out: &mut String, name: &str, value: f64) {
        let _ = match self.layout {
            MpsLayout::Fixed => write!(out, "  {name:<8}  {:>12} ", fixed_mps_value(value)),
            MpsLayout::Free => write!(out, "  {name:<16}  {} ", free_mps_value(value)),
        };
    }

    /// Entry of a COLUMNS/RHS/RANGES line; `head` starts each physical line.
    fn term(&mut self, out: &mut String, head: &str, name: &str, value: f64) {
        if self.entries_on_line == 0 {
            self.line_header(out, "", head);
        }
        self.pair(out, name, value);
        self.entries_on_line += 1;
        if self.entries_on_line == 2 {
            out.push('\n');
            self.entries_on_line = 0;
        }
    }

    /// Terminate a half-filled line.
    fn finish_line(&mut self, out: &mut String) {
        if self.entries_on_line > 0 {
            out.push('\n');
        }
        self.entries_on_line = 0;
    }

    fn bound(&self, out: &mut String, kind: &str, name: &str, value: f64) {
        self.line_header(out, kind, BOUND_SET);
        self.pair(out, name, value);
        out.push('\n');
    }

    fn bound_flag(&self, out: &mut String, kind: &str, name: &str) {
        self.line_header(out, kind, BOUND_SET);
        let _ = writeln!(out, "  {name}");
    }

    fn rows_section(&self, ctx: &RenderContext<'_, '_>) -> String {
        let mut section = String::new();
        self.line_header(&mut section, "N", OBJECTIVE_ROW);
        section.push('\n');
        for (cst_index, constraint) in ctx.model.constraints.iter().enumerate() {
            let bounds = constraint.bounds;
            let kind = if bounds.is_fixed() {
                "E"
            } else if !bounds.has_finite_lower() && !bounds.has_finite_upper() {
                "N"
            } else if !bounds.has_finite_lower() {
                "L"
            } else {
                "G"
            };
            self.line_header(&mut section, kind, ctx.names.constraint(cst_index));
            section.push('\n');
        }
        section
    }

    fn columns_section(
        &mut self,
        ctx: &RenderContext<'_, '_>,
        transpose: &Transpose,
        integrality: bool,
    ) -> String {
        let mut section = String::new();
        for (var_index, var) in ctx.model.variables.iter().enumerate() {
            if var.is_integer != integrality {
                continue;
            }
            let var_name = ctx.names.variable(var_index);
            let entries = &transpose[var_index];
            self.entries_on_line = 0;
            // An empty column still has to be declared for BOUNDS to refer to it.
            if var.objective_coefficient != 0.0 || entries.is_empty() {
                self.term(&mut section, var_name, OBJECTIVE_ROW, var.objective_coefficient);
            }
            for &(cst_index, coeff) in entries {
                self.term(&mut section, var_name, ctx.names.constraint(cst_index), coeff);
            }
            self.finish_line(&mut section);
        }
        section
    }

    fn rhs_section(&mut self, ctx: &RenderContext<'_, '_>) -> String {
        let mut section = String::new();
        self.entries_on_line = 0;
        for (cst_index, constraint) in ctx.model.constraints.iter().enumerate() {
            let bounds = constraint.bounds;
            let rhs = if bounds.has_finite_lower() {
                bounds.lower
            } else if bounds.has_finite_upper() {
                bounds.upper
            } else {
                continue;
            };
            self.term(&mut section, RHS_SET, ctx.names.constraint(cst_index), rhs);
        }
        self.finish_line(&mut section);
        section
    }

    fn ranges_section(&mut self, ctx: &RenderContext<'_, '_>) -> String {
        let mut section = String::new();
        self.entries_on_line = 0;
        for (cst_index, constraint) in ctx.model.constraints.iter().enumerate() {
            let range = (constraint.bounds.upper - constraint.bounds.lower).abs();
            if range != 0.0 && range.is_finite() {
                self.term(&mut section, RANGE_SET, ctx.names.constraint(cst_index), range);
            }
        }
        self.finish_line(&mut section);
        section
    }

    fn bounds_section(&self, ctx: &RenderContext<'_, '_>) -> String {
        let mut section = String::new();
        for (var_index, var) in ctx.model.variables.iter().enumerate() {
            let name = ctx.names.variable(var_index);
            if var.is_integer {
                self.integer_bounds(&mut section, name, var);
            } else {
                self.continuous_bounds(&mut section, name, var);
            }
        }
        section
    }

    fn integer_bounds(&self, out: &mut String, name: &str, var: &Variable) {
        let bounds = var.bounds;
        if is_boolean(var) {
            self.bound_flag(out, "BV", name);
            return;
        }
        if !bounds.has_finite_lower() {
            self.bound_flag(out, "MI", name);
        } else if bounds.lower != 0.0 {
            self.bound(out, "LI", name, bounds.lower);
        }
        if bounds.has_finite_upper() {
            self.bound(out, "UI", name, bounds.upper);
        }
    }

    fn continuous_bounds(&self, out: &mut String, name: &str, var: &Variable) {
        let bounds = var.bounds;
        if !bounds.has_finite_lower() && !bounds.has_finite_upper() {
            self.bound_flag(out, "FR", name);
            return;
        }
        if bounds.is_fixed() {
            self.bound(out, "FX", name, bounds.lower);
            return;
        }
        if !bounds.has_finite_lower() {
            self.bound_flag(out, "MI", name);
        } else if bounds.lower != 0.0 {
            self.bound(out, "LO", name, bounds.lower);
        } else if !bounds.has_finite_upper() {
            self.bound_flag(out, "PL", name);
        }
        if bounds.has_finite_upper() {
            self.bound(out, "UP", name, bounds.upper);
        }
    }
}
