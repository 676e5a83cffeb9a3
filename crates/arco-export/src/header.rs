//! Comment block written at the top of both formats.

use std::fmt::Write as _;

use crate::exporter::RenderContext;

pub(crate) fn append_comments(
    output: &mut String,
    ctx: &RenderContext<'_, '_>,
    separator: &str,
    format_label: &str,
) {
    let model = ctx.model;
    let analysis = ctx.analysis;
    let _ = writeln!(output, "{separator} Generated by Arco ModelExporter");
    let _ = writeln!(
        output,
        "{separator}   {:<16} : {}",
        "Name",
        model.name.as_deref().unwrap_or("NoName")
    );
    let _ = writeln!(output, "{separator}   {:<16} : {format_label}", "Format");
    let _ = writeln!(
        output,
        "{separator}   {:<16} : {}",
        "Constraints",
        model.num_constraints()
    );
    let _ = writeln!(
        output,
        "{separator}   {:<16} : {}",
        "Variables",
        model.num_variables()
    );
    let _ = writeln!(
        output,
        "{separator}     {:<14} : {}",
        "Binary",
        analysis.num_binary_variables()
    );
    let _ = writeln!(
        output,
        "{separator}     {:<14} : {}",
        "Integer",
        analysis.num_integer_variables()
    );
    let _ = writeln!(
        output,
        "{separator}     {:<14} : {}",
        "Continuous",
        analysis.num_continuous_variables()
    );
    if ctx.options.show_unused_variables {
        let _ = writeln!(output, "{separator} Unused variables are shown");
    }
}
