//! LP format writer.
//!
//! Layout: comment block, objective sense and `Obj:` row, `Subject to`,
//! `Bounds`, `Binaries`, `Generals`, `End`. Objective and constraint rows are
//! wrapped with [`LineBreaker`] so no line exceeds the configured length
//! unless a single term does.

use std::fmt::Write as _;

use arco_core::{Constraint, ConstraintId, Variable};

use crate::analysis::{classify, VariableKind};
use crate::error::ExportError;
use crate::exporter::{check_reference, RenderContext};
use crate::header::append_comments;
use crate::line_breaker::LineBreaker;
use crate::number::{lp_coefficient, lp_integral, lp_number};

/// Room reserved on a constraint line for `" "`, `": "` and a `_lhs`/`_rhs`
/// suffix.
const CONSTRAINT_FORMATTING_CHARS: usize = 10;

pub(crate) fn write_lp(ctx: &RenderContext<'_, '_>) -> Result<String, ExportError> {
    let model = ctx.model;
    let options = ctx.options;
    let mut output = String::new();

    append_comments(&mut output, ctx, "\\", "LP");

    output.push_str(if model.maximize() {
        "Maximize\n"
    } else {
        "Minimize\n"
    });
    let mut shown = vec![options.show_unused_variables; model.num_variables()];
    let mut objective = LineBreaker::new(options.max_line_length);
    objective.append(" Obj: ");
    if model.objective_offset != 0.0 {
        objective.append(&format!("{} Constant ", lp_coefficient(model.objective_offset)));
    }
    for (var_index, var) in model.variables.iter().enumerate() {
        if var.objective_coefficient != 0.0 {
            objective.append(&lp_term(
                var.objective_coefficient,
                ctx.names.variable(var_index),
            ));
            shown[var_index] = true;
        }
    }
    output.push_str(objective.result());

    output.push_str("\nSubject to\n");
    for (cst_index, constraint) in model.constraints.iter().enumerate() {
        write_constraint(&mut output, ctx, cst_index, constraint, &mut shown)?;
    }

    output.push_str("Bounds\n");
    if model.objective_offset != 0.0 {
        output.push_str(" 1 <= Constant <= 1\n");
    }
    for (var_index, var) in model.variables.iter().enumerate() {
        if shown[var_index] {
            write_bounds_line(&mut output, ctx.names.variable(var_index), var);
        }
    }

    write_declarations(&mut output, ctx, &shown, "Binaries", VariableKind::Binary);
    write_declarations(&mut output, ctx, &shown, "Generals", VariableKind::Integer);

    output.push_str("End\n");
    Ok(output)
}

fn lp_term(coefficient: f64, name: &str) -> String {
    format!("{} {name} ", lp_coefficient(coefficient))
}

fn write_constraint(
    output: &mut String,
    ctx: &RenderContext<'_, '_>,
    cst_index: usize,
    constraint: &Constraint,
    shown: &mut [bool],
) -> Result<(), ExportError> {
    let name = ctx.names.constraint(cst_index);
    let mut breaker = LineBreaker::new(ctx.options.max_line_length);
    breaker.consume(CONSTRAINT_FORMATTING_CHARS + name.chars().count());

    for (position, &(var_id, coeff)) in constraint.terms.iter().enumerate() {
        let var_index = check_reference(
            ctx.model,
            ConstraintId::new(cst_index as u32),
            position,
            var_id,
        )?;
        if coeff != 0.0 {
            breaker.append(&lp_term(coeff, ctx.names.variable(var_index)));
            shown[var_index] = true;
        }
    }

    let bounds = constraint.bounds;
    if bounds.is_fixed() {
        breaker.append(&format!(" = {}\n", lp_number(bounds.upper)));
        let _ = write!(output, " {name}: {}", breaker.result());
        return Ok(());
    }

    let ranged = bounds.has_finite_lower() && bounds.has_finite_upper();
    if bounds.has_finite_upper() {
        let label = if ranged { "_rhs" } else { "" };
        write_relation(output, &breaker, name, label, "<=", bounds.upper);
    }
    if bounds.has_finite_lower() {
        let label = if ranged { "_lhs" } else { "" };
        write_relation(output, &breaker, name, label, ">=", bounds.lower);
    }
    Ok(())
}

/// One line of an inequality. The relation is kept out of `breaker` so the
/// same term list can be reused for the opposite side.
fn write_relation(
    output: &mut String,
    breaker: &LineBreaker,
    name: &str,
    suffix: &str,
    operator: &str,
    rhs: f64,
) {
    let relation = format!(" {operator} {}\n", lp_number(rhs));
    let _ = write!(output, " {name}{suffix}: {}", breaker.result());
    if !breaker.would_fit(&relation) {
        output.push_str("\n ");
    }
    output.push_str(&relation);
}

fn write_bounds_line(output: &mut String, name: &str, var: &Variable) {
    let bounds = var.bounds;
    let lower_finite = bounds.has_finite_lower();
    let upper_finite = bounds.has_finite_upper();

    if var.is_integer
        && lower_finite
        && upper_finite
        && bounds.lower == bounds.lower.round()
        && bounds.upper == bounds.upper.round()
    {
        let _ = writeln!(
            output,
            " {} <= {name} <= {}",
            lp_integral(bounds.lower),
            lp_integral(bounds.upper)
        );
        return;
    }

    let _ = match (lower_finite, upper_finite) {
        (true, true) => writeln!(
            output,
            " {} <= {name} <= {}",
            lp_number(bounds.lower),
            lp_number(bounds.upper)
        ),
        (true, false) => writeln!(output, " {} <= {name}", lp_number(bounds.lower)),
        (false, true) => writeln!(output, " {name} <= {}", lp_number(bounds.upper)),
        (false, false) => writeln!(output, " {name}"),
    };
}

fn write_declarations(
    output: &mut String,
    ctx: &RenderContext<'_, '_>,
    shown: &[bool],
    heading: &str,
    kind: VariableKind,
) {
    let mut names = ctx
        .model
        .variables
        .iter()
        .enumerate()
        .filter(|(var_index, var)| shown[*var_index] && classify(var) == kind)
        .map(|(var_index, _)| ctx.names.variable(var_index))
        .peekable();
    if names.peek().is_none() {
        return;
    }
    output.push_str(heading);
    output.push('\n');
    for name in names {
        let _ = writeln!(output, " {name}");
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use arco_core::{Bounds, Constraint, Model, Sense, Variable, VariableId};

    use crate::{ExportError, ExportOptions, ModelExporter};

    fn body(text: &str) -> &str {
        let start = text.find("Minimize").or_else(|| text.find("Maximize")).unwrap();
        &text[start..]
    }

    #[test]
    fn renders_small_model_exactly() {
        let mut model = Model::with_name("toy");
        let x = model
            .add_variable(
                Variable::continuous(Bounds::new(0.0, 4.0))
                    .with_name("x")
                    .with_objective(1.0),
            )
            .unwrap();
        let y = model
            .add_variable(
                Variable::integer(Bounds::new(0.0, 10.0))
                    .with_name("y")
                    .with_objective(-2.5),
            )
            .unwrap();
        model
            .add_constraint(
                Constraint::new(Bounds::at_most(10.0))
                    .with_name("cap")
                    .with_term(x, 1.0)
                    .with_term(y, 2.0),
            )
            .unwrap();

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert_eq!(
            body(&lp),
            "Minimize\n Obj: +1 x -2.5 y \nSubject to\n cap: +1 x +2 y  <= 10\nBounds\n 0 <= x <= 4\n 0 <= y <= 10\nGenerals\n y\nEnd\n"
        );
    }

    #[test]
    fn header_lists_counts() {
        let mut model = Model::new();
        model.variables = vec![
            Variable::binary().with_objective(1.0),
            Variable::integer(Bounds::new(0.0, 5.0)),
            Variable::continuous(Bounds::non_negative()),
        ];
        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.starts_with("\\ Generated by Arco ModelExporter\n"));
        assert!(lp.contains("\\   Name             : NoName\n"));
        assert!(lp.contains("\\   Format           : LP\n"));
        assert!(lp.contains("\\   Variables        : 3\n"));
        assert!(lp.contains("\\     Binary         : 1\n"));
        assert!(lp.contains("\\     Integer        : 1\n"));
        assert!(lp.contains("\\     Continuous     : 1\n"));
    }

    #[test]
    fn maximize_and_offset_use_constant_variable() {
        let mut model = Model::new();
        model.set_sense(Sense::Maximize);
        model.objective_offset = 3.0;
        model.variables = vec![Variable::continuous(Bounds::non_negative()).with_objective(2.0)];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains("Maximize\n Obj: +3 Constant +2 V0 \n"));
        assert!(lp.contains("Bounds\n 1 <= Constant <= 1\n 0 <= V0\n"));
    }

    #[test]
    fn equality_constraint_uses_single_line() {
        let mut model = Model::new();
        model.variables = vec![Variable::continuous(Bounds::non_negative())];
        model.constraints = vec![Constraint::new(Bounds::fixed(4.0))
            .with_name("bal")
            .with_term(VariableId::new(0), 1.0)];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains(" bal: +1 V0  = 4\n"));
        assert!(!lp.contains("bal_"));
    }

    #[test]
    fn ranged_constraint_emits_rhs_then_lhs() {
        let mut model = Model::new();
        model.variables = vec![Variable::continuous(Bounds::non_negative())];
        model.constraints = vec![Constraint::new(Bounds::new(2.0, 7.0))
            .with_name("r")
            .with_term(VariableId::new(0), 3.0)];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains(" r_rhs: +3 V0  <= 7\n r_lhs: +3 V0  >= 2\n"));
    }

    #[test]
    fn one_sided_constraints_have_no_suffix() {
        let mut model = Model::new();
        model.variables = vec![Variable::continuous(Bounds::non_negative())];
        model.constraints = vec![
            Constraint::new(Bounds::at_most(10.0)).with_term(VariableId::new(0), 1.0),
            Constraint::new(Bounds::at_least(-1.0)).with_term(VariableId::new(0), 1.0),
            Constraint::new(Bounds::free()).with_term(VariableId::new(0), 1.0),
        ];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains(" C0: +1 V0  <= 10\n"));
        assert!(lp.contains(" C1: +1 V0  >= -1\n"));
        assert!(!lp.contains(" C2:"));
        assert!(!lp.contains(">= -inf") && !lp.contains("<= inf"));
    }

    #[test]
    fn bounds_lines_cover_infinite_sides() {
        let mut model = Model::new();
        model.variables = vec![
            Variable::continuous(Bounds::at_most(5.0)).with_name("a").with_objective(1.0),
            Variable::continuous(Bounds::free()).with_name("b").with_objective(1.0),
            Variable::continuous(Bounds::new(-1.5, 2.25)).with_name("c").with_objective(1.0),
            Variable::integer(Bounds::new(0.0, f64::INFINITY)).with_name("d").with_objective(1.0),
            Variable::integer(Bounds::new(0.5, 3.0)).with_name("e").with_objective(1.0),
            Variable::continuous(Bounds::fixed(5.0)).with_name("f").with_objective(1.0),
        ];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains(" a <= 5\n"));
        assert!(lp.contains("\n b\n"));
        assert!(lp.contains(" -1.5 <= c <= 2.25\n"));
        assert!(lp.contains(" 0 <= d\n"));
        assert!(lp.contains(" 0.5 <= e <= 3\n"));
        assert!(lp.contains(" 5 <= f <= 5\n"));
        assert!(lp.contains("Generals\n d\n e\n"));
    }

    #[test]
    fn unused_variables_are_hidden_unless_requested() {
        let mut model = Model::new();
        model.variables = vec![
            Variable::binary().with_name("used").with_objective(1.0),
            Variable::binary().with_name("idle"),
            Variable::integer(Bounds::new(0.0, 9.0)).with_name("spare"),
        ];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains("Binaries\n used\n"));
        assert!(!lp.contains("idle"));
        assert!(!lp.contains("Generals"));

        let options = ExportOptions::new().with_show_unused_variables(true);
        let lp = ModelExporter::with_options(&model, options)
            .export_as_lp(false)
            .unwrap();
        assert!(lp.contains("\\ Unused variables are shown\n"));
        assert!(lp.contains("Binaries\n used\n idle\n"));
        assert!(lp.contains("Generals\n spare\n"));
    }

    #[test]
    fn zero_coefficients_neither_render_nor_hide() {
        let mut model = Model::new();
        model.variables = vec![
            Variable::continuous(Bounds::non_negative()).with_name("x"),
            Variable::continuous(Bounds::non_negative()).with_name("y"),
        ];
        model.constraints = vec![
            Constraint::new(Bounds::at_most(1.0))
                .with_term(VariableId::new(0), 1.0)
                .with_term(VariableId::new(1), 0.0),
            Constraint::new(Bounds::at_most(1.0)).with_term(VariableId::new(0), 0.0),
        ];

        let lp = ModelExporter::new(&model).export_as_lp(false).unwrap();
        assert!(lp.contains(" C0: +1 x  <= 1\n"));
        assert!(lp.contains(" 0 <= x\n"));
        assert!(!lp.contains(" 0 <= y\n"));
    }

    #[test]
    fn long_rows_wrap_without_splitting_terms() {
        let mut model = Model::new();
        model.variables = (0..30)
            .map(|_| Variable::continuous(Bounds::non_negative()).with_objective(1.0))
            .collect();
        model.constraints = vec![Constraint {
            name: Some("wide".to_string()),
            bounds: Bounds::at_most(100.0),
            terms: (0..30).map(|idx| (VariableId::new(idx), 1.0)).collect(),
        }];

        let options = ExportOptions::new().with_max_line_length(40);
        let lp = ModelExporter::with_options(&model, options)
            .export_as_lp(true)
            .unwrap();
        for line in lp.lines().filter(|line| !line.starts_with('\\')) {
            assert!(line.len() <= 41, "line too long: {line:?}");
        }
        for idx in 0..30 {
            assert!(lp.contains(&format!("+1 V{idx:02} ")));
        }
        assert!(lp.contains("\n <= 100\n") || lp.contains(" <= 100\n"));
    }

    #[test]
    fn relation_moves_to_its_own_line_when_it_would_overflow() {
        let mut model = Model::new();
        model.variables = vec![Variable::continuous(Bounds::non_negative()).with_name("x")];
        model.constraints = vec![Constraint::new(Bounds::at_most(123456.0))
            .with_name("c")
            .with_term(VariableId::new(0), 1.0)];

        let options = ExportOptions::new().with_max_line_length(20);
        let lp = ModelExporter::with_options(&model, options)
            .export_as_lp(false)
            .unwrap();
        assert!(lp.contains(" c: +1 x \n  <= 123456\n"));
    }

    #[test]
    fn out_of_range_reference_returns_error() {
        let mut model = Model::new();
        model.variables = vec![Variable::continuous(Bounds::non_negative())];
        model.constraints =
            vec![Constraint::new(Bounds::at_most(1.0)).with_term(VariableId::new(5), 1.0)];

        let result = ModelExporter::new(&model).export_as_lp(false);
        assert!(matches!(
            result,
            Err(ExportError::OutOfRangeReference { position: 0, .. })
        ));
    }
}
