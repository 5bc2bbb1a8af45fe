use glotta_par::ast::Stmt;
use glotta_util::{Interner, Symbol};

use super::cond::lower_condition;
use super::expr::{lower_args, lower_expr};
use crate::builder::QuadBuilder;
use crate::quad::{Op, Operand};

pub fn lower_stmts(builder: &mut QuadBuilder, interner: &Interner, body: &[Stmt]) {
    for stmt in body {
        lower_stmt(builder, interner, stmt);
    }
}

fn lower_stmt(builder: &mut QuadBuilder, interner: &Interner, stmt: &Stmt) {
    match stmt {
        Stmt::Assignment { target, value, .. } => {
            let place = lower_expr(builder, interner, value);
            builder.gen(Op::Assign, place, Operand::Empty, Operand::text(interner.resolve(*target)));
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            let cond = lower_condition(builder, interner, condition);
            let then_label = builder.next_quad_label();
            builder.backpatch(&cond.true_list, then_label);
            lower_stmts(builder, interner, then_branch);

            match else_branch {
                Some(else_stmts) => {
                    let skip = builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Empty);
                    let else_label = builder.next_quad_label();
                    builder.backpatch(&cond.false_list, else_label);
                    lower_stmts(builder, interner, else_stmts);
                    let end = builder.next_quad_label();
                    builder.backpatch(&[skip], end);
                }
                None => {
                    let end = builder.next_quad_label();
                    builder.backpatch(&cond.false_list, end);
                }
            }
        }
        Stmt::While { condition, body, .. } => {
            let start = builder.next_quad_label();
            let cond = lower_condition(builder, interner, condition);
            let body_label = builder.next_quad_label();
            builder.backpatch(&cond.true_list, body_label);
            lower_stmts(builder, interner, body);
            builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Label(start));
            let end = builder.next_quad_label();
            builder.backpatch(&cond.false_list, end);
        }
        Stmt::DoUntil { body, condition, .. } => {
            let start = builder.next_quad_label();
            lower_stmts(builder, interner, body);
            let cond = lower_condition(builder, interner, condition);
            builder.backpatch(&cond.false_list, start);
            let end = builder.next_quad_label();
            builder.backpatch(&cond.true_list, end);
        }
        Stmt::For {
            var,
            start,
            end,
            step,
            body,
            ..
        } => {
            let var_text = interner.resolve(*var).to_string();
            let start_place = lower_expr(builder, interner, start);
            builder.gen(Op::Assign, start_place, Operand::Empty, Operand::text(var_text.clone()));

            let loop_label = builder.next_quad_label();
            let end_place = lower_expr(builder, interner, end);
            let test_temp = builder.new_temp();
            builder.gen(
                Op::Le,
                Operand::text(var_text.clone()),
                end_place,
                Operand::text(test_temp.clone()),
            );
            let exit = builder.gen(Op::Jumpz, Operand::text(test_temp), Operand::Empty, Operand::Empty);

            lower_stmts(builder, interner, body);

            let step_place = match step {
                Some(expr) => lower_expr(builder, interner, expr),
                None => Operand::text("1"),
            };
            let next_temp = builder.new_temp();
            builder.gen(
                Op::Add,
                Operand::text(var_text.clone()),
                step_place,
                Operand::text(next_temp.clone()),
            );
            builder.gen(Op::Assign, Operand::text(next_temp), Operand::Empty, Operand::text(var_text));
            builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Label(loop_label));

            let after = builder.next_quad_label();
            builder.backpatch(&[exit], after);
        }
        Stmt::Input { target, .. } => {
            builder.gen(Op::In, Operand::Empty, Operand::Empty, Operand::text(interner.resolve(*target)));
        }
        Stmt::Print { value, .. } => {
            let place = lower_expr(builder, interner, value);
            builder.gen(Op::Out, place, Operand::Empty, Operand::Empty);
        }
        Stmt::Call { name, args, .. } => {
            lower_args(builder, interner, args);
            builder.gen(Op::Call, Operand::text(interner.resolve(*name)), Operand::Empty, Operand::Empty);
        }
    }
}

/// Whether `body` contains an assignment to `func_name` — this language's
/// convention for setting a function's return value — searched through
/// nested control-flow statements but not into nested subprograms (they
/// have their own return value, if any).
pub fn mentions_return_assignment(body: &[Stmt], func_name: Symbol) -> bool {
    body.iter().any(|stmt| stmt_mentions_return(stmt, func_name))
}

fn stmt_mentions_return(stmt: &Stmt, func_name: Symbol) -> bool {
    match stmt {
        Stmt::Assignment { target, .. } => *target == func_name,
        Stmt::If {
            then_branch,
            else_branch,
            ..
        } => {
            mentions_return_assignment(then_branch, func_name)
                || else_branch
                    .as_deref()
                    .is_some_and(|stmts| mentions_return_assignment(stmts, func_name))
        }
        Stmt::While { body, .. } | Stmt::DoUntil { body, .. } | Stmt::For { body, .. } => {
            mentions_return_assignment(body, func_name)
        }
        Stmt::Input { .. } | Stmt::Print { .. } | Stmt::Call { .. } => false,
    }
}
