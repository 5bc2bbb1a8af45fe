use glotta_par::ast::{Argument, BinOp, Expr};
use glotta_util::Interner;

use crate::builder::QuadBuilder;
use crate::quad::{Op, Operand};

fn lower_binop(op: BinOp) -> Op {
    match op {
        BinOp::Add => Op::Add,
        BinOp::Sub => Op::Sub,
        BinOp::Mul => Op::Mul,
        BinOp::Div => Op::Div,
    }
}

/// Lower an expression to a "place": the text operand (identifier,
/// literal, or temporary) another quad can reference for its value.
pub fn lower_expr(builder: &mut QuadBuilder, interner: &Interner, expr: &Expr) -> Operand {
    match expr {
        Expr::Number { lexeme, .. } => Operand::text(lexeme.clone()),
        Expr::Identifier { name, .. } => Operand::text(interner.resolve(*name)),
        Expr::Negate { operand, .. } => {
            let place = lower_expr(builder, interner, operand);
            let temp = builder.new_temp();
            builder.gen(Op::Sub, Operand::text("0"), place, Operand::text(temp.clone()));
            Operand::text(temp)
        }
        Expr::Binary { op, left, right, .. } => {
            let lplace = lower_expr(builder, interner, left);
            let rplace = lower_expr(builder, interner, right);
            let temp = builder.new_temp();
            builder.gen(lower_binop(*op), lplace, rplace, Operand::text(temp.clone()));
            Operand::text(temp)
        }
        Expr::Call { name, args, .. } => lower_function_call(builder, interner, *name, args),
    }
}

/// Emit one `par` quad per actual argument, in declaration order.
pub fn lower_args(builder: &mut QuadBuilder, interner: &Interner, args: &[Argument]) {
    for arg in args {
        match arg {
            Argument::Value(expr) => {
                let place = lower_expr(builder, interner, expr);
                builder.gen(Op::Par, place, Operand::text("cv"), Operand::Empty);
            }
            Argument::Reference(name) => {
                builder.gen(
                    Op::Par,
                    Operand::text(interner.resolve(*name)),
                    Operand::text("ref"),
                    Operand::Empty,
                );
            }
        }
    }
}

/// A function call used as an expression: reserves a return-value place
/// before the call and returns it as the expression's place.
fn lower_function_call(
    builder: &mut QuadBuilder,
    interner: &Interner,
    name: glotta_util::Symbol,
    args: &[Argument],
) -> Operand {
    lower_args(builder, interner, args);
    let result = builder.new_temp();
    builder.gen(Op::Par, Operand::text(result.clone()), Operand::text("ret"), Operand::Empty);
    builder.gen(Op::Call, Operand::text(interner.resolve(name)), Operand::Empty, Operand::Empty);
    Operand::text(result)
}
