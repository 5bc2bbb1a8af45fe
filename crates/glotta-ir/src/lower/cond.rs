use glotta_par::ast::{Condition, RelOp};
use glotta_util::Interner;

use super::expr::lower_expr;
use crate::builder::{make_list, merge, PendingList, QuadBuilder};
use crate::quad::{Op, Operand};

fn lower_relop(op: RelOp) -> Op {
    match op {
        RelOp::Lt => Op::Lt,
        RelOp::Le => Op::Le,
        RelOp::Gt => Op::Gt,
        RelOp::Ge => Op::Ge,
        RelOp::Eq => Op::Eq,
        RelOp::Ne => Op::Ne,
    }
}

/// The pending jump labels produced by translating a boolean expression:
/// `true_list` holes want the label where the body runs, `false_list`
/// holes want the label where control continues past it.
pub struct CondLists {
    pub true_list: PendingList,
    pub false_list: PendingList,
}

pub fn lower_condition(builder: &mut QuadBuilder, interner: &Interner, condition: &Condition) -> CondLists {
    match condition {
        Condition::Compare { op, left, right, .. } => {
            let lplace = lower_expr(builder, interner, left);
            let rplace = lower_expr(builder, interner, right);
            let true_label = builder.gen(lower_relop(*op), lplace, rplace, Operand::Empty);
            let false_label = builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Empty);
            CondLists {
                true_list: make_list(true_label),
                false_list: make_list(false_label),
            }
        }
        Condition::And(left, right) => {
            let left_lists = lower_condition(builder, interner, left);
            let target = builder.next_quad_label();
            builder.backpatch(&left_lists.true_list, target);
            let right_lists = lower_condition(builder, interner, right);
            CondLists {
                true_list: right_lists.true_list,
                false_list: merge(left_lists.false_list, right_lists.false_list),
            }
        }
        Condition::Or(left, right) => {
            let left_lists = lower_condition(builder, interner, left);
            let target = builder.next_quad_label();
            builder.backpatch(&left_lists.false_list, target);
            let right_lists = lower_condition(builder, interner, right);
            CondLists {
                true_list: merge(left_lists.true_list, right_lists.true_list),
                false_list: right_lists.false_list,
            }
        }
        Condition::Not(inner) => {
            let inner_lists = lower_condition(builder, interner, inner);
            CondLists {
                true_list: inner_lists.false_list,
                false_list: inner_lists.true_list,
            }
        }
    }
}
