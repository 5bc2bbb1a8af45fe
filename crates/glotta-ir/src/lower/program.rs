use glotta_par::ast::{Block, Program, Subprogram, SubprogramKind};
use glotta_util::Interner;

use super::stmt::{lower_stmts, mentions_return_assignment};
use crate::builder::QuadBuilder;
use crate::quad::{Op, Operand, Quad};

/// Generate the program's quad list: its own `begin_block`/`end_block`
/// shell around its subprograms and main statement sequence.
pub fn lower_program(program: &Program, interner: &Interner) -> Vec<Quad> {
    let mut builder = QuadBuilder::new();
    let name = interner.resolve(program.name).to_string();

    builder.gen(Op::BeginBlock, Operand::text(name.clone()), Operand::Empty, Operand::Empty);
    lower_block_body(&mut builder, interner, &program.block);
    builder.gen(Op::Halt, Operand::Empty, Operand::Empty, Operand::Empty);
    builder.gen(Op::EndBlock, Operand::text(name), Operand::Empty, Operand::Empty);

    builder.into_quads()
}

fn lower_block_body(builder: &mut QuadBuilder, interner: &Interner, block: &Block) {
    for subprogram in &block.subprograms {
        lower_subprogram(builder, interner, subprogram);
    }
    lower_stmts(builder, interner, &block.body);
}

fn lower_subprogram(builder: &mut QuadBuilder, interner: &Interner, subprogram: &Subprogram) {
    let name = interner.resolve(subprogram.name).to_string();

    builder.gen(Op::BeginBlock, Operand::text(name.clone()), Operand::Empty, Operand::Empty);
    lower_block_body(builder, interner, &subprogram.block);

    match subprogram.kind {
        SubprogramKind::Function if mentions_return_assignment(&subprogram.block.body, subprogram.name) => {
            builder.gen(Op::Retv, Operand::text(name.clone()), Operand::Empty, Operand::Empty);
        }
        _ => {
            builder.gen(Op::Ret, Operand::Empty, Operand::Empty, Operand::Empty);
        }
    }

    builder.gen(Op::EndBlock, Operand::text(name), Operand::Empty, Operand::Empty);
}
