use std::fmt::Write as _;

use glotta_ir::Quad;
use glotta_sem::{EntityKind, SymbolTable};
use glotta_util::Interner;

/// One quadruple per line, labels left-padded to the width of the widest
/// label so the column lines up.
pub fn dump_quads(quads: &[Quad]) -> String {
    let width = quads
        .last()
        .map(|q| q.label.to_string().len())
        .unwrap_or(1);

    let mut out = String::new();
    for quad in quads {
        writeln!(out, "{:0width$}: ({}, {}, {}, {})", quad.label, quad.op, quad.arg1, quad.arg2, quad.result).unwrap();
    }
    out
}

/// A human-readable symbol-table dump: one scope per block, every entity
/// on its own line with name, kind, level, and offset. Not a stable
/// format, just a debugging aid for the `.sym` artifact.
pub fn dump_symbol_table(table: &SymbolTable, interner: &Interner) -> String {
    let mut out = String::new();
    for (id, scope) in table.scopes() {
        writeln!(
            out,
            "scope {} '{}' (level {}):",
            id.0,
            interner.resolve(scope.name),
            scope.level
        )
        .unwrap();
        for entity in scope.entities.values() {
            writeln!(
                out,
                "  {:<20} {:<10} level={} offset={}",
                interner.resolve(entity.name),
                kind_name(entity.kind),
                entity.scope_level,
                entity.offset
            )
            .unwrap();
        }
    }
    out
}

fn kind_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Program => "program",
        EntityKind::Variable => "variable",
        EntityKind::Parameter => "parameter",
        EntityKind::Function => "function",
        EntityKind::Procedure => "procedure",
    }
}
