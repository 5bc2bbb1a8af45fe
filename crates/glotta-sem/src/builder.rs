use crate::scope::{EntityKind, ScopeId, SymbolTable};
use glotta_par::ast::{Block, Program, Subprogram, SubprogramKind};
use glotta_util::{Handler, Interner, Symbol};

/// Walks the AST depth-first, recording scope entries. Declaration is
/// idempotent: a duplicate name in the same scope is logged as a warning
/// (via `handler`) and the first-declared entity wins.
pub fn build(program: &Program, interner: &mut Interner) -> (SymbolTable, Handler) {
    let global_name = interner.intern("global");
    let mut table = SymbolTable::new(global_name);
    let mut handler = Handler::new();

    table.insert(table.global, program.name, EntityKind::Program, Vec::new());
    build_block(&program.block, &mut table, table.global, &mut handler);

    (table, handler)
}

fn build_block(block: &Block, table: &mut SymbolTable, scope: ScopeId, handler: &mut Handler) {
    for &name in &block.declarations {
        declare(table, scope, name, EntityKind::Variable, Vec::new(), handler);
    }
    for subprogram in &block.subprograms {
        build_subprogram(subprogram, table, scope, handler);
    }
}

fn build_subprogram(
    subprogram: &Subprogram,
    table: &mut SymbolTable,
    scope: ScopeId,
    handler: &mut Handler,
) {
    let kind = match subprogram.kind {
        SubprogramKind::Function => EntityKind::Function,
        SubprogramKind::Procedure => EntityKind::Procedure,
    };
    declare(
        table,
        scope,
        subprogram.name,
        kind,
        subprogram.params.clone(),
        handler,
    );

    let child = table.enter_scope(scope, subprogram.name);
    for &param in subprogram
        .params
        .iter()
        .chain(subprogram.input.iter())
        .chain(subprogram.output.iter())
    {
        declare(table, child, param, EntityKind::Parameter, Vec::new(), handler);
    }
    build_block(&subprogram.block, table, child, handler);
}

fn declare(
    table: &mut SymbolTable,
    scope: ScopeId,
    name: Symbol,
    kind: EntityKind,
    parameters: Vec<Symbol>,
    handler: &mut Handler,
) {
    if !table.insert(scope, name, kind, parameters) {
        handler.warn(
            format!("'{name:?}' already declared in this scope, keeping the first declaration"),
            None,
        );
    }
}
