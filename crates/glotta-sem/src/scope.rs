use glotta_util::{define_idx, Symbol};
use indexmap::IndexMap;

define_idx!(ScopeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Program,
    Variable,
    Parameter,
    Function,
    Procedure,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub name: Symbol,
    pub kind: EntityKind,
    pub scope_level: u32,
    pub offset: i32,
    pub parameters: Vec<Symbol>,
}

/// One lexical scope: the global program scope, or a function/procedure
/// body. `entities` preserves insertion order so a symbol-table dump
/// lists declarations the way they appeared in the source.
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: Symbol,
    pub level: u32,
    pub parent: Option<ScopeId>,
    pub entities: IndexMap<Symbol, Entity>,
    next_offset: i32,
}

impl Scope {
    fn new(name: Symbol, level: u32, parent: Option<ScopeId>) -> Self {
        Self {
            name,
            level,
            parent,
            entities: IndexMap::new(),
            next_offset: 0,
        }
    }
}

/// The arena of every scope created during the AST walk, addressed by
/// [`ScopeId`] instead of a `Rc<RefCell<_>>` tree — the scope tree is
/// naturally cyclic (parent <-> children) and an integer-indexed arena
/// sidesteps that without unsafe code.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: glotta_util::IndexVec<ScopeId, Scope>,
    pub global: ScopeId,
}

impl SymbolTable {
    pub(crate) fn new(global_name: Symbol) -> Self {
        let mut scopes = glotta_util::IndexVec::new();
        let global = scopes.push(Scope::new(global_name, 0, None));
        Self { scopes, global }
    }

    pub(crate) fn enter_scope(&mut self, parent: ScopeId, name: Symbol) -> ScopeId {
        let level = self.scopes[parent].level + 1;
        self.scopes.push(Scope::new(name, level, Some(parent)))
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// Insert `name` into `scope_id`, or leave the existing entity in
    /// place on re-declaration. Returns `true` when a new entity was
    /// created (`false` means the caller should warn about a duplicate).
    pub(crate) fn insert(
        &mut self,
        scope_id: ScopeId,
        name: Symbol,
        kind: EntityKind,
        parameters: Vec<Symbol>,
    ) -> bool {
        let scope = &mut self.scopes[scope_id];
        if scope.entities.contains_key(&name) {
            return false;
        }
        let offset = scope.next_offset;
        scope.next_offset += 4;
        scope.entities.insert(
            name,
            Entity {
                name,
                kind,
                scope_level: scope.level,
                offset,
                parameters,
            },
        );
        true
    }

    /// Look up `name` starting at `scope_id`, walking parent links unless
    /// `current_scope_only` is set.
    pub fn lookup(&self, scope_id: ScopeId, name: Symbol, current_scope_only: bool) -> Option<&Entity> {
        let mut current = Some(scope_id);
        while let Some(id) = current {
            let scope = &self.scopes[id];
            if let Some(entity) = scope.entities.get(&name) {
                return Some(entity);
            }
            if current_scope_only {
                return None;
            }
            current = scope.parent;
        }
        None
    }

    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes.iter_enumerated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glotta_util::Interner;

    #[test]
    fn lookup_in_child_scope_finds_parent_entity() {
        let mut interner = Interner::new();
        let global_name = interner.intern("global");
        let mut table = SymbolTable::new(global_name);
        let a = interner.intern("a");
        table.insert(table.global, a, EntityKind::Variable, Vec::new());

        let child_name = interner.intern("f");
        let child = table.enter_scope(table.global, child_name);

        let found = table.lookup(child, a, false).expect("should find parent entity");
        assert_eq!(found.scope_level, 0);
    }

    #[test]
    fn current_scope_only_lookup_does_not_see_parent() {
        let mut interner = Interner::new();
        let global_name = interner.intern("global");
        let mut table = SymbolTable::new(global_name);
        let a = interner.intern("a");
        table.insert(table.global, a, EntityKind::Variable, Vec::new());

        let child_name = interner.intern("f");
        let child = table.enter_scope(table.global, child_name);

        assert!(table.lookup(child, a, true).is_none());
    }

    #[test]
    fn reinsertion_keeps_the_first_entity() {
        let mut interner = Interner::new();
        let global_name = interner.intern("global");
        let mut table = SymbolTable::new(global_name);
        let a = interner.intern("a");
        assert!(table.insert(table.global, a, EntityKind::Variable, Vec::new()));
        assert!(!table.insert(table.global, a, EntityKind::Variable, Vec::new()));
        assert_eq!(table.scope(table.global).entities.len(), 1);
    }
}
