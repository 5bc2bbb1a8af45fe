use glotta_sem::Scope;
use glotta_util::FxHashMap;

/// Every activation record is this many bytes, regardless of how many
/// locals or parameters it actually holds.
pub const FRAME_SIZE: u32 = 64;
pub const WORD: i32 = 4;

pub const RA_OFFSET: i32 = 0;
pub const ACCESS_LINK_OFFSET: i32 = -4;
pub const RETVAL_PTR_OFFSET: i32 = -8;
const PARAMS_BASE_OFFSET: i32 = -12;

pub fn param_offset(index: usize) -> i32 {
    PARAMS_BASE_OFFSET - (index as i32) * WORD
}

/// A scope's entities are inserted in declaration order starting at
/// offset 0, stepping by [`WORD`] — parameters first, then locals (see
/// `glotta_sem::builder`). Reusing that ordering directly gives every
/// entity its frame-relative slot without a second offset table.
pub fn entity_offset(symbol_table_offset: i32) -> i32 {
    PARAMS_BASE_OFFSET - symbol_table_offset
}

fn locals_base_offset(scope: &Scope) -> i32 {
    PARAMS_BASE_OFFSET - (scope.entities.len() as i32) * WORD
}

/// Per-subprogram emission state: where its own temporaries live. Unlike
/// declared variables, temporaries never appear in the symbol table, so
/// the emitter hands out slots for them lazily, continuing the scope's
/// existing offset sequence.
pub struct FrameContext {
    pub scope: glotta_sem::ScopeId,
    temp_offsets: FxHashMap<String, i32>,
    next_temp_offset: i32,
}

impl FrameContext {
    pub fn new(scope: glotta_sem::ScopeId, scope_ref: &Scope) -> Self {
        Self {
            scope,
            temp_offsets: FxHashMap::default(),
            next_temp_offset: locals_base_offset(scope_ref),
        }
    }

    pub fn temp_offset(&mut self, name: &str) -> i32 {
        if let Some(&offset) = self.temp_offsets.get(name) {
            return offset;
        }
        let offset = self.next_temp_offset;
        self.next_temp_offset -= WORD;
        self.temp_offsets.insert(name.to_string(), offset);
        offset
    }
}
