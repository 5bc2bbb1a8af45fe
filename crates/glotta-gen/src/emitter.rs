use std::fmt::Write as _;

use glotta_ir::{Op, Operand, Quad};
use glotta_sem::{Entity, ScopeId, SymbolTable};
use glotta_util::Interner;

use crate::frame::{self, FrameContext, ACCESS_LINK_OFFSET, FRAME_SIZE, RETVAL_PTR_OFFSET};

/// Walks a quad list once, emitting RISC-V text. Holds the stack of
/// activation records currently open (one per nested `begin_block`) and
/// the running source text.
pub struct AsmGenerator<'a> {
    table: &'a SymbolTable,
    interner: &'a Interner,
    frames: Vec<FrameContext>,
    call_arg_index: usize,
    saw_print: bool,
    out: String,
}

impl<'a> AsmGenerator<'a> {
    pub fn new(table: &'a SymbolTable, interner: &'a Interner) -> Self {
        Self {
            table,
            interner,
            frames: Vec::new(),
            call_arg_index: 0,
            saw_print: false,
            out: String::new(),
        }
    }

    pub fn generate(mut self, quads: &[Quad]) -> String {
        writeln!(self.out, ".text").unwrap();
        for quad in quads {
            writeln!(self.out, "L{}:", quad.label).unwrap();
            self.lower(quad);
        }
        if self.saw_print {
            writeln!(self.out, ".data").unwrap();
            writeln!(self.out, "str_nl: .asciz \"\\n\"").unwrap();
        }
        self.out
    }

    fn current_scope(&self) -> ScopeId {
        self.frames.last().expect("a block is open").scope
    }

    fn emit(&mut self, instruction: impl std::fmt::Display) {
        writeln!(self.out, "    {instruction}").unwrap();
    }

    fn lower(&mut self, quad: &Quad) {
        match quad.op {
            Op::BeginBlock => self.begin_block(quad),
            Op::EndBlock => self.end_block(),
            Op::Assign => self.assign(quad),
            Op::Add => self.arith(quad, "add"),
            Op::Sub => self.arith(quad, "sub"),
            Op::Mul => self.arith(quad, "mul"),
            Op::Div => self.arith(quad, "div"),
            Op::Lt => self.relational(quad, "blt"),
            Op::Le => self.relational(quad, "ble"),
            Op::Gt => self.relational(quad, "bgt"),
            Op::Ge => self.relational(quad, "bge"),
            Op::Eq => self.relational(quad, "beq"),
            Op::Ne => self.relational(quad, "bne"),
            Op::Jump => self.jump(quad),
            Op::Jumpz => self.cond_jump(quad, "beqz"),
            Op::Jumpnz => self.cond_jump(quad, "bnez"),
            Op::Par => self.par(quad),
            Op::Call => self.call(quad),
            Op::Retv => self.retv(quad),
            Op::Ret => {}
            Op::In => self.input(quad),
            Op::Out => {
                self.saw_print = true;
                self.output(quad);
            }
            Op::Halt => self.halt(),
        }
    }

    // ---- block shell ----

    fn begin_block(&mut self, quad: &Quad) {
        let name = operand_text(&quad.arg1);
        let is_program = self.frames.is_empty();
        let scope = if is_program {
            self.table.global
        } else {
            self.find_child_scope(self.current_scope(), name)
        };
        self.frames.push(FrameContext::new(scope, self.table.scope(scope)));

        self.emit_bare(&format!("{name}:"));
        if is_program {
            self.emit(format!("addi sp,sp,{FRAME_SIZE}"));
            self.emit("mv gp,sp");
        } else {
            self.emit("sw ra,0(sp)");
            self.emit(format!("addi fp,sp,{FRAME_SIZE}"));
        }
    }

    fn end_block(&mut self) {
        let is_program = self.frames.len() == 1;
        if is_program {
            self.emit("li a7,10");
            self.emit("ecall");
        } else {
            self.emit("lw ra,0(sp)");
            self.emit("jr ra");
        }
        self.frames.pop();
    }

    fn emit_bare(&mut self, line: &str) {
        writeln!(self.out, "{line}").unwrap();
    }

    fn find_child_scope(&self, parent: ScopeId, name: &str) -> ScopeId {
        self.table
            .scopes()
            .find(|(_, scope)| scope.parent == Some(parent) && self.interner.resolve(scope.name) == name)
            .map(|(id, _)| id)
            .expect("every begin_block name names a declared subprogram")
    }

    // ---- statements ----

    fn assign(&mut self, quad: &Quad) {
        self.loadvr(&quad.arg1, "t0");
        self.storerv("t0", &quad.result);
    }

    fn arith(&mut self, quad: &Quad, op: &str) {
        self.loadvr(&quad.arg1, "t0");
        self.loadvr(&quad.arg2, "t1");
        self.emit(format!("{op} t2,t0,t1"));
        self.storerv("t2", &quad.result);
    }

    fn relational(&mut self, quad: &Quad, branch: &str) {
        self.loadvr(&quad.arg1, "t0");
        self.loadvr(&quad.arg2, "t1");
        self.emit(format!("{branch} t0,t1,{}", label_of(&quad.result)));
    }

    fn jump(&mut self, quad: &Quad) {
        self.emit(format!("j {}", label_of(&quad.result)));
    }

    fn cond_jump(&mut self, quad: &Quad, branch: &str) {
        self.loadvr(&quad.arg1, "t0");
        self.emit(format!("{branch} t0,{}", label_of(&quad.result)));
    }

    fn par(&mut self, quad: &Quad) {
        let marker = operand_text(&quad.arg2);
        let slot = frame::param_offset(self.call_arg_index);
        match marker {
            "cv" => {
                self.loadvr(&quad.arg1, "t0");
                self.emit(format!("sw t0,{slot}(fp)"));
            }
            "ref" => {
                let name = operand_text(&quad.arg1);
                match self.resolve(name) {
                    Some((entity, 0)) => {
                        let off = frame::entity_offset(entity.offset);
                        self.emit(format!("addi t0,sp,{off}"));
                    }
                    Some((entity, level)) => {
                        self.gnlvcode(level, "t0");
                        let off = frame::entity_offset(entity.offset);
                        self.emit(format!("addi t0,t0,{off}"));
                    }
                    None => self.emit_bare(&format!("    # unresolved reference parameter '{name}'")),
                }
                self.emit(format!("sw t0,{slot}(fp)"));
            }
            "ret" => {
                let place = operand_text(&quad.arg1).to_string();
                let off = self.temp_or_local_offset(&place).unwrap_or(0);
                self.emit(format!("addi t0,sp,{off}"));
                self.emit(format!("sw t0,{RETVAL_PTR_OFFSET}(fp)"));
                return;
            }
            other => self.emit_bare(&format!("    # unknown par marker '{other}'")),
        }
        self.call_arg_index += 1;
    }

    fn call(&mut self, quad: &Quad) {
        let name = operand_text(&quad.arg1);
        let callee = self.find_child_scope(self.current_scope(), name);
        let same_level = self.table.scope(callee).level == self.table.scope(self.current_scope()).level;
        if same_level {
            self.emit("lw t0,-4(sp)");
            self.emit("sw t0,-4(fp)");
        } else {
            self.emit("sw sp,-4(fp)");
        }
        self.emit(format!("addi sp,sp,{FRAME_SIZE}"));
        self.emit(format!("jal {name}"));
        self.emit(format!("addi sp,sp,-{FRAME_SIZE}"));
        self.call_arg_index = 0;
    }

    fn retv(&mut self, quad: &Quad) {
        self.loadvr(&quad.arg1, "t0");
        self.emit(format!("lw t1,{RETVAL_PTR_OFFSET}(sp)"));
        self.emit("sw t0,0(t1)");
    }

    fn input(&mut self, quad: &Quad) {
        self.emit("li a7,5");
        self.emit("ecall");
        self.storerv("a0", &quad.result);
    }

    fn output(&mut self, quad: &Quad) {
        self.loadvr(&quad.arg1, "a0");
        self.emit("li a7,1");
        self.emit("ecall");
        self.emit("la a0,str_nl");
        self.emit("li a7,4");
        self.emit("ecall");
    }

    fn halt(&mut self) {
        self.emit("li a7,10");
        self.emit("ecall");
    }

    // ---- operand addressing ----

    fn loadvr(&mut self, operand: &Operand, reg: &str) {
        match operand {
            Operand::Empty | Operand::Label(_) => {}
            Operand::Text(text) => {
                if text.parse::<i64>().is_ok() {
                    self.emit(format!("li {reg},{text}"));
                } else if text.starts_with("T_") {
                    let off = self.frames.last_mut().unwrap().temp_offset(text);
                    self.emit(format!("lw {reg},{off}(sp)"));
                } else {
                    self.load_named(text, reg);
                }
            }
        }
    }

    fn storerv(&mut self, reg: &str, operand: &Operand) {
        let Operand::Text(text) = operand else { return };
        if text.starts_with("T_") {
            let off = self.frames.last_mut().unwrap().temp_offset(text);
            self.emit(format!("sw {reg},{off}(sp)"));
        } else {
            self.store_named(text, reg);
        }
    }

    fn load_named(&mut self, name: &str, reg: &str) {
        match self.resolve(name) {
            Some((entity, 0)) => {
                let off = frame::entity_offset(entity.offset);
                self.emit(format!("lw {reg},{off}(sp)"));
            }
            Some((entity, level)) => {
                let scratch = addr_scratch(reg);
                self.gnlvcode(level, scratch);
                let off = frame::entity_offset(entity.offset);
                self.emit(format!("lw {reg},{off}({scratch})"));
            }
            None => self.emit_bare(&format!("    # unresolved identifier '{name}'")),
        }
    }

    fn store_named(&mut self, name: &str, reg: &str) {
        match self.resolve(name) {
            Some((entity, 0)) => {
                let off = frame::entity_offset(entity.offset);
                self.emit(format!("sw {reg},{off}(sp)"));
            }
            Some((entity, level)) => {
                let scratch = addr_scratch(reg);
                self.gnlvcode(level, scratch);
                let off = frame::entity_offset(entity.offset);
                self.emit(format!("sw {reg},{off}({scratch})"));
            }
            None => self.emit_bare(&format!("    # unresolved identifier '{name}'")),
        }
    }

    /// Chase the access-link chain `level` hops up from the current
    /// frame, leaving the resulting frame base address in `reg`.
    fn gnlvcode(&mut self, level: u32, reg: &str) {
        self.emit(format!("addi {reg},sp,0"));
        for _ in 0..level {
            self.emit(format!("lw {reg},{ACCESS_LINK_OFFSET}({reg})"));
        }
    }

    fn resolve(&self, name: &str) -> Option<(Entity, u32)> {
        let mut scope = self.current_scope();
        let mut level = 0;
        loop {
            let s = self.table.scope(scope);
            if let Some(entity) = s.entities.values().find(|e| self.interner.resolve(e.name) == name) {
                return Some((entity.clone(), level));
            }
            scope = s.parent?;
            level += 1;
        }
    }

    fn temp_or_local_offset(&mut self, place: &str) -> Option<i32> {
        if place.starts_with("T_") {
            Some(self.frames.last_mut().unwrap().temp_offset(place))
        } else {
            self.resolve(place)
                .filter(|(_, level)| *level == 0)
                .map(|(entity, _)| frame::entity_offset(entity.offset))
        }
    }
}

fn operand_text(operand: &Operand) -> &str {
    match operand {
        Operand::Text(text) => text.as_str(),
        Operand::Empty => "_",
        Operand::Label(_) => "",
    }
}

fn label_of(operand: &Operand) -> String {
    match operand {
        Operand::Label(label) => format!("L{label}"),
        other => operand_text(other).to_string(),
    }
}

fn addr_scratch(value_reg: &str) -> &'static str {
    if value_reg == "t1" {
        "t0"
    } else {
        "t1"
    }
}
