//! RISC-V assembly emission: walks a quadruple list and lowers each one
//! to a small instruction sequence, resolving every variable reference
//! against the symbol table's frame offsets.

mod emitter;
mod frame;

use glotta_ir::Quad;
use glotta_sem::SymbolTable;
use glotta_util::Interner;

pub use emitter::AsmGenerator;

/// Render `quads` as RISC-V assembly text.
pub fn render(quads: &[Quad], table: &SymbolTable, interner: &Interner) -> String {
    AsmGenerator::new(table, interner).generate(quads)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_source(src: &str) -> String {
        let mut interner = Interner::new();
        let tokens = glotta_lex::tokenize(src).expect("lexing should succeed");
        let program = glotta_par::parse(&tokens, &mut interner).expect("parsing should succeed");
        let (table, _handler) = glotta_sem::build(&program, &mut interner);
        let quads = glotta_ir::emit(&program, &table, &interner);
        render(&quads, &table, &interner)
    }

    #[test]
    fn program_shell_sets_up_and_tears_down_the_frame() {
        let asm = render_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1; a := a + 1 τέλος_προγράμματος",
        );
        assert!(asm.contains("t:"));
        assert!(asm.contains("mv gp,sp"));
        assert!(asm.contains("li a7,10"));
        assert!(asm.contains("ecall"));
    }

    #[test]
    fn assignment_loads_an_immediate_and_stores_to_the_local_slot() {
        let asm = render_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 5 τέλος_προγράμματος",
        );
        assert!(asm.contains("li t0,5"));
        assert!(asm.contains("sw t0,-12(sp)"));
    }

    #[test]
    fn if_then_else_lowers_a_branch_and_a_jump() {
        let asm = render_source(
            "πρόγραμμα t δήλωση a \
             αρχή_προγράμματος εάν a < 10 τότε a := 1 αλλιώς a := 2 εάν_τέλος \
             τέλος_προγράμματος",
        );
        assert!(asm.contains("blt"));
        assert!(asm.contains("j L"));
    }

    #[test]
    fn print_statement_makes_an_ecall_and_pulls_in_the_data_section() {
        let asm = render_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος γράψε a τέλος_προγράμματος",
        );
        assert!(asm.contains(".data"));
        assert!(asm.contains("str_nl"));
    }

    #[test]
    fn function_with_reference_parameter_spills_its_address_into_the_call_frame() {
        let asm = render_source(
            "πρόγραμμα t \
             συνάρτηση αύξηση(α) διαπροσωπεία είσοδος β αρχή_συνάρτησης αύξηση := α + β τέλος_συνάρτησης \
             δήλωση γ, α, β \
             αρχή_προγράμματος γ := αύξηση(α, %β) τέλος_προγράμματος",
        );
        assert!(asm.contains("αύξηση:"));
        assert!(asm.contains("jal αύξηση"));
        assert!(asm.contains("sw ra,0(sp)"));
    }
}
