//! Intermediate-code generation: lowers an AST into an ordered list of
//! labeled quadruples, resolving control flow with the classic
//! next-quad / backpatch scheme.

mod builder;
mod lower;
pub mod quad;

use glotta_par::ast::Program;
use glotta_sem::SymbolTable;
use glotta_util::Interner;

pub use builder::{make_list, merge, PendingList, QuadBuilder};
pub use quad::{Op, Operand, Quad};

/// Lower `program` into its quadruple list.
///
/// The symbol table parameter mirrors the rest of the pipeline (each
/// stage's signature takes the previous stage's full output) but isn't
/// read here: every quad operand is a plain text token, and resolving a
/// name's storage location is the RISC-V emitter's job, not this one's.
pub fn emit(program: &Program, _table: &SymbolTable, interner: &Interner) -> Vec<Quad> {
    lower::lower_program(program, interner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_source(src: &str) -> (Vec<Quad>, Interner) {
        let mut interner = Interner::new();
        let tokens = glotta_lex::tokenize(src).expect("lexing should succeed");
        let program = glotta_par::parse(&tokens, &mut interner).expect("parsing should succeed");
        let (table, _handler) = glotta_sem::build(&program, &mut interner);
        let quads = emit(&program, &table, &interner);
        (quads, interner)
    }

    #[test]
    fn labels_are_contiguous_from_zero() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1; a := a + 1 τέλος_προγράμματος",
        );
        for (i, quad) in quads.iter().enumerate() {
            assert_eq!(quad.label, i as u32);
        }
    }

    #[test]
    fn hello_increment_matches_the_documented_labels() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1; a := a + 1 τέλος_προγράμματος",
        );
        assert_eq!(quads.len(), 6);
        assert_eq!(quads[0].op, Op::BeginBlock);
        assert_eq!(quads[1].op, Op::Assign);
        assert_eq!(quads[2].op, Op::Add);
        assert_eq!(quads[3].op, Op::Assign);
        assert_eq!(quads[4].op, Op::Halt);
        assert_eq!(quads[5].op, Op::EndBlock);
    }

    #[test]
    fn if_then_else_backpatches_both_branches() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση a \
             αρχή_προγράμματος εάν a < 10 τότε a := 1 αλλιώς a := 2 εάν_τέλος \
             τέλος_προγράμματος",
        );
        let lt = quads.iter().find(|q| q.op == Op::Lt).unwrap();
        let assign_one = quads
            .iter()
            .find(|q| q.op == Op::Assign && q.arg1 == Operand::text("1"))
            .unwrap();
        assert_eq!(lt.result, Operand::Label(assign_one.label));

        let false_jump = quads
            .iter()
            .find(|q| q.op == Op::Jump && q.result != Operand::Empty)
            .unwrap();
        let assign_two = quads
            .iter()
            .find(|q| q.op == Op::Assign && q.arg1 == Operand::text("2"))
            .unwrap();
        assert_eq!(false_jump.result, Operand::Label(assign_two.label));
    }

    #[test]
    fn while_loop_jumps_back_to_its_condition() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος όσο a < 10 επανάλαβε a := a + 1 όσο_τέλος τέλος_προγράμματος",
        );
        let cond_start = quads.iter().find(|q| q.op == Op::Lt).unwrap().label;
        let back_jump = quads.iter().rev().find(|q| q.op == Op::Jump).unwrap();
        assert_eq!(back_jump.result, Operand::Label(cond_start));
    }

    #[test]
    fn for_loop_compares_with_le_and_steps_by_default_one() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση i αρχή_προγράμματος για i := 1 έως 8 επανάλαβε γράψε i για_τέλος τέλος_προγράμματος",
        );
        assert!(quads.iter().any(|q| q.op == Op::Le));
        assert!(quads.iter().any(|q| q.op == Op::Jumpz));
        let step_add = quads
            .iter()
            .find(|q| q.op == Op::Add && q.arg2 == Operand::text("1"))
            .unwrap();
        assert_eq!(step_add.arg1, Operand::text("i"));
    }

    #[test]
    fn function_call_with_reference_argument_emits_par_ref_and_retv_place() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t \
             συνάρτηση αύξηση(α) διαπροσωπεία είσοδος β αρχή_συνάρτησης αύξηση := α + β τέλος_συνάρτησης \
             δήλωση γ, α, β \
             αρχή_προγράμματος γ := αύξηση(α, %β) τέλος_προγράμματος",
        );
        assert!(quads
            .iter()
            .any(|q| q.op == Op::Par && q.arg1 == Operand::text("α") && q.arg2 == Operand::text("cv")));
        assert!(quads
            .iter()
            .any(|q| q.op == Op::Par && q.arg1 == Operand::text("β") && q.arg2 == Operand::text("ref")));
        assert!(quads.iter().any(|q| q.op == Op::Par && q.arg2 == Operand::text("ret")));

        let call = quads.iter().find(|q| q.op == Op::Call).unwrap();
        assert_eq!(call.arg1, Operand::text("αύξηση"));

        let retv = quads.iter().find(|q| q.op == Op::Retv).unwrap();
        assert_eq!(retv.arg1, Operand::text("αύξηση"));
    }

    #[test]
    fn print_and_input_emit_out_and_in_quads() {
        let (quads, _interner) = emit_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος διάβασε a; γράψε a τέλος_προγράμματος",
        );
        assert!(quads.iter().any(|q| q.op == Op::In));
        assert!(quads.iter().any(|q| q.op == Op::Out));
    }
}
