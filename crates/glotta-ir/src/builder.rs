use crate::quad::{Op, Operand, Quad};

/// A list of quad labels still waiting for their `result` field to be
/// filled in. `true-list`/`false-list` in the condition-translation scheme
/// are both instances of this.
pub type PendingList = Vec<u32>;

pub fn make_list(label: u32) -> PendingList {
    vec![label]
}

pub fn merge(mut a: PendingList, b: PendingList) -> PendingList {
    a.extend(b);
    a
}

/// Owns the growing quad list during IR generation: the next-label and
/// next-temporary counters, and the `gen`/`backpatch` primitives every
/// translation rule is built from.
pub struct QuadBuilder {
    quads: Vec<Quad>,
    next_quad: u32,
    next_temp: u32,
}

impl QuadBuilder {
    pub fn new() -> Self {
        Self {
            quads: Vec::new(),
            next_quad: 0,
            next_temp: 0,
        }
    }

    pub fn next_quad_label(&self) -> u32 {
        self.next_quad
    }

    pub fn new_temp(&mut self) -> String {
        let name = format!("T_{}", self.next_temp);
        self.next_temp += 1;
        name
    }

    pub fn gen(&mut self, op: Op, arg1: Operand, arg2: Operand, result: Operand) -> u32 {
        let label = self.next_quad;
        self.quads.push(Quad {
            label,
            op,
            arg1,
            arg2,
            result,
        });
        self.next_quad += 1;
        label
    }

    /// Set the `result` field of every quad in `list` to the label `z`.
    pub fn backpatch(&mut self, list: &[u32], z: u32) {
        for &label in list {
            if let Some(quad) = self.quads.iter_mut().find(|q| q.label == label) {
                quad.result = Operand::Label(z);
            }
        }
    }

    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }
}

impl Default for QuadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_returns_the_label_it_was_assigned() {
        let mut builder = QuadBuilder::new();
        let first = builder.gen(Op::Halt, Operand::Empty, Operand::Empty, Operand::Empty);
        let second = builder.gen(Op::Halt, Operand::Empty, Operand::Empty, Operand::Empty);
        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn backpatch_only_touches_listed_labels() {
        let mut builder = QuadBuilder::new();
        let a = builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Empty);
        let b = builder.gen(Op::Jump, Operand::Empty, Operand::Empty, Operand::Empty);
        builder.backpatch(&make_list(a), 42);
        let quads = builder.into_quads();
        assert_eq!(quads[a as usize].result, Operand::Label(42));
        assert_eq!(quads[b as usize].result, Operand::Empty);
    }

    #[test]
    fn new_temp_names_are_sequential() {
        let mut builder = QuadBuilder::new();
        assert_eq!(builder.new_temp(), "T_0");
        assert_eq!(builder.new_temp(), "T_1");
    }
}
