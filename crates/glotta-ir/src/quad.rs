use std::fmt;

/// The closed set of quadruple operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    Jump,
    Jumpz,
    Jumpnz,
    Par,
    Call,
    Retv,
    Ret,
    In,
    Out,
    BeginBlock,
    EndBlock,
    Halt,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Op::Assign => ":=",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Jump => "jump",
            Op::Jumpz => "jumpz",
            Op::Jumpnz => "jumpnz",
            Op::Par => "par",
            Op::Call => "call",
            Op::Retv => "retv",
            Op::Ret => "ret",
            Op::In => "in",
            Op::Out => "out",
            Op::BeginBlock => "begin_block",
            Op::EndBlock => "end_block",
            Op::Halt => "halt",
        };
        f.write_str(text)
    }
}

/// A quadruple operand: the underscore placeholder, a backpatchable label,
/// or any other text token (identifier, literal, temporary name, or one of
/// the `cv`/`ref`/`ret` parameter-passing markers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Empty,
    Label(u32),
    Text(String),
}

impl Operand {
    pub fn text(s: impl Into<String>) -> Self {
        Operand::Text(s.into())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Empty => f.write_str("_"),
            Operand::Label(label) => write!(f, "{label}"),
            Operand::Text(text) => f.write_str(text),
        }
    }
}

/// One labeled four-address instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub label: u32,
    pub op: Op,
    pub arg1: Operand,
    pub arg2: Operand,
    pub result: Operand,
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {}, {}, {})",
            self.label, self.op, self.arg1, self.arg2, self.result
        )
    }
}
