use std::fmt;

/// Binary region operators, with their binding strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `&`
    And,
    /// `|`
    Or,
    /// `-`
    Minus,
    /// `^`
    Xor,
}

impl BinOp {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '&' => Some(BinOp::And),
            '|' => Some(BinOp::Or),
            '-' => Some(BinOp::Minus),
            '^' => Some(BinOp::Xor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::And => '&',
            BinOp::Or => '|',
            BinOp::Minus => '-',
            BinOp::Xor => '^',
        }
    }

    /// `&` and `-` bind tighter than `|` and `^`.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Or | BinOp::Xor => 1,
            BinOp::And | BinOp::Minus => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree. Leaves name drawables; inner nodes own both operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ast {
    Name(String),
    Binary {
        left: Box<Ast>,
        op: BinOp,
        right: Box<Ast>,
    },
}

impl Ast {
    pub fn name(name: impl Into<String>) -> Self {
        Ast::Name(name.into())
    }

    pub fn binary(left: Ast, op: BinOp, right: Ast) -> Self {
        Ast::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Leaf names in left-to-right order (duplicates kept).
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Ast::Name(n) => out.push(n),
            Ast::Binary { left, right, .. } => {
                left.collect_names(out);
                right.collect_names(out);
            }
        }
    }

    /// Number of binary nodes.
    pub fn op_count(&self) -> usize {
        match self {
            Ast::Name(_) => 0,
            Ast::Binary { left, right, .. } => 1 + left.op_count() + right.op_count(),
        }
    }
}

/// Fully parenthesized form: every binary node is wrapped, leaves are bare.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Name(n) => f.write_str(n),
            Ast::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
