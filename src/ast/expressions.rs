/// One expression in the AST.
///
/// Nodes are immutable once constructed and exclusively own their
/// children; the tree has no cycles and no shared sub-trees. Parentheses
/// in the source are not represented — they only affect grouping during
/// the parse.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    /// A numeric literal such as `4.2`.
    Number(f64),

    /// A variable or function name.
    Identifier(String),

    /// A binary operation such as `42 + 5`. The operator is one of the
    /// characters in the parser's precedence table.
    Binary {
        op: char,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// A function call with an ordered, possibly empty argument list.
    Call { callee: String, args: Vec<Expr> },

    /// An `if`/`then`/`else` expression. All three branches are always
    /// present; there is no one-armed form.
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: char, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}
