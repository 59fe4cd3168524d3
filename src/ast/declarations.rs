use super::expressions::Expr;

/// The name-and-parameter-list signature of a function, independent of
/// its body.
///
/// Parameter names are kept in source order. Duplicates are allowed
/// syntactically; rejecting them is a backend concern. An empty name
/// denotes the anonymous prototype synthesized around a bare top-level
/// expression.
#[derive(Debug, PartialEq, Clone)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: String, params: Vec<String>) -> Prototype {
        Prototype { name, params }
    }

    /// Anonymous signature used to wrap a bare top-level expression.
    pub fn anonymous() -> Prototype {
        Prototype {
            name: String::new(),
            params: vec![],
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// A complete function definition. The body is always exactly one
/// expression; the grammar has no statement sequencing.
#[derive(Debug, PartialEq, Clone)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

/// One top-level construct, as produced by a single pass of the driver
/// loop. Bare expressions arrive here already wrapped in an anonymous
/// `Function`.
#[derive(Debug, PartialEq, Clone)]
pub enum Item {
    Function(Function),
    Extern(Prototype),
}
