use std::fmt::Display;

use super::expressions::Expr;

/// The signature shared by definitions and externs.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub parameters: Vec<String>,
}

impl Prototype {
    /// The signature given to a bare top-level expression.
    pub fn anonymous() -> Self {
        Prototype {
            name: String::new(),
            parameters: vec![],
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

/// One unit handed to the consumer by the top-level loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// `def name(params) body`
    Definition(Function),
    /// `extern name(params)`
    Extern(Prototype),
    /// A bare expression wrapped in an anonymous function.
    Expression(Function),
}

impl TopLevel {
    pub fn describe(&self) -> &'static str {
        match self {
            TopLevel::Definition(_) => "function definition",
            TopLevel::Extern(_) => "extern",
            TopLevel::Expression(_) => "top-level expression",
        }
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.parameters.join(", "))
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) => {
                write!(f, "def {} {}", function.prototype, function.body)
            }
            TopLevel::Extern(prototype) => write!(f, "extern {}", prototype),
            TopLevel::Expression(function) => write!(f, "{}", function.body),
        }
    }
}
