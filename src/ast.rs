use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of six node kinds. Every node owns its children
/// exclusively, so a parsed expression is always a tree: no sharing and no
/// cycles. Parentheses are not a node kind; they only shape the tree.
///
/// The `Display` implementation renders a fully parenthesized form, which
/// makes the precedence decisions of the parser visible:
///
/// ```
/// use prattle::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::binary(BinaryOperator::Add,
///                         Expr::Number(1.0),
///                         Expr::binary(BinaryOperator::Mul, Expr::Number(2.0), Expr::Number(3.0)));
///
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.14`.
    Number(f64),
    /// Reference to a variable by name.
    Variable(String),
    /// A binary operation such as `a + b` or `a ^ b`.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation, `+x` or `-x`.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// Binds the value of an expression to a variable and yields that value.
    Assignment {
        /// Name of the variable being assigned.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
    /// A call to a named single-argument function, e.g. `sqrt(x)`.
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds an [`Expr::BinaryOp`] node, boxing both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds an [`Expr::UnaryOp`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Builds an [`Expr::Assignment`] node.
    #[must_use]
    pub fn assignment(name: impl Into<String>, value: Self) -> Self {
        Self::Assignment { name:  name.into(),
                           value: Box::new(value), }
    }

    /// Builds an [`Expr::FunctionCall`] node.
    #[must_use]
    pub fn call(name: impl Into<String>, argument: Self) -> Self {
        Self::FunctionCall { name:     name.into(),
                             argument: Box::new(argument), }
    }

    /// Returns the height of the tree rooted at this node.
    ///
    /// Leaves have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::UnaryOp { operand, .. } => 1 + operand.depth(),
            Self::Assignment { value, .. } => 1 + value.depth(),
            Self::FunctionCall { argument, .. } => 1 + argument.depth(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand } => write!(f, "({op}{operand})"),
            Self::Assignment { name, value } => write!(f, "({name} = {value})"),
            Self::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
        }
    }
}

/// Binary (infix) arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, the identity.
    Plus,
    /// `-x`, arithmetic negation.
    Negate,
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
