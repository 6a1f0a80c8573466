use std::fmt;

use crate::interpreter::token::{Token, TokenKind};

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct of the calculator grammar: numeric literals,
/// identifiers, unary negation, binary arithmetic and function calls. Every
/// node keeps the token it was built from, and every non-leaf node owns its
/// children exclusively, so dropping the root releases the whole tree exactly
/// once.
///
/// The [`Display`](fmt::Display) implementation prints the tree in fully
/// parenthesized infix form, which parses back into an equivalent tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `2.5`.
    NumberLiteral {
        /// The converted value.
        value: f64,
        /// The `NUMBER` token holding the source text.
        token: Token,
    },
    /// A name such as `pi` or `ans`, resolved only during evaluation.
    Identifier {
        /// The identifier text.
        name:  String,
        /// The `IDENT` token.
        token: Token,
    },
    /// A prefix operation. The only prefix operator is negation.
    Prefix {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary arithmetic operation (`+`, `-`, `*`, `/`, `^`).
    Infix {
        /// The operator token.
        operator: Token,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A function call such as `rootn(8, 3)`.
    Call {
        /// The expression being called. Only identifiers can be evaluated.
        callee:    Box<Self>,
        /// The call arguments in source order.
        arguments: Vec<Self>,
        /// The `(` token opening the argument list.
        token:     Token,
    },
}

impl Expr {
    /// Builds a numeric literal node with a synthesized token.
    ///
    /// ## Example
    /// ```
    /// use calcline::ast::Expr;
    ///
    /// let expr = Expr::number(4.5);
    /// assert_eq!(expr.to_string(), "4.5");
    /// ```
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::NumberLiteral { value,
                              token: Token::new(TokenKind::Number, value.to_string(), 0) }
    }

    /// Builds an identifier node with a synthesized token.
    #[must_use]
    pub fn identifier(name: &str) -> Self {
        Self::Identifier { name:  name.to_string(),
                           token: Token::new(TokenKind::Ident, name, 0), }
    }

    /// Builds a binary operation node from an operator token.
    #[must_use]
    pub fn infix(operator: Token, left: Self, right: Self) -> Self {
        Self::Infix { operator,
                      left: Box::new(left),
                      right: Box::new(right) }
    }

    /// Builds a call node with a synthesized `(` token.
    #[must_use]
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::Call { callee: Box::new(callee),
                     arguments,
                     token: Token::new(TokenKind::LParen, "(", 0) }
    }

    /// The token this node was built from.
    ///
    /// For operators this is the operator token, for calls the opening
    /// parenthesis.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::NumberLiteral { token, .. }
            | Self::Identifier { token, .. }
            | Self::Call { token, .. }
            | Self::Prefix { operator: token, .. }
            | Self::Infix { operator: token, .. } => token,
        }
    }

    /// Byte offset of the node's token in the input line.
    ///
    /// ## Example
    /// ```
    /// use calcline::parse;
    ///
    /// let expr = parse("1 + 2").unwrap();
    /// assert_eq!(expr.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        self.token().position
    }

    /// Number of nodes in the tree rooted at `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::NumberLiteral { .. } | Self::Identifier { .. } => 1,
            Self::Prefix { operand, .. } => 1 + operand.node_count(),
            Self::Infix { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Call { callee, arguments, .. } => {
                1 + callee.node_count() + arguments.iter().map(Self::node_count).sum::<usize>()
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => f.write_str(name),
            Self::Prefix { operator, operand } => write!(f, "({}{operand})", operator.literal),
            Self::Infix { operator,
                          left,
                          right, } => write!(f, "({left} {} {right})", operator.literal),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}
