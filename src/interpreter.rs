/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree recursively against an environment holding
/// the previous answer and the `sum` loop index, resolving names through the
/// keyword table.
///
/// # Responsibilities
/// - Evaluates literals, constants, negation, arithmetic and calls.
/// - Checks call targets and argument counts.
/// - Reports unknown names and operators as runtime errors.
pub mod evaluator;
/// The lexer module tokenizes an input line.
///
/// The lexer reads raw text and produces tokens one at a time: numbers,
/// identifiers, operators, parentheses and commas. Characters it does not
/// recognize become illegal tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a precedence-climbing (Pratt) parser with separate prefix
/// and infix dispatch tables.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Applies operator precedence and associativity.
/// - Reports syntax errors with their column.
pub mod parser;
/// The token module defines lexical units.
///
/// Declares the token kinds, their precedence when used as operators, and the
/// [`token::Token`] value handed from the lexer to the parser.
pub mod token;
