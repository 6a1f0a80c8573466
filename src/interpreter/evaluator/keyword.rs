/// The meaning of a predefined name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// `sqrt(x)`
    Sqrt,
    /// `rootn(x, n)`, the n-th root of x.
    Rootn,
    /// `log(x)`, base 10.
    Log,
    /// `logn(x, n)`, base n.
    Logn,
    /// `ln(x)`
    Ln,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `asin(x)`
    Asin,
    /// `acos(x)`
    Acos,
    /// `atan(x)`
    Atan,
    /// `sum(start, end, body)`
    Sum,
    /// The constant π.
    Pi,
    /// Euler's number when used bare, `e^x` when called as `e(x)`.
    E,
    /// The previous result.
    Ans,
    /// The `sum` loop index.
    I,
}

impl KeywordKind {
    /// Whether the keyword may be called.
    ///
    /// `pi`, `ans` and `i` only have a value. `e` has both a value and a call
    /// meaning.
    #[must_use]
    pub const fn is_callable(self) -> bool {
        !matches!(self, Self::Pi | Self::Ans | Self::I)
    }
}

/// An entry of the keyword table.
#[derive(Debug)]
pub struct Keyword {
    /// The identifier text.
    pub name:  &'static str,
    /// What the name means.
    pub kind:  KeywordKind,
    /// Number of arguments a call must supply. Zero for pure constants.
    pub arity: usize,
}

/// Defines the keyword table.
///
/// Each entry provides the name, the [`KeywordKind`] and the fixed arity. The
/// macro produces:
/// - `KEYWORD_TABLE` (static table for lookup),
/// - `KEYWORD_NAMES` (public list of keyword names).
macro_rules! keywords {
    (
        $(
            $name:literal => $kind:ident / $arity:literal
        ),* $(,)?
    ) => {
        /// Every predefined name, in declaration order.
        pub static KEYWORD_TABLE: &[Keyword] = &[
            $(
                Keyword { name: $name, kind: KeywordKind::$kind, arity: $arity },
            )*
        ];
        /// The names of all predefined keywords.
        pub const KEYWORD_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

keywords! {
    "sqrt"  => Sqrt / 1,
    "rootn" => Rootn / 2,
    "log"   => Log / 1,
    "logn"  => Logn / 2,
    "ln"    => Ln / 1,
    "sin"   => Sin / 1,
    "cos"   => Cos / 1,
    "tan"   => Tan / 1,
    "asin"  => Asin / 1,
    "acos"  => Acos / 1,
    "atan"  => Atan / 1,
    "sum"   => Sum / 3,
    "pi"    => Pi / 0,
    "e"     => E / 1,
    "ans"   => Ans / 0,
    "i"     => I / 0,
}

/// Finds the keyword with exactly the given name.
///
/// ## Example
/// ```
/// use calcline::interpreter::evaluator::keyword::{KeywordKind, lookup_keyword};
///
/// let rootn = lookup_keyword("rootn").unwrap();
/// assert_eq!(rootn.kind, KeywordKind::Rootn);
/// assert_eq!(rootn.arity, 2);
///
/// assert!(lookup_keyword("root").is_none());
/// ```
#[must_use]
pub fn lookup_keyword(name: &str) -> Option<&'static Keyword> {
    KEYWORD_TABLE.iter().find(|keyword| keyword.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves_to_its_own_entry() {
        for name in KEYWORD_NAMES {
            assert_eq!(lookup_keyword(name).map(|k| k.name), Some(*name));
        }
        assert_eq!(KEYWORD_TABLE.len(), 16);
    }

    #[test]
    fn constants_have_no_arguments() {
        for name in ["pi", "ans", "i"] {
            let keyword = lookup_keyword(name).unwrap();
            assert_eq!(keyword.arity, 0);
            assert!(!keyword.kind.is_callable());
        }
    }

    #[test]
    fn e_is_callable_with_one_argument() {
        let e = lookup_keyword("e").unwrap();
        assert!(e.kind.is_callable());
        assert_eq!(e.arity, 1);
        assert_eq!(lookup_keyword("sum").unwrap().arity, 3);
    }
}
