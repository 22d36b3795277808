//! Numeric and symbolic operand resolution.
//!
//! The engine never evaluates expressions itself: whenever an integer field
//! consumes input it hands the remaining text to a [`Resolve`]
//! implementation. [`Literals`] is the built-in one.

use alloc::string::String;
use alloc::vec::Vec;

/// Outcome of resolving an expression at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The expression is a known constant; the second element is the text
    /// following it.
    Constant(i64, &'a str),
    /// The expression refers to something only known later (a label, an
    /// external symbol). The field is left for the caller to patch.
    Symbol(&'a str),
    /// The text is not a valid expression.
    Illegal,
}

/// External expression resolver.
pub trait Resolve {
    /// Resolve the expression at the start of `text`.
    fn resolve<'a>(&self, text: &'a str) -> Resolved<'a>;
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn resolve<'a>(&self, text: &'a str) -> Resolved<'a> {
        (**self).resolve(text)
    }
}

/// Resolver for integer literals and named constants.
///
/// Accepts a chain of terms joined by `+` and `-`, each an optionally
/// signed literal (decimal, `0x`, `0o`, `0b`, `_` separators allowed) or an
/// identifier. Identifiers defined with [`Literals::with_constant`] fold
/// into the value; any other identifier makes the whole expression
/// symbolic.
///
/// ```rust
/// use table_asm::{Literals, Resolve, Resolved};
///
/// let r = Literals::new().with_constant("PAGE", 4096);
/// assert_eq!(r.resolve("PAGE+8]"), Resolved::Constant(4104, "]"));
/// assert_eq!(r.resolve("label,r1"), Resolved::Symbol(",r1"));
/// assert_eq!(r.resolve(",r1"), Resolved::Illegal);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Literals {
    constants: Vec<(String, i64)>,
}

impl Literals {
    /// A resolver with no named constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a named constant.
    pub fn with_constant(mut self, name: &str, value: i64) -> Self {
        self.define(name, value);
        self
    }

    /// Define (or redefine) a named constant in place.
    pub fn define(&mut self, name: &str, value: i64) -> &mut Self {
        match self.constants.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.constants.push((String::from(name), value)),
        }
        self
    }

    fn constant(&self, name: &str) -> Option<i64> {
        self.constants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Parse one term. `Ok(Some(v))` for a constant, `Ok(None)` for an
    /// unknown symbol.
    fn term<'a>(&self, text: &'a str) -> Result<(Option<i64>, &'a str), ()> {
        let (negate, text) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let first = *text.as_bytes().first().ok_or(())?;

        if first.is_ascii_digit() {
            let (value, rest) = parse_number(text)?;
            let value = if negate { value.checked_neg().ok_or(())? } else { value };
            return Ok((Some(value), rest));
        }

        if is_ident_start(first) {
            let len = text.bytes().take_while(|&b| is_ident_char(b)).count();
            let (name, rest) = text.split_at(len);
            let value = self
                .constant(name)
                .map(|v| if negate { v.wrapping_neg() } else { v });
            return Ok((value, rest));
        }

        Err(())
    }
}

impl Resolve for Literals {
    fn resolve<'a>(&self, text: &'a str) -> Resolved<'a> {
        let Ok((first, mut rest)) = self.term(text) else {
            return Resolved::Illegal;
        };
        let mut acc = first;
        let mut symbolic = first.is_none();

        while let Some(&op) = rest.as_bytes().first() {
            if op != b'+' && op != b'-' {
                break;
            }
            let Ok((term, after)) = self.term(&rest[1..]) else {
                return Resolved::Illegal;
            };
            rest = after;
            match (acc, term) {
                (Some(a), Some(t)) => {
                    let next = if op == b'+' { a.checked_add(t) } else { a.checked_sub(t) };
                    match next {
                        Some(v) => acc = Some(v),
                        None => return Resolved::Illegal,
                    }
                }
                _ => symbolic = true,
            }
        }

        match acc {
            Some(value) if !symbolic => Resolved::Constant(value, rest),
            _ => Resolved::Symbol(rest),
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'.' || b == b'$'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'$'
}

/// Parse an unsigned literal with an optional radix prefix.
fn parse_number(text: &str) -> Result<(i64, &str), ()> {
    let bytes = text.as_bytes();
    let (radix, start) = match (bytes.first(), bytes.get(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => (16, 2),
        (Some(b'0'), Some(b'o' | b'O')) => (8, 2),
        (Some(b'0'), Some(b'b' | b'B')) => (2, 2),
        _ => (10, 0),
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    let mut end = start;
    for &b in &bytes[start..] {
        if b == b'_' {
            end += 1;
            continue;
        }
        let Some(d) = (b as char).to_digit(radix) else {
            break;
        };
        value = value
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(d)))
            .ok_or(())?;
        digits += 1;
        end += 1;
    }

    if digits == 0 {
        return Err(());
    }
    // A literal running straight into letters (`12ab`) is malformed.
    if bytes.get(end).is_some_and(|b| is_ident_char(*b)) {
        return Err(());
    }
    Ok((value, &text[end..]))
}
