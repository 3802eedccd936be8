//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output. Tokens carry
//! no text; the scanner slices the source through spans when it needs one.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
pub(crate) enum RawToken {
    #[regex(r"%[^\n]*")]
    Comment,

    /// Bare atom: `ok`, `module_name`, `fun`.
    #[regex(r"[a-z][a-zA-Z0-9_@]*")]
    Atom,

    /// Quoted atom: `'hello world'`, with backslash escapes.
    #[regex(r"'([^'\\\n]|\\.)*'")]
    QuotedAtom,

    /// Variable: `X`, `_Acc`.
    #[regex(r"[A-Z_][a-zA-Z0-9_@]*")]
    Var,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    /// Based integer: `16#ff`, `2#1010`.
    #[regex(r"[0-9]+#[0-9a-zA-Z]+")]
    BasedInteger,

    #[regex(r"[0-9][0-9_]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    /// Character literal: `$a`, `$\n`.
    #[regex(r"\$(\\.|.)")]
    Char,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<<")]
    BinOpen,
    #[token(">>")]
    BinClose,

    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("/")]
    Slash,
    #[token("-")]
    Dash,
    #[token("->")]
    Arrow,

    /// Remaining operator characters, folded together. The scanner never
    /// needs to tell `=` from `++`; it only tracks brackets and form dots.
    #[regex(r"[=+*<>!?#&|]+")]
    Op,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source).flatten().collect()
    }

    #[test]
    fn lex_attribute_head() {
        assert_eq!(
            kinds("-module(foo)."),
            vec![
                RawToken::Dash,
                RawToken::Atom,
                RawToken::LParen,
                RawToken::Atom,
                RawToken::RParen,
                RawToken::Dot,
            ]
        );
    }

    #[test]
    fn arrow_beats_dash() {
        assert_eq!(kinds("->"), vec![RawToken::Arrow]);
        assert_eq!(kinds("- >"), vec![RawToken::Dash, RawToken::Op]);
    }

    #[test]
    fn float_is_not_two_forms() {
        assert_eq!(kinds("3.14"), vec![RawToken::Float]);
    }

    #[test]
    fn quoted_atom_swallows_dots() {
        assert_eq!(kinds("'a.b'"), vec![RawToken::QuotedAtom]);
    }

    #[test]
    fn string_with_escapes() {
        assert_eq!(kinds(r#""say \"hi\".""#), vec![RawToken::String]);
    }

    #[test]
    fn comments_are_single_tokens() {
        assert_eq!(
            kinds("ok % trailing (unbalanced\n"),
            vec![RawToken::Atom, RawToken::Comment]
        );
    }

    #[test]
    fn char_literals() {
        assert_eq!(kinds(r"$a $\n $("), vec![RawToken::Char; 3]);
    }
}
