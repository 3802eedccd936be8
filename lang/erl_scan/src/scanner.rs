//! The form scanner.
//!
//! Walks the token stream form by form, building the syntax tree. Each
//! attribute or function becomes one child of the root; calls inside
//! function bodies become children of their function. Anything the
//! scanner cannot shape is skipped to the next form boundary.

use std::path::PathBuf;

use logos::Logos as _;
use tracing::trace;

use erl_syntax::{
    Name, NodeId, NodeKind, SharedInterner, SourceFile, Span, SyntaxTree, SyntaxTreeBuilder,
};

use crate::error::ScanError;
use crate::token::RawToken;

/// Scan source text into a syntax tree.
///
/// Never fails on malformed source; the only error is input too large for
/// the span representation.
pub fn scan_source(text: &str, interner: &SharedInterner) -> Result<SyntaxTree, ScanError> {
    let len = u32::try_from(text.len()).map_err(|_| ScanError::SourceTooLarge {
        len: text.len(),
    })?;

    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(text);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawToken::Comment) => {}
            Ok(kind) => {
                // Offsets fit u32: text length was checked above
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "token offsets are bounded by the checked text length"
                )]
                tokens.push(Tok {
                    kind,
                    span: Span::new(span.start as u32, span.end as u32),
                });
            }
            // Unlexable byte: drop it and keep going
            Err(()) => trace!(at = span.start, "skipping unlexable input"),
        }
    }

    let mut scanner = Scanner {
        text,
        tokens,
        pos: 0,
        interner,
        builder: SyntaxTreeBuilder::new(Span::new(0, len)),
    };
    scanner.scan_forms();
    Ok(scanner.builder.finish())
}

/// Scan a file's text into a [`SourceFile`] carrying its origin path.
pub fn scan_file(
    path: PathBuf,
    text: String,
    interner: &SharedInterner,
) -> Result<SourceFile, ScanError> {
    let tree = scan_source(&text, interner)?;
    Ok(SourceFile::new(Some(path), text, tree, interner.clone()))
}

struct Tok {
    kind: RawToken,
    span: Span,
}

/// Atoms that look like `name(` in a body without being calls.
fn is_keyword(text: &str) -> bool {
    matches!(
        text,
        "fun"
            | "case"
            | "if"
            | "receive"
            | "try"
            | "catch"
            | "after"
            | "begin"
            | "end"
            | "of"
            | "when"
            | "maybe"
            | "else"
            | "andalso"
            | "orelse"
            | "not"
            | "bnot"
    )
}

struct Scanner<'s> {
    text: &'s str,
    tokens: Vec<Tok>,
    pos: usize,
    interner: &'s SharedInterner,
    builder: SyntaxTreeBuilder,
}

impl Scanner<'_> {
    fn scan_forms(&mut self) {
        while self.pos < self.tokens.len() {
            self.scan_form();
        }
    }

    fn scan_form(&mut self) {
        match (self.kind_at(self.pos), self.kind_at(self.pos + 1)) {
            (Some(RawToken::Dash), Some(RawToken::Atom | RawToken::QuotedAtom)) => {
                self.scan_attribute();
            }
            (Some(RawToken::Atom | RawToken::QuotedAtom), Some(RawToken::LParen)) => {
                self.scan_function();
            }
            _ => {
                trace!(at = self.pos, "skipping unrecognized form");
                self.skip_to_form_end();
            }
        }
    }

    // Attributes

    fn scan_attribute(&mut self) {
        let dash_span = self.span_at(self.pos);
        let name_span = self.span_at(self.pos + 1);
        let name_text = self.atom_text(self.pos + 1);
        self.pos += 2;

        let checkpoint = self.pos;
        let parsed = match name_text.as_str() {
            "module" => self.scan_module_attr(dash_span),
            "include" => self.scan_include_attr(dash_span, false),
            "include_lib" => self.scan_include_attr(dash_span, true),
            "import" => self.scan_import_attr(dash_span),
            "export" => self.scan_export_attr(dash_span),
            _ => None,
        };

        let attr = match parsed {
            Some(attr) => attr,
            None => {
                // Unknown or misshapen attribute: record it as wild
                self.pos = checkpoint;
                let name = self.interner.intern(&name_text);
                let root = self.builder.root();
                self.builder
                    .push(NodeKind::WildAttr { name }, root, dash_span.merge(name_span))
            }
        };
        let end = self.skip_to_form_end();
        self.builder.widen(attr, end);
    }

    /// `-module(m).`
    fn scan_module_attr(&mut self, start: Span) -> Option<NodeId> {
        self.eat(RawToken::LParen)?;
        let name = self.eat_atom()?;
        self.eat(RawToken::RParen)?;
        let root = self.builder.root();
        Some(self.builder.push(NodeKind::ModuleAttr { name }, root, start))
    }

    /// `-include("path").` / `-include_lib("path").`
    fn scan_include_attr(&mut self, start: Span, lib: bool) -> Option<NodeId> {
        self.eat(RawToken::LParen)?;
        let string_span = self.eat_spanned(RawToken::String)?;
        self.eat(RawToken::RParen)?;
        let path = self.interner.intern(&strip_quotes(self.slice(string_span)));
        let root = self.builder.root();
        Some(
            self.builder
                .push(NodeKind::IncludeAttr { path, lib }, root, start),
        )
    }

    /// `-import(m, [f/0, g/1]).`
    fn scan_import_attr(&mut self, start: Span) -> Option<NodeId> {
        self.eat(RawToken::LParen)?;
        let module = self.eat_atom()?;
        self.eat(RawToken::Comma)?;
        let entries = self.scan_name_arity_list()?;
        self.eat(RawToken::RParen)?;
        let root = self.builder.root();
        let attr = self.builder.push(NodeKind::ImportAttr { module }, root, start);
        self.push_name_arities(attr, &entries);
        Some(attr)
    }

    /// `-export([f/0, g/1]).`
    fn scan_export_attr(&mut self, start: Span) -> Option<NodeId> {
        self.eat(RawToken::LParen)?;
        let entries = self.scan_name_arity_list()?;
        self.eat(RawToken::RParen)?;
        let root = self.builder.root();
        let attr = self.builder.push(NodeKind::ExportAttr, root, start);
        self.push_name_arities(attr, &entries);
        Some(attr)
    }

    /// `[f/0, g/1]` — collected into a buffer so nothing is pushed until
    /// the whole attribute's shape is confirmed.
    fn scan_name_arity_list(&mut self) -> Option<Vec<(Name, u32, Span)>> {
        self.eat(RawToken::LBracket)?;
        let mut entries = Vec::new();
        if self.kind_at(self.pos) == Some(RawToken::RBracket) {
            self.pos += 1;
            return Some(entries);
        }
        loop {
            let name_span = self.current_span()?;
            let name = self.eat_atom()?;
            self.eat(RawToken::Slash)?;
            let arity_span = self.eat_spanned(RawToken::Integer)?;
            let arity: u32 = self.slice(arity_span).parse().ok()?;
            entries.push((name, arity, name_span.merge(arity_span)));
            match self.kind_at(self.pos) {
                Some(RawToken::Comma) => self.pos += 1,
                Some(RawToken::RBracket) => {
                    self.pos += 1;
                    return Some(entries);
                }
                _ => return None,
            }
        }
    }

    fn push_name_arities(&mut self, parent: NodeId, entries: &[(Name, u32, Span)]) {
        for &(name, arity, span) in entries {
            self.builder
                .push(NodeKind::NameArity { name, arity }, parent, span);
        }
    }

    // Functions

    fn scan_function(&mut self) {
        let name_span = self.span_at(self.pos);
        let name_text = self.atom_text(self.pos);
        let name = self.interner.intern(&name_text);

        let Some(arity) = self.scan_head() else {
            trace!(function = %name_text, "unterminated function head");
            self.skip_to_form_end();
            return;
        };

        let root = self.builder.root();
        let func = self
            .builder
            .push(NodeKind::Function { name, arity }, root, name_span);
        let end = self.scan_clause_tail(func);
        self.builder.widen(func, end);
    }

    /// Consume `name ( args )` and return the arity, counting top-level
    /// commas in the argument list. `None` when the head never closes.
    fn scan_head(&mut self) -> Option<u32> {
        self.pos += 1; // name
        self.eat(RawToken::LParen)?;
        if self.kind_at(self.pos) == Some(RawToken::RParen) {
            self.pos += 1;
            return Some(0);
        }

        let mut depth = 1u32;
        let mut commas = 0u32;
        while let Some(kind) = self.kind_at(self.pos) {
            match kind {
                RawToken::LParen | RawToken::LBracket | RawToken::LBrace | RawToken::BinOpen => {
                    depth += 1;
                }
                RawToken::RParen | RawToken::RBracket | RawToken::RBrace | RawToken::BinClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return Some(commas + 1);
                    }
                }
                RawToken::Comma if depth == 1 => commas += 1,
                _ => {}
            }
            self.pos += 1;
        }
        None
    }

    /// Scan from after a clause head to the form's terminating dot,
    /// attaching body calls under `func`. Subsequent `;`-separated clauses
    /// attach to the same function node. Returns the form's end offset.
    fn scan_clause_tail(&mut self, func: NodeId) -> u32 {
        let mut depth = 0u32;
        while self.pos < self.tokens.len() {
            let kind = self.tokens[self.pos].kind;
            match kind {
                RawToken::Dot if depth == 0 && self.is_form_dot(self.pos) => {
                    let end = self.span_at(self.pos).end;
                    self.pos += 1;
                    return end;
                }
                RawToken::Semi if depth == 0 => {
                    self.pos += 1;
                    // Next clause of the same function; skip its head
                    if matches!(
                        (self.kind_at(self.pos), self.kind_at(self.pos + 1)),
                        (
                            Some(RawToken::Atom | RawToken::QuotedAtom),
                            Some(RawToken::LParen)
                        )
                    ) && self.scan_head().is_none()
                    {
                        break;
                    }
                }
                RawToken::LParen | RawToken::LBracket | RawToken::LBrace | RawToken::BinOpen => {
                    depth += 1;
                    self.pos += 1;
                }
                RawToken::RParen | RawToken::RBracket | RawToken::RBrace | RawToken::BinClose => {
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                }
                RawToken::Atom | RawToken::QuotedAtom => {
                    self.scan_possible_call(func);
                }
                _ => self.pos += 1,
            }
        }
        // Ran off the end of an unterminated form
        self.tokens.last().map_or(0, |t| t.span.end)
    }

    /// At an atom inside a body: emit `RemoteCall`/`Call` nodes for
    /// `m:f(` and `f(` shapes. Advances past what it consumed.
    fn scan_possible_call(&mut self, func: NodeId) {
        let name_span = self.span_at(self.pos);
        let name_text = self.atom_text(self.pos);

        // m:f(...)
        if self.kind_at(self.pos + 1) == Some(RawToken::Colon)
            && matches!(
                self.kind_at(self.pos + 2),
                Some(RawToken::Atom | RawToken::QuotedAtom)
            )
            && self.kind_at(self.pos + 3) == Some(RawToken::LParen)
        {
            let callee_span = self.span_at(self.pos + 2);
            let module_name = self.interner.intern(&name_text);
            let callee_name = self.interner.intern(&self.atom_text(self.pos + 2));
            let remote = self.builder.push(
                NodeKind::RemoteCall,
                func,
                name_span.merge(callee_span),
            );
            self.builder
                .push(NodeKind::ModuleRef { name: module_name }, remote, name_span);
            self.builder
                .push(NodeKind::Call { name: callee_name }, remote, callee_span);
            // Leave the `(` for the caller's depth tracking
            self.pos += 3;
            return;
        }

        // f(...)
        if self.kind_at(self.pos + 1) == Some(RawToken::LParen) && !is_keyword(&name_text) {
            let name = self.interner.intern(&name_text);
            let span = name_span.extend_to(self.span_at(self.pos + 1).end);
            self.builder.push(NodeKind::Call { name }, func, span);
        }
        self.pos += 1;
    }

    // Token access

    fn kind_at(&self, i: usize) -> Option<RawToken> {
        self.tokens.get(i).map(|t| t.kind)
    }

    fn span_at(&self, i: usize) -> Span {
        self.tokens.get(i).map_or(Span::DUMMY, |t| t.span)
    }

    fn current_span(&self) -> Option<Span> {
        self.tokens.get(self.pos).map(|t| t.span)
    }

    fn slice(&self, span: Span) -> &str {
        &self.text[span.to_range()]
    }

    /// Text of an atom token, with quoted atoms unquoted and unescaped.
    fn atom_text(&self, i: usize) -> String {
        let span = self.span_at(i);
        let raw = self.slice(span);
        if self.kind_at(i) == Some(RawToken::QuotedAtom) {
            unescape(&strip_quotes(raw))
        } else {
            raw.to_owned()
        }
    }

    /// Consume one token of the given kind.
    fn eat(&mut self, kind: RawToken) -> Option<()> {
        if self.kind_at(self.pos) == Some(kind) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Consume one token of the given kind, returning its span.
    fn eat_spanned(&mut self, kind: RawToken) -> Option<Span> {
        let span = self.current_span()?;
        self.eat(kind)?;
        Some(span)
    }

    /// Consume an atom (bare or quoted), interning its text.
    fn eat_atom(&mut self) -> Option<Name> {
        if matches!(
            self.kind_at(self.pos),
            Some(RawToken::Atom | RawToken::QuotedAtom)
        ) {
            let name = self.interner.intern(&self.atom_text(self.pos));
            self.pos += 1;
            Some(name)
        } else {
            None
        }
    }

    /// A dot ends a form only when nothing is glued to it: the next token
    /// starts after a gap (whitespace or a comment was between), or there
    /// is no next token. Keeps `X#rec.field` inside one form.
    fn is_form_dot(&self, i: usize) -> bool {
        debug_assert_eq!(self.kind_at(i), Some(RawToken::Dot));
        let dot_end = self.span_at(i).end;
        match self.tokens.get(i + 1) {
            Some(next) => next.span.start > dot_end,
            None => true,
        }
    }

    /// Advance past the current form's terminating dot, returning the
    /// form's end offset.
    fn skip_to_form_end(&mut self) -> u32 {
        while self.pos < self.tokens.len() {
            if self.tokens[self.pos].kind == RawToken::Dot && self.is_form_dot(self.pos) {
                let end = self.span_at(self.pos).end;
                self.pos += 1;
                return end;
            }
            self.pos += 1;
        }
        self.tokens.last().map_or(0, |t| t.span.end)
    }
}

/// Drop surrounding quote characters from a string or quoted-atom slice.
fn strip_quotes(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.collect()
}

/// Minimal backslash unescaping: `\X` becomes `X`. Enough for the quote
/// and backslash escapes that appear in atom and include-path literals.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
