//! Recursive-descent parser for the Dust template subset
//!
//! Text outside tags is kept verbatim except that a line break and the
//! indentation that follows it are dropped (Dust whitespace compression).
//! A `{` that cannot start a tag is literal text.

use super::ast::{Bodies, Node, Param, ParamValue, Path, Section, SectionKind};
use super::error::CompileError;

/// Deepest allowed section nesting. Parsing and codegen both recurse per
/// level, so this bounds stack use for hostile input.
pub(crate) const MAX_NESTING: usize = 256;

/// How a run of nodes ended.
enum Terminator {
    Eof,
    Close { key: String, at: usize },
    Body { name: String, at: usize },
}

enum Tag {
    Node(Node),
    /// Comment: produces no output
    Nothing,
    /// Not a tag after all; emit `{` as text
    Literal,
    Close(String),
    Body(String),
}

pub(crate) struct Parser<'a> {
    name: &'a str,
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(name: &'a str, src: &'a str) -> Self {
        Self {
            name,
            src,
            pos: 0,
            depth: 0,
        }
    }

    pub(crate) fn parse(mut self) -> Result<Vec<Node>, CompileError> {
        let (nodes, term) = self.parse_nodes()?;
        match term {
            Terminator::Eof => Ok(nodes),
            Terminator::Close { key, at } => Err(self.error_at(
                at,
                format!("unexpected closing tag '{{/{key}}}' with no open section"),
            )),
            Terminator::Body { name, at } => {
                Err(self.error_at(at, format!("'{{:{name}}}' outside of a section")))
            }
        }
    }

    fn parse_nodes(&mut self) -> Result<(Vec<Node>, Terminator), CompileError> {
        let mut nodes = Vec::new();
        loop {
            match self.peek() {
                None => return Ok((nodes, Terminator::Eof)),
                Some('{') => {
                    let start = self.pos;
                    match self.parse_tag(start)? {
                        Tag::Node(Node::Buffer(text)) => push_text(&mut nodes, &text),
                        Tag::Node(node) => nodes.push(node),
                        Tag::Nothing => {}
                        Tag::Literal => {
                            self.pos = start + 1;
                            push_text(&mut nodes, "{");
                        }
                        Tag::Close(key) => return Ok((nodes, Terminator::Close { key, at: start })),
                        Tag::Body(name) => return Ok((nodes, Terminator::Body { name, at: start })),
                    }
                }
                Some(_) => {
                    let text = self.read_buffer();
                    push_text(&mut nodes, &text);
                }
            }
        }
    }

    fn read_buffer(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            match c {
                '{' => break,
                '\r' | '\n' => {
                    self.bump();
                    if c == '\r' && self.peek() == Some('\n') {
                        self.bump();
                    }
                    while self.peek().is_some_and(is_inline_ws) {
                        self.bump();
                    }
                }
                _ => {
                    out.push(c);
                    self.bump();
                }
            }
        }
        out
    }

    fn parse_tag(&mut self, start: usize) -> Result<Tag, CompileError> {
        self.bump(); // '{'
        let Some(c) = self.peek() else {
            return Ok(Tag::Literal);
        };

        if let Some(kind) = SectionKind::from_sigil(c) {
            self.bump();
            return self.parse_section(kind, start).map(Tag::Node);
        }

        match c {
            '!' => {
                let body_start = self.pos + 1;
                match self.src[body_start..].find("!}") {
                    Some(end) => {
                        self.pos = body_start + end + 2;
                        Ok(Tag::Nothing)
                    }
                    None => Err(self.error_at(start, "unterminated comment".to_string())),
                }
            }
            '~' => {
                self.bump();
                let key = self.read_ident();
                if !self.eat("}") {
                    return Err(self.unterminated_or_unexpected(start, "special"));
                }
                let key = key.unwrap_or_default();
                let text = match key.as_str() {
                    "n" => "\n",
                    "s" => " ",
                    "r" => "\r",
                    "lb" => "{",
                    "rb" => "}",
                    _ => return Err(self.error_at(start, format!("unknown special '{{~{key}}}'"))),
                };
                Ok(Tag::Node(Node::Buffer(text.to_string())))
            }
            '/' => {
                self.bump();
                let key = self.read_while(is_path_char);
                if key.is_empty() || !self.eat("}") {
                    return Err(self.unterminated_or_unexpected(start, "closing"));
                }
                Ok(Tag::Close(key))
            }
            ':' => {
                self.bump();
                let name = self.read_ident();
                match name {
                    Some(name) if self.eat("}") => Ok(Tag::Body(name)),
                    _ => Err(self.unterminated_or_unexpected(start, "body")),
                }
            }
            '>' => {
                self.bump();
                self.parse_partial(start).map(Tag::Node)
            }
            c if is_key_start(c) || c == '.' => Ok(match self.try_reference() {
                Some(node) => Tag::Node(node),
                None => Tag::Literal,
            }),
            _ => Ok(Tag::Literal),
        }
    }

    fn try_reference(&mut self) -> Option<Node> {
        let path = self.parse_path()?;
        let mut filters = Vec::new();
        while self.eat("|") {
            filters.push(self.read_ident()?);
        }
        if !self.eat("}") {
            return None;
        }
        Some(Node::Reference { path, filters })
    }

    fn parse_section(&mut self, kind: SectionKind, start: usize) -> Result<Node, CompileError> {
        let key_start = self.pos;
        let key = self.parse_path().ok_or_else(|| {
            self.error_at(start, format!("expected a key after '{{{}'", kind.sigil()))
        })?;
        let key_text = self.src[key_start..self.pos].to_string();
        if kind.takes_name() && !key.is_simple_key() {
            return Err(self.error_at(
                start,
                format!("'{{{}{key_text}}}' expects a plain name", kind.sigil()),
            ));
        }

        let context = self.parse_context(start)?;
        let params = self.parse_params(start)?;
        self.skip_ws();

        let bodies = if self.eat("/}") {
            Bodies::default()
        } else if self.eat("}") {
            if self.depth == MAX_NESTING {
                return Err(self.error_at(start, "sections nested too deeply".to_string()));
            }
            self.depth += 1;
            let bodies = self.parse_bodies(&key_text, start)?;
            self.depth -= 1;
            bodies
        } else {
            return Err(self.unterminated_or_unexpected(start, "section"));
        };

        Ok(Node::Section(Section {
            kind,
            key,
            context,
            params,
            bodies,
        }))
    }

    fn parse_bodies(&mut self, key: &str, start: usize) -> Result<Bodies, CompileError> {
        let mut bodies = Bodies::default();
        let mut current: Option<String> = None;
        loop {
            let (nodes, term) = self.parse_nodes()?;
            match current.take() {
                None => bodies.block = Some(nodes),
                Some(name) => bodies.named.push((name, nodes)),
            }
            match term {
                Terminator::Eof => {
                    return Err(self.error_at(start, format!("unclosed section '{key}'")));
                }
                Terminator::Close { key: closing, at } => {
                    if closing == key {
                        return Ok(bodies);
                    }
                    return Err(self.error_at(
                        at,
                        format!(
                            "mismatched closing tag: expected '{{/{key}}}', found '{{/{closing}}}'"
                        ),
                    ));
                }
                Terminator::Body { name, at } => {
                    if bodies.named.iter().any(|(n, _)| *n == name) {
                        return Err(self.error_at(
                            at,
                            format!("duplicate '{{:{name}}}' body in section '{key}'"),
                        ));
                    }
                    current = Some(name);
                }
            }
        }
    }

    fn parse_partial(&mut self, start: usize) -> Result<Node, CompileError> {
        let name = if self.peek() == Some('"') {
            self.read_quoted(start)?
        } else {
            let mut name = self.read_while(is_partial_name_char);
            // `{>name/}`: the trailing slash belongs to the tag
            if name.ends_with('/') && self.peek() == Some('}') {
                name.pop();
                self.pos -= 1;
            }
            name
        };
        if name.is_empty() {
            return Err(self.error_at(start, "expected a partial name after '{>'".to_string()));
        }

        let context = self.parse_context(start)?;
        let params = self.parse_params(start)?;
        self.skip_ws();

        if self.eat("/}") {
            Ok(Node::Partial {
                name,
                context,
                params,
            })
        } else if self.peek() == Some('}') {
            Err(self.error_at(
                start,
                format!("partial '{name}' must be self-closed with '/}}'"),
            ))
        } else {
            Err(self.unterminated_or_unexpected(start, "partial"))
        }
    }

    fn parse_context(&mut self, start: usize) -> Result<Option<Path>, CompileError> {
        if !self.eat(":") {
            return Ok(None);
        }
        self.parse_path()
            .map(Some)
            .ok_or_else(|| self.error_at(start, "expected a context path after ':'".to_string()))
    }

    fn parse_params(&mut self, start: usize) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();
        loop {
            let save = self.pos;
            if self.skip_ws() == 0 || !self.peek().is_some_and(is_key_start) {
                self.pos = save;
                return Ok(params);
            }
            let key = self.read_ident().unwrap_or_default();
            if !self.eat("=") {
                return Err(self.error_at(
                    save,
                    format!("invalid parameter '{key}': expected '='"),
                ));
            }
            let value = match self.peek() {
                Some('"') => ParamValue::Literal(self.read_quoted(start)?),
                Some(c) if c.is_ascii_digit() || c == '-' => {
                    let raw = self.read_while(|c| c.is_ascii_digit() || c == '.' || c == '-');
                    if raw.parse::<f64>().is_err() {
                        return Err(self.error_at(
                            save,
                            format!("invalid number '{raw}' for parameter '{key}'"),
                        ));
                    }
                    ParamValue::Number(raw)
                }
                Some(c) if is_key_start(c) || c == '.' => match self.parse_path() {
                    Some(path) => ParamValue::Path(path),
                    None => {
                        return Err(self.error_at(
                            save,
                            format!("invalid value for parameter '{key}'"),
                        ))
                    }
                },
                _ => {
                    return Err(self.error_at(
                        save,
                        format!("invalid value for parameter '{key}'"),
                    ))
                }
            };
            params.push(Param { key, value });
        }
    }

    fn parse_path(&mut self) -> Option<Path> {
        let save = self.pos;
        let mut current = false;
        let mut segments = Vec::new();
        if self.eat(".") {
            current = true;
            if !self.peek().is_some_and(is_key_start) {
                return Some(Path { current, segments });
            }
        }
        loop {
            match self.read_ident() {
                Some(seg) => segments.push(seg),
                None => {
                    self.pos = save;
                    return None;
                }
            }
            if !self.eat(".") {
                return Some(Path { current, segments });
            }
        }
    }

    /// Reads a double-quoted string starting at the opening quote.
    fn read_quoted(&mut self, start: usize) -> Result<String, CompileError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error_at(start, "unterminated string".to_string())),
                Some('"') => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    self.bump();
                    if let Some(c) = self.peek() {
                        out.push(c);
                        self.bump();
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
    }

    fn read_ident(&mut self) -> Option<String> {
        if !self.peek().is_some_and(is_key_start) {
            return None;
        }
        Some(self.read_while(is_key_char))
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let begin = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        self.src[begin..self.pos].to_string()
    }

    /// Skips spaces, tabs and line breaks inside a tag; returns bytes skipped.
    fn skip_ws(&mut self) -> usize {
        let begin = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos - begin
    }

    fn unterminated_or_unexpected(&self, start: usize, what: &str) -> CompileError {
        match self.peek() {
            None => self.error_at(start, format!("unterminated {what} tag")),
            Some(c) => self.error_at(
                self.pos,
                format!("unexpected character '{c}' in {what} tag"),
            ),
        }
    }

    fn error_at(&self, offset: usize, message: String) -> CompileError {
        CompileError::at_offset(self.name, self.src, offset, message)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.src[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Buffer(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Buffer(text.to_string()));
    }
}

fn is_key_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '-'
}

fn is_path_char(c: char) -> bool {
    is_key_char(c) || c == '.'
}

fn is_partial_name_char(c: char) -> bool {
    is_path_char(c) || c == '/'
}

fn is_inline_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}' | '\u{A0}' | '\u{FEFF}')
}
