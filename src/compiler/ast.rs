//! Syntax tree for the Dust template subset

/// A context lookup such as `name`, `a.b.c`, `.` or `.field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Lookup starts at the current context head (leading `.`)
    pub current: bool,
    pub segments: Vec<String>,
}

impl Path {
    /// A plain single-key lookup (`{name}`), compiled to `ctx.get(..)`.
    pub fn is_simple_key(&self) -> bool {
        !self.current && self.segments.len() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `{#key}`
    Section,
    /// `{?key}`
    Exists,
    /// `{^key}`
    NotExists,
    /// `{@helper}`
    Helper,
    /// `{+block}`
    Block,
    /// `{<inline}`
    InlinePartial,
}

impl SectionKind {
    pub fn from_sigil(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Section),
            '?' => Some(Self::Exists),
            '^' => Some(Self::NotExists),
            '@' => Some(Self::Helper),
            '+' => Some(Self::Block),
            '<' => Some(Self::InlinePartial),
            _ => None,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Self::Section => '#',
            Self::Exists => '?',
            Self::NotExists => '^',
            Self::Helper => '@',
            Self::Block => '+',
            Self::InlinePartial => '<',
        }
    }

    /// Helpers, blocks and inline partials take a bare name, not a context path.
    pub fn takes_name(self) -> bool {
        matches!(self, Self::Helper | Self::Block | Self::InlinePartial)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Path(Path),
    Number(String),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub key: String,
    pub value: ParamValue,
}

/// Bodies of a section: the main block plus named bodies like `{:else}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bodies {
    pub block: Option<Vec<Node>>,
    pub named: Vec<(String, Vec<Node>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub key: Path,
    pub context: Option<Path>,
    pub params: Vec<Param>,
    pub bodies: Bodies,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal output text (specials are folded in here)
    Buffer(String),
    Reference {
        path: Path,
        filters: Vec<String>,
    },
    Section(Section),
    Partial {
        name: String,
        context: Option<Path>,
        params: Vec<Param>,
    },
}
