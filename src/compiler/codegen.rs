//! JavaScript code generation
//!
//! Emits the classic Dust registration form: one `body_N` function per
//! template body, chained `chk` calls, and a `dust.register` call keyed by
//! the template name.

use super::ast::{Bodies, Node, Param, ParamValue, Path, Section, SectionKind};

#[derive(Default)]
pub(crate) struct Codegen {
    bodies: Vec<String>,
    blocks: Vec<(String, usize)>,
}

impl Codegen {
    pub(crate) fn generate(name: &str, nodes: &[Node]) -> String {
        let mut gen = Codegen::default();
        gen.compile_body(nodes);

        let mut out = String::new();
        out.push_str("(function(){dust.register(");
        out.push_str(&js_string(name));
        out.push_str(",body_0);");
        if !gen.blocks.is_empty() {
            out.push_str("var blocks={");
            let entries: Vec<String> = gen
                .blocks
                .iter()
                .map(|(block, idx)| format!("{}:body_{idx}", js_string(block)))
                .collect();
            out.push_str(&entries.join(","));
            out.push_str("};");
        }
        for body in &gen.bodies {
            out.push_str(body);
        }
        out.push_str("return body_0;})();");
        out
    }

    /// Compiles a body and returns its index. Index 0 is the template root.
    fn compile_body(&mut self, nodes: &[Node]) -> usize {
        let index = self.bodies.len();
        self.bodies.push(String::new());

        let chain: String = nodes.iter().map(|node| self.compile_node(node)).collect();

        // Inline partials are only known once the whole tree has been walked.
        let prologue = if index == 0 && !self.blocks.is_empty() {
            "ctx=ctx.shiftBlocks(blocks);"
        } else {
            ""
        };
        self.bodies[index] =
            format!("function body_{index}(chk,ctx){{{prologue}return chk{chain};}}");
        index
    }

    fn compile_node(&mut self, node: &Node) -> String {
        match node {
            Node::Buffer(text) => format!(".write({})", js_string(text)),
            Node::Reference { path, filters } => {
                let mut out = format!(".reference({},ctx,\"h\"", compile_path(path));
                if !filters.is_empty() {
                    let list: Vec<String> = filters.iter().map(|f| js_string(f)).collect();
                    out.push_str(&format!(",[{}]", list.join(",")));
                }
                out.push(')');
                out
            }
            Node::Section(section) => self.compile_section(section),
            Node::Partial {
                name,
                context,
                params,
            } => format!(
                ".partial({},{},{})",
                js_string(name),
                compile_context(context.as_ref()),
                compile_params(params)
            ),
        }
    }

    fn compile_section(&mut self, section: &Section) -> String {
        let name = section.key.segments.first().cloned().unwrap_or_default();
        if section.kind == SectionKind::InlinePartial {
            let body = section.bodies.block.as_deref().unwrap_or(&[]);
            let index = self.compile_body(body);
            self.blocks.push((name, index));
            return String::new();
        }

        let bodies = self.compile_bodies(&section.bodies);
        let ctx = compile_context(section.context.as_ref());
        let params = compile_params(&section.params);
        match section.kind {
            SectionKind::Section => format!(
                ".section({},{ctx},{bodies},{params})",
                compile_path(&section.key)
            ),
            SectionKind::Exists => format!(
                ".exists({},{ctx},{bodies},{params})",
                compile_path(&section.key)
            ),
            SectionKind::NotExists => format!(
                ".notexists({},{ctx},{bodies},{params})",
                compile_path(&section.key)
            ),
            SectionKind::Helper => {
                format!(".helper({},{ctx},{bodies},{params})", js_string(&name))
            }
            SectionKind::Block => format!(
                ".block(ctx.getBlock({}),{ctx},{bodies},{params})",
                js_string(&name)
            ),
            SectionKind::InlinePartial => String::new(),
        }
    }

    fn compile_bodies(&mut self, bodies: &Bodies) -> String {
        let mut entries = Vec::new();
        for (name, nodes) in &bodies.named {
            let index = self.compile_body(nodes);
            entries.push(format!("{}:body_{index}", js_string(name)));
        }
        if let Some(block) = &bodies.block {
            let index = self.compile_body(block);
            entries.push(format!("\"block\":body_{index}"));
        }
        format!("{{{}}}", entries.join(","))
    }
}

fn compile_path(path: &Path) -> String {
    if path.is_simple_key() {
        return format!("ctx.get({})", js_string(&path.segments[0]));
    }
    let segments: Vec<String> = path.segments.iter().map(|s| js_string(s)).collect();
    format!("ctx.getPath({},[{}])", path.current, segments.join(","))
}

fn compile_context(context: Option<&Path>) -> String {
    match context {
        Some(path) => format!("ctx.rebase({})", compile_path(path)),
        None => "ctx".to_string(),
    }
}

fn compile_params(params: &[Param]) -> String {
    if params.is_empty() {
        return "null".to_string();
    }
    let entries: Vec<String> = params
        .iter()
        .map(|p| {
            let value = match &p.value {
                ParamValue::Path(path) => compile_path(path),
                ParamValue::Number(n) => n.clone(),
                ParamValue::Literal(s) => js_string(s),
            };
            format!("{}:{value}", js_string(&p.key))
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// Double-quoted JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
