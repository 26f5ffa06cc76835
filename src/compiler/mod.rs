//! Dust template compiler
//!
//! Turns `.form` template source into a JavaScript snippet that registers the
//! template with the Dust runtime under its name. The compiler holds no state
//! between calls, so compiling one file can never affect another.
//!
//! ```
//! use formpack::compiler::DustCompiler;
//! use formpack::domain::ports::TemplateCompiler;
//!
//! let compiled = DustCompiler::new().compile("hello", "Hello {name}!").unwrap();
//! assert!(compiled.renderable().starts_with("(function(){dust.register(\"hello\""));
//! ```

mod ast;
mod codegen;
mod error;
mod parser;


pub use error::CompileError;

use crate::domain::entities::CompiledTemplate;
use crate::domain::ports::TemplateCompiler;

use codegen::Codegen;
use parser::Parser;

/// Stateless Dust compiler
#[derive(Debug, Clone, Copy, Default)]
pub struct DustCompiler;

impl DustCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCompiler for DustCompiler {
    fn compile(&self, name: &str, source: &str) -> Result<CompiledTemplate, CompileError> {
        if name.trim().is_empty() {
            return Err(CompileError::new(
                name,
                source,
                "template name must not be empty",
                0,
                0,
            ));
        }

        let nodes = Parser::new(name, source).parse()?;
        Ok(CompiledTemplate::new(name, Codegen::generate(name, &nodes)))
    }
}
