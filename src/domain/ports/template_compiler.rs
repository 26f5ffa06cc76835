//! TemplateCompiler port
//!
//! The rebuild pipeline only needs "source text + name in, compiled form or
//! error out". Implementations must be pure: no state may carry over from one
//! call to the next.

use crate::compiler::CompileError;
use crate::domain::entities::CompiledTemplate;

pub trait TemplateCompiler {
    /// Compile `source` as the template called `name`.
    fn compile(&self, name: &str, source: &str) -> Result<CompiledTemplate, CompileError>;
}
