//! Property tests for the Dust compiler.

use proptest::prelude::*;

use formpack::domain::ports::TemplateCompiler;
use formpack::DustCompiler;

fn template_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compiling never panics, and errors point inside the source.
    #[test]
    fn property_compile_never_panics(
        name in template_name(),
        source in "(?s).{0,200}",
    ) {
        match DustCompiler::new().compile(&name, &source) {
            Ok(compiled) => prop_assert_eq!(compiled.name(), name.as_str()),
            Err(err) => {
                prop_assert_eq!(&err.name, &name);
                prop_assert_eq!(&err.content, &source);
                prop_assert!(err.line >= 1);
                prop_assert!(err.line <= source.matches('\n').count() + 1);
                prop_assert!(err.column >= 1);
            }
        }
    }

    /// PROPERTY: tag-heavy input never panics either.
    #[test]
    fn property_compile_tag_soup_never_panics(
        source in "[{}#/?^:.<>!a-z \n]{0,120}",
    ) {
        let _ = DustCompiler::new().compile("soup", &source);
    }

    /// PROPERTY: text without braces always compiles into one registration.
    #[test]
    fn property_plain_text_compiles(
        name in template_name(),
        source in "[A-Za-z0-9 .,;<>/=\"'\\\\\n-]{0,120}",
    ) {
        let compiled = DustCompiler::new().compile(&name, &source).unwrap();
        let js = compiled.renderable();
        let register = format!("(function(){{dust.register(\"{name}\",body_0);");
        prop_assert!(js.starts_with(&register));
        prop_assert!(js.ends_with("return body_0;})();"), "js did not end with the IIFE trailer: {}", js);
        prop_assert_eq!(js.matches("dust.register(").count(), 1);
    }

    /// PROPERTY: the compiler is stateless.
    #[test]
    fn property_compile_is_deterministic(
        first in "(?s).{0,120}",
        second in "(?s).{0,120}",
    ) {
        let compiler = DustCompiler::new();
        let before = compiler.compile("t", &first);
        let _ = compiler.compile("t", &second);
        let after = compiler.compile("t", &first);

        match (before, after) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "result changed between identical calls"),
        }
    }
}
