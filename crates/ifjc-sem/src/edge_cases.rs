//! Edge case tests for ifjc-sem.

#[cfg(test)]
mod tests {
    use crate::analyze;
    use ifjc_lex::Lexer;
    use ifjc_par::Parser;
    use ifjc_util::CompileError;

    fn analyze_source(source: &str) -> Result<(), CompileError> {
        let stream = Lexer::new(source).tokenize().expect("lexing failed");
        let program = Parser::new(stream).parse().expect("parsing failed");
        analyze(&program)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_program() {
        assert!(analyze_source("").is_ok());
        assert!(analyze_source("class C {\n}\n").is_ok());
    }

    #[test]
    fn test_edge_deeply_nested_shadowing() {
        let mut body = String::new();
        for _ in 0..16 {
            body.push_str("{\nvar x = 1\n");
        }
        for _ in 0..16 {
            body.push_str("}\n");
        }
        let source = format!("class C {{\nstatic main() {{\n{}}}\n}}\n", body);
        assert!(analyze_source(&source).is_ok());
    }

    #[test]
    fn test_edge_sibling_blocks_may_reuse_names() {
        let source = "class C {\nstatic main() {\n{\nvar x\n}\n{\nvar x\n}\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_variable_does_not_leak_from_loop_body() {
        let source =
            "class C {\nstatic main() {\nwhile (1 < 2) {\nvar i = 0\n}\ni = 1\n}\n}\n";
        let err = analyze_source(source).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_edge_parameter_shadows_outer_variable() {
        let source = "class C {\nstatic main() {\nvar a = 1\n}\nstatic f(a) {\nreturn a\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_functions_visible_across_classes() {
        let source =
            "class A {\nstatic helper() {\n}\n}\nclass B {\nstatic main() {\nhelper()\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_duplicate_functions_across_classes() {
        let source = "class A {\nstatic f() {\n}\n}\nclass B {\nstatic f() {\n}\n}\n";
        let err = analyze_source(source).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_edge_break_in_nested_if_inside_loop() {
        let source = "import \"ifj25\" for Ifj\nclass C {\nstatic main() {\nwhile (1 < 2) {\nif (1 < 2) {\nbreak\n}\n}\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_continue_after_loop_rejected() {
        let source = "class C {\nstatic main() {\nwhile (1 < 2) {\n}\ncontinue\n}\n}\n";
        let err = analyze_source(source).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn test_edge_global_variable_flag() {
        // Globals resolve like ordinary names; the `__` prefix only
        // selects the target frame during emission.
        let source = "import \"ifj25\" for Ifj\nclass C {\nstatic main() {\nvar __g = 1\nIfj.write(__g)\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_call_argument_use_before_declare() {
        let source = "import \"ifj25\" for Ifj\nclass C {\nstatic main() {\nIfj.write(ghost)\n}\n}\n";
        let err = analyze_source(source).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_edge_setter_parameter_visible_in_body() {
        let source = "import \"ifj25\" for Ifj\nclass C {\nstatic v = (value) {\nIfj.write(value)\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_edge_zero_argument_call_to_getter_member() {
        let source = "class C {\nstatic v {\nreturn 1\n}\nstatic main() {\nv()\n}\n}\n";
        assert!(analyze_source(source).is_ok());
    }
}
