//! Edge case tests for ifjc-lex.

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let mut stream = Lexer::new(source).tokenize().expect("lexing failed");
        let mut kinds = vec![stream.first().kind.clone()];
        while !kinds.last().unwrap().is_eof() {
            kinds.push(stream.next().kind.clone());
        }
        kinds.pop();
        kinds
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \t  ").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        assert_eq!(lex_all(&name), vec![TokenKind::Ident(name)]);
    }

    #[test]
    fn test_edge_eol_collapse_large_run() {
        let source = "a".to_string() + &"\n".repeat(500) + "b";
        assert_eq!(
            lex_all(&source),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Eol,
                TokenKind::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_edge_comment_neutrality() {
        // Prepending a comment does not change the tokens after it
        // (a line comment adds its own EOL).
        let program = "class Main { }";
        let base = lex_all(program);

        let with_block = lex_all(&format!("/* any /* nested */ content */{}", program));
        assert_eq!(with_block, base);

        let with_line = lex_all(&format!("// anything\n{}", program));
        let mut expected = vec![TokenKind::Eol];
        expected.extend(base.clone());
        assert_eq!(with_line, expected);
    }

    #[test]
    fn test_edge_deeply_nested_block_comment() {
        let mut source = String::from("x ");
        for _ in 0..64 {
            source.push_str("/*");
        }
        source.push_str("core");
        for _ in 0..64 {
            source.push_str("*/");
        }
        source.push_str(" y");
        assert_eq!(
            lex_all(&source),
            vec![TokenKind::Ident("x".into()), TokenKind::Ident("y".into())]
        );
    }

    #[test]
    fn test_edge_import_line() {
        assert_eq!(
            lex_all("import \"ifj25\" for Ifj"),
            vec![
                TokenKind::Import,
                TokenKind::Str("ifj25".into()),
                TokenKind::For,
                TokenKind::Ident("Ifj".into()),
            ]
        );
    }

    #[test]
    fn test_edge_builtin_call_shape() {
        assert_eq!(
            lex_all("Ifj.write(x)"),
            vec![
                TokenKind::Ident("Ifj".into()),
                TokenKind::Dot,
                TokenKind::Ident("write".into()),
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_expression_tokens() {
        assert_eq!(
            lex_all("1+2*3"),
            vec![
                TokenKind::Int(1),
                TokenKind::Plus,
                TokenKind::Int(2),
                TokenKind::Star,
                TokenKind::Int(3),
            ]
        );
    }

    #[test]
    fn test_edge_adjacent_dots_and_floats() {
        assert_eq!(
            lex_all("1.5..2.5"),
            vec![
                TokenKind::Float(1.5),
                TokenKind::DotDot,
                TokenKind::Float(2.5),
            ]
        );
    }

    #[test]
    fn test_edge_string_then_eol() {
        assert_eq!(
            lex_all("\"hi\"\n"),
            vec![TokenKind::Str("hi".into()), TokenKind::Eol]
        );
    }

    #[test]
    fn test_edge_global_in_expression() {
        assert_eq!(
            lex_all("__total = __total + 1"),
            vec![
                TokenKind::GlobalIdent("__total".into()),
                TokenKind::Assign,
                TokenKind::GlobalIdent("__total".into()),
                TokenKind::Plus,
                TokenKind::Int(1),
            ]
        );
    }
}
