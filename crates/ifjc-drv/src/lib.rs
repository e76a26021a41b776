//! ifjc-drv - Compiler driver.
//!
//! The driver is deliberately thin: it reads IFJ25 source from stdin,
//! runs the pipeline (lex, parse, semantics, emit), and either writes
//! the complete IFJcode25 program to stdout or a single-line
//! `line:col: message` diagnostic to stderr. The process exit code is
//! the one mapped from the error kind; success is 0.
//!
//! Output is flushed only after a successful compilation, so a failing
//! run produces no partial program (not even the header line). There
//! are no command-line flags and no environment variables.

use std::io::{self, Read, Write};

use anyhow::Context;
use ifjc_util::{CompileError, ErrorKind, Span};

/// Runs the whole pipeline over a source string.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let stream = ifjc_lex::Lexer::new(source).tokenize()?;
    let program = ifjc_par::Parser::new(stream).parse()?;
    ifjc_sem::analyze(&program)?;
    ifjc_gen::generate(&program)
}

/// Driver entry point; returns the process exit code.
pub fn run() -> i32 {
    match try_run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ErrorKind::Internal.exit_code()
        }
    }
}

fn try_run() -> anyhow::Result<i32> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("failed to read source from stdin")?;

    // The lexer works on &str; a byte sequence that is not valid text
    // cannot be IFJ25 source, so it reports as a lexical error with the
    // position of the first offending byte.
    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            let diag = invalid_byte_error(err.as_bytes(), err.utf8_error().valid_up_to());
            eprintln!("{}", diag);
            return Ok(diag.exit_code());
        }
    };

    match compile(&source) {
        Ok(program) => {
            io::stdout()
                .lock()
                .write_all(program.as_bytes())
                .context("failed to write output")?;
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(err.exit_code())
        }
    }
}

fn invalid_byte_error(bytes: &[u8], at: usize) -> CompileError {
    let mut line = 1u32;
    let mut column = 1u32;
    for &b in &bytes[..at] {
        if b == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    CompileError::lexical(
        "source contains an invalid byte sequence",
        Span::new(at, at + 1, line, column),
    )
}
