//! Output buffer and operand formatting for IFJcode25.
//!
//! The target is line-oriented: one instruction per line, accumulated
//! in a single buffer and flushed once by the driver, so nothing is
//! written on a failed compilation.

use ifjc_par::ast::Literal;

/// Accumulating writer for the emitted program.
#[derive(Debug, Default)]
pub struct AsmWriter {
    buf: String,
}

impl AsmWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one instruction line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Consumes the writer and returns the accumulated program text.
    pub fn into_output(self) -> String {
        self.buf
    }

    /// The accumulated text so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Operand prefixes that pass through the variable formatter unchanged.
const RESERVED_PREFIXES: [&str; 7] = [
    "int@", "float@", "string@", "bool@", "nil@", "GF@", "LF@",
];

/// Formats a variable operand with its frame prefix.
///
/// Names beginning with `__` live on the global frame (`GF@`), all
/// others on the current local frame (`LF@`). A name that already
/// carries a reserved prefix is emitted unchanged.
pub fn format_var(name: &str) -> String {
    if RESERVED_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        name.to_string()
    } else if name.starts_with("__") {
        format!("GF@{}", name)
    } else {
        format!("LF@{}", name)
    }
}

/// Formats a literal operand.
pub fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::Int(value) => format!("int@{}", value),
        Literal::Float(value) => format!("float@{}", format_hex_float(*value)),
        Literal::Str(value) => format!("string@{}", escape_string(value)),
        Literal::Bool(value) => format!("bool@{}", value),
        Literal::Null => "nil@nil".to_string(),
    }
}

/// Escapes a string payload for a `string@` operand.
///
/// Every byte in [0, 32], `#` (35), and `\` (92) becomes `\DDD` with
/// three zero-padded decimal digits. Bytes above 126 are escaped the
/// same way so the output stream stays pure ASCII.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        // The scanner only produces ASCII and \xHH bytes, so every
        // char fits one escaped byte value.
        let code = ch as u32;
        if code <= 32 || code == 35 || code == 92 || code > 126 {
            out.push_str(&format!("\\{:03}", code));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Formats a finite double in hexadecimal floating-point notation, the
/// form C's `%a` produces (`0x1.8p+1` for 3.0).
pub fn format_hex_float(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0x0p+0".to_string()
        } else {
            "0x0p+0".to_string()
        };
    }

    let bits = value.to_bits();
    let sign = if bits >> 63 == 1 { "-" } else { "" };
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let mantissa = bits & 0x000f_ffff_ffff_ffff;

    // Subnormals keep a zero integer part and the minimum exponent.
    let (lead, exponent) = if exp_bits == 0 {
        ("0", -1022)
    } else {
        ("1", exp_bits - 1023)
    };

    let mut digits = format!("{:013x}", mantissa);
    while digits.ends_with('0') {
        digits.pop();
    }

    if digits.is_empty() {
        format!("{}0x{}p{:+}", sign, lead, exponent)
    } else {
        format!("{}0x{}.{}p{:+}", sign, lead, digits, exponent)
    }
}
