use logos::Logos;

use crate::numeric::Numeric;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum TokenizingError {
    NumberParseError,
    #[default]
    Other,
}

impl From<std::num::ParseIntError> for TokenizingError {
    fn from(_: std::num::ParseIntError) -> Self {
        TokenizingError::NumberParseError
    }
}

impl From<std::num::ParseFloatError> for TokenizingError {
    fn from(_: std::num::ParseFloatError) -> Self {
        TokenizingError::NumberParseError
    }
}

impl From<std::num::TryFromIntError> for TokenizingError {
    fn from(_: std::num::TryFromIntError) -> Self {
        TokenizingError::NumberParseError
    }
}

impl From<std::convert::Infallible> for TokenizingError {
    fn from(_: std::convert::Infallible) -> Self {
        TokenizingError::Other
    }
}

/// Splits off a trailing width suffix (i32, u64, ...). The suffix starts at
/// the first 'i' or 'u', which cannot occur in decimal or hex digits.
fn int_literal(slice: &str) -> Result<Numeric, TokenizingError> {
    let (digits, suffix) = match slice.find(|c| c == 'i' || c == 'u') {
        Some(pos) => (&slice[..pos], Some(&slice[pos..])),
        None => (slice, None),
    };
    let digits = digits.replace('_', "");
    let value = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)?
    } else {
        digits.parse::<u64>()?
    };
    match suffix {
        Some("i32") => Ok(Numeric::I32(i32::try_from(value)?)),
        Some("i64") => Ok(Numeric::I64(i64::try_from(value)?)),
        Some("u8") => Ok(Numeric::U8(u8::try_from(value)?)),
        Some("u32") => Ok(Numeric::U32(u32::try_from(value)?)),
        Some("u64") => Ok(Numeric::U64(value)),
        Some(_) => Err(TokenizingError::NumberParseError),
        None => {
            //unsuffixed literals take the narrowest type that holds the magnitude
            if let Ok(v) = i32::try_from(value) {
                Ok(Numeric::I32(v))
            } else if let Ok(v) = u32::try_from(value) {
                Ok(Numeric::U32(v))
            } else if let Ok(v) = i64::try_from(value) {
                Ok(Numeric::I64(v))
            } else {
                Ok(Numeric::U64(value))
            }
        }
    }
}

fn float_literal(slice: &str) -> Result<Numeric, TokenizingError> {
    if let Some(digits) = slice.strip_suffix("f32") {
        Ok(Numeric::F32(digits.parse()?))
    } else if let Some(digits) = slice.strip_suffix("f64") {
        Ok(Numeric::F64(digits.parse()?))
    } else {
        Ok(Numeric::F64(slice.parse()?))
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(error = TokenizingError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("-")]
    Minus,
    #[regex(r"(0[xX][0-9a-fA-F][_0-9a-fA-F]*|0|[1-9][_0-9]*)(i32|i64|u8|u32|u64)?", |lex| { int_literal(lex.slice()) }, priority = 3)]
    Integer(Numeric),
    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?(f32|f64)?|[0-9]+[eE][+-]?[0-9]+(f32|f64)?|[0-9]+(f32|f64)", |lex| { float_literal(lex.slice()) }, priority = 2)]
    Float(Numeric),
    #[regex("[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().parse())]
    Symbol(String),
}

pub fn tokenize(prog: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, TokenizingError> {
    let lexer = Token::lexer(prog);
    let tokens: Result<Vec<(Token, std::ops::Range<usize>)>, TokenizingError> = lexer.spanned().map(|(token, span)| match token {
        Ok(t) => Ok((t, span)),
        Err(e) => Err(e)
    }).collect();
    tokens
}
