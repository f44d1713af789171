use std::fmt;
use std::ops::Range;
use case_insensitive_hashmap::CaseInsensitiveHashMap;

use crate::builtins::Builtin;
use crate::lexer::Token;
use crate::numeric::Numeric;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Numeric),
    Neg(Box<Expr>),
    Call(Builtin, Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Neg(e) => write!(f, "-{}", e),
            Expr::Call(b, e) => write!(f, "{}({})", b, e),
        }
    }
}

#[derive(Debug)]
pub struct ParseError {
    error: String
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

pub struct Parser {
    builtins: CaseInsensitiveHashMap<Builtin>,
    constants: CaseInsensitiveHashMap<Numeric>
}

impl Parser {
    pub fn new() -> Parser {
        let mut parser = Parser{builtins: CaseInsensitiveHashMap::new(), constants: CaseInsensitiveHashMap::new()};
        parser.builtins.insert("bool", Builtin::Bool);
        parser.builtins.insert("bits32", Builtin::Bits32);
        parser.builtins.insert("bits64", Builtin::Bits64);
        parser.constants.insert("nan", Numeric::F64(f64::NAN));
        parser.constants.insert("inf", Numeric::F64(f64::INFINITY));
        parser.constants.insert("infinity", Numeric::F64(f64::INFINITY));
        parser
    }

    pub fn parse(&self, tokens: &[(Token, Range<usize>)]) -> Result<Expr, ParseError> {
        let (expr, consumed) = self.parse_single(tokens)?;
        if consumed != tokens.len() {
            let span = &tokens[consumed].1;
            return Err(ParseError{error: format!("Unexpected input at {}..{}", span.start, span.end)});
        }
        Ok(expr)
    }

    fn parse_single(&self, tokens: &[(Token, Range<usize>)]) -> Result<(Expr, usize), ParseError> {
        if tokens.is_empty() {
            return Err(ParseError{error: "Unexpected end of input".to_string()});
        }
        let (token, span) = &tokens[0];

        match token {
            Token::Integer(n) => Ok((Expr::Literal(*n), 1)),
            Token::Float(n) => Ok((Expr::Literal(*n), 1)),
            Token::Minus => {
                let (expr, consumed) = self.parse_single(&tokens[1..])?;
                Ok((Expr::Neg(Box::new(expr)), consumed + 1))
            },
            Token::Symbol(s) => {
                if let Some(value) = self.constants.get(s.as_str()) {
                    return Ok((Expr::Literal(*value), 1));
                }
                let it = self.builtins.get(s.as_str());
                let Some(&builtin) = it else {
                    return Err(ParseError{error: format!("Unknown identifier: {}", s)});
                };
                if !matches!(tokens.get(1), Some((Token::LParen, _))) {
                    return Err(ParseError{error: format!("Expected ( after {}", s)});
                }
                let (arg, consumed) = self.parse_single(&tokens[2..])?;
                match tokens.get(2 + consumed) {
                    Some((Token::RParen, _)) => Ok((Expr::Call(builtin, Box::new(arg)), consumed + 3)),
                    _ => Err(ParseError{error: format!("Expected ) to close {}", s)})
                }
            },
            Token::LParen => {
                let (expr, consumed) = self.parse_single(&tokens[1..])?;
                match tokens.get(1 + consumed) {
                    Some((Token::RParen, _)) => Ok((expr, consumed + 2)),
                    _ => Err(ParseError{error: "Expected )".to_string()})
                }
            },
            Token::RParen => Err(ParseError{error: format!("Unexpected ) at {}..{}", span.start, span.end)}),
        }
    }
}
