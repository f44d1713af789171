use std::fmt;
use std::error::Error;

use crate::bits;
use crate::builtins::Builtin;
use crate::numeric::Numeric;
use crate::parser::Expr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Numeric(Numeric),
    Boolean(bool)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Numeric(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug)]
pub struct EvalError {
    err: String
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl Error for EvalError {
    fn description(&self) -> &str {
        &self.err
    }
}

pub struct Evaluator {

}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator{}
    }

    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Literal(n) => Ok(Value::Numeric(*n)),
            Expr::Neg(inner) => {
                let value = self.eval_numeric(inner)?;
                Ok(Value::Numeric(-value))
            },
            Expr::Call(Builtin::Bool, inner) => {
                let value = self.eval_numeric(inner)?;
                Ok(Value::Boolean(value.to_bool()))
            },
            Expr::Call(Builtin::Bits32, inner) => {
                let bits = self.eval_bits(inner, 32)?;
                Ok(Value::Numeric(Numeric::F32(bits::reinterpret32(bits as u32))))
            },
            Expr::Call(Builtin::Bits64, inner) => {
                let bits = self.eval_bits(inner, 64)?;
                Ok(Value::Numeric(Numeric::F64(bits::reinterpret64(bits))))
            },
        }
    }

    fn eval_numeric(&self, expr: &Expr) -> Result<Numeric, EvalError> {
        match self.eval(expr)? {
            Value::Numeric(n) => Ok(n),
            Value::Boolean(b) => Err(EvalError{err: format!("Expected a number, got {}", b)}),
        }
    }

    //a bit pattern is a raw magnitude, so floats and negative integers are rejected
    fn eval_bits(&self, expr: &Expr, width: u32) -> Result<u64, EvalError> {
        let value = self.eval_numeric(expr)?;
        let bits = match value {
            Numeric::U8(b) => b as u64,
            Numeric::U32(b) => b as u64,
            Numeric::U64(b) => b,
            Numeric::I32(b) if b >= 0 => b as u64,
            Numeric::I64(b) if b >= 0 => b as u64,
            _ => return Err(EvalError{err: format!("Expected a non-negative integer bit pattern, got {}", value)}),
        };
        if width < 64 && (bits >> width) != 0 {
            return Err(EvalError{err: format!("Bit pattern {:#x} does not fit in {} bits", bits, width)});
        }
        Ok(bits)
    }
}
