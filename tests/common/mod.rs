use numcast::lexer;
use numcast::parser::Parser;
use numcast::eval::{Evaluator, Value};
use numcast::numeric::Numeric;

#[allow(dead_code)]
pub fn eval_value(prog: &str) -> Value {
    let tokens = lexer::tokenize(prog).expect("Tokenizing failed");
    let parser = Parser::new();
    let expr = parser.parse(&tokens).expect("Parsing failed");
    let evaluator = Evaluator::new();
    evaluator.eval(&expr).expect("Evaluation failed")
}

#[allow(dead_code)]
pub fn eval_numeric(prog: &str) -> Numeric {
    match eval_value(prog) {
        Value::Numeric(n) => n,
        Value::Boolean(b) => panic!("Expected a number, got {}", b)
    }
}

#[allow(dead_code)]
pub fn eval_bool(prog: &str) -> bool {
    match eval_value(prog) {
        Value::Boolean(b) => b,
        Value::Numeric(n) => panic!("Expected a boolean, got {}", n)
    }
}

#[allow(dead_code)]
pub fn eval_fails(prog: &str) -> bool {
    let Ok(tokens) = lexer::tokenize(prog) else {
        return true;
    };
    let parser = Parser::new();
    let Ok(expr) = parser.parse(&tokens) else {
        return true;
    };
    let evaluator = Evaluator::new();
    evaluator.eval(&expr).is_err()
}
