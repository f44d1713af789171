use numcast::eval::Evaluator;
use numcast::lexer;
use numcast::parser::Parser;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = if args.is_empty() {
        "bool(bits32(0x7F800001))".to_string()
    } else {
        args.join(" ")
    };

    let tokens = match lexer::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("Tokenizing failed: {:?}", e);
            return;
        }
    };

    let parser = Parser::new();
    let expr = match parser.parse(&tokens) {
        Ok(expr) => expr,
        Err(e) => {
            println!("Parse error: {}", e);
            return;
        }
    };

    let evaluator = Evaluator::new();
    match evaluator.eval(&expr) {
        Ok(value) => println!("{} => {}", expr, value),
        Err(e) => println!("Error: {}", e),
    }
}
