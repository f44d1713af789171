pub mod lexer;
pub mod parser;
pub mod builtins;
pub mod numeric;
pub mod bits;
pub mod eval;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
