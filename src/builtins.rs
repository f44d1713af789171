use enum_display::EnumDisplay;


#[derive(Clone, Copy, Debug, EnumDisplay, PartialEq)]
pub enum Builtin {
    Bool,
    Bits32,
    Bits64,
}
