use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Glyphs;

/// A reel symbol. The order carries no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Glyphs)]
#[repr(u8)]
pub enum Symbol {
    #[glyph('∙')]
    Blank = 0,
    #[glyph('-')]
    Bar1 = 1,
    #[glyph('=')]
    Bar2 = 2,
    #[glyph('≡')]
    Bar3 = 3,
    #[glyph('7')]
    Seven = 4,
    #[glyph('◆')]
    Diamond = 5,
}

impl Symbol {
    pub fn is_blank(self) -> bool {
        self == Symbol::Blank
    }
}

/// `{}` writes the name, `{:#}` the glyph.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.glyph())
        } else {
            f.write_str(self.name())
        }
    }
}
