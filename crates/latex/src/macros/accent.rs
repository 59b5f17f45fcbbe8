use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};

/// Registers accents and the over/under decorations, all taking one
/// mandatory argument.
pub fn define_accent(ctx: &mut LatexContext) {
    ctx.define_macro(MacroDefSpec {
        names: &[
            r"\hat",
            r"\bar",
            r"\vec",
            r"\dot",
            r"\ddot",
            r"\tilde",
            r"\acute",
            r"\grave",
            r"\breve",
            r"\check",
            r"\widehat",
            r"\widetilde",
            r"\overline",
            r"\underline",
            r"\overbrace",
            r"\underbrace",
        ],
        args: &[ArgKind::Mandatory],
        handler: None,
    });
}
