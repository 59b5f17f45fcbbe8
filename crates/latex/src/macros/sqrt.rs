use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};

/// Registers `\sqrt[n]{x}`.
pub fn define_sqrt(ctx: &mut LatexContext) {
    ctx.define_macro(MacroDefSpec {
        names: &[r"\sqrt"],
        args: &[ArgKind::Optional, ArgKind::Mandatory],
        handler: None,
    });
}
