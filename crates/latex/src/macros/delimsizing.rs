use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};

/// Registers delimiter sizing commands, each followed by one delimiter
/// token: `\left(`, `\bigl\{`, ...
pub fn define_delimsizing(ctx: &mut LatexContext) {
    ctx.define_macro(MacroDefSpec {
        names: &[
            r"\left", r"\right", r"\middle", r"\big", r"\Big", r"\bigg", r"\Bigg", r"\bigl",
            r"\Bigl", r"\biggl", r"\Biggl", r"\bigr", r"\Bigr", r"\biggr", r"\Biggr",
        ],
        args: &[ArgKind::Node],
        handler: None,
    });
}
