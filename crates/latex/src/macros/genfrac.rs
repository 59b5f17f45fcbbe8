use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};

/// Registers fractions and the other two-argument constructions.
pub fn define_genfrac(ctx: &mut LatexContext) {
    ctx.define_macro(MacroDefSpec {
        names: &[
            r"\frac",
            r"\dfrac",
            r"\tfrac",
            r"\binom",
            r"\stackrel",
            r"\overset",
            r"\underset",
            r"\textcolor",
        ],
        args: &[ArgKind::Mandatory, ArgKind::Mandatory],
        handler: None,
    });
}
