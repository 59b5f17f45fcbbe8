use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};
use crate::macros::parse_starred;

/// Registers fixed spaces (`\,`, `\quad`, …) and the explicit
/// `\hspace{…}` / `\vspace{…}` commands with their starred forms.
pub fn define_spacing(ctx: &mut LatexContext) {
    ctx.define_macro(MacroDefSpec {
        names: &[r"\,", r"\;", r"\:", r"\!", r"\ ", r"\quad", r"\qquad"],
        args: &[],
        handler: None,
    });

    ctx.define_macro(MacroDefSpec {
        names: &[r"\hspace", r"\vspace"],
        args: &[ArgKind::Mandatory],
        handler: Some(parse_starred),
    });
}
