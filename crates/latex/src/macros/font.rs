use crate::LatexContext;
use crate::define_macro::{ArgKind, MacroDefSpec};
use crate::macros::parse_starred;
use crate::symbols::FONT_NAMES;

/// Registers font commands: `\math<font>{…}` for every known font, the
/// old-style switches `\rm`, `\it`, … and the text commands.
pub fn define_font(ctx: &mut LatexContext) {
    let math_fonts: Vec<String> = FONT_NAMES.iter().map(|font| format!("\\math{font}")).collect();
    let math_fonts: Vec<&str> = math_fonts.iter().map(String::as_str).collect();
    ctx.define_macro(MacroDefSpec {
        names: &math_fonts,
        args: &[ArgKind::Mandatory],
        handler: None,
    });

    ctx.define_macro(MacroDefSpec {
        names: &[r"\rm", r"\it", r"\bf", r"\tt", r"\sf", r"\cal"],
        args: &[],
        handler: None,
    });

    ctx.define_macro(MacroDefSpec {
        names: &[
            r"\text",
            r"\textbf",
            r"\textit",
            r"\textrm",
            r"\textsf",
            r"\texttt",
            r"\emph",
            r"\mbox",
        ],
        args: &[ArgKind::Mandatory],
        handler: None,
    });

    ctx.define_macro(MacroDefSpec {
        names: &[r"\operatorname"],
        args: &[ArgKind::Mandatory],
        handler: Some(parse_starred),
    });
}
