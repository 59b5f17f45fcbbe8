use crate::LatexContext;
use crate::define_macro::MacroDefSpec;
use crate::symbols::{self, ALL_SETS, FUNCTION_NAMES, OVERUNDER_FUNCTIONS};

/// Characters that LaTeX escapes with a backslash in prose.
const ESCAPES: &[&str] = &[r"\{", r"\}", r"\%", r"\$", r"\&", r"\#", r"\_", r"\|"];

/// Registers argument-less macros: every macro-shaped entry of the symbol
/// tables, named functions such as `\sin`, escaped characters and the line
/// break `\\`.
pub fn define_symbols(ctx: &mut LatexContext) {
    let mut names: Vec<&str> = ALL_SETS
        .iter()
        .flat_map(|&(_, set)| symbols::macro_names(set))
        .collect();
    names.extend_from_slice(ESCAPES);
    names.push(r"\\");
    ctx.define_macro(MacroDefSpec {
        names: &names,
        args: &[],
        handler: None,
    });

    let functions: Vec<String> = FUNCTION_NAMES
        .iter()
        .chain(OVERUNDER_FUNCTIONS.iter())
        .map(|name| format!("\\{name}"))
        .collect();
    let functions: Vec<&str> = functions.iter().map(String::as_str).collect();
    ctx.define_macro(MacroDefSpec {
        names: &functions,
        args: &[],
        handler: None,
    });
}
