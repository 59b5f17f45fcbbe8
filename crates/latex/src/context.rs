//! Registry of macro behaviours shared by every parse.

use log::debug;
use rapidhash::RapidHashMap;

use crate::define_macro::{MacroDefSpec, MacroSpec};
use crate::macros;

/// Hash map used for name lookups.
pub type KeyMap<K, V> = RapidHashMap<K, V>;

/// Macro registry consulted by the [`Parser`](crate::parser::Parser).
///
/// [`LatexContext::default`] registers the builtin catalogue;
/// [`LatexContext::empty`] starts with no macros at all. A context is never
/// mutated by parsing and can be shared between parses.
#[derive(Debug, Clone)]
pub struct LatexContext {
    /// Behaviours by macro name, backslash included.
    pub macros: KeyMap<String, MacroSpec>,
}

impl LatexContext {
    /// Creates a context with no macros registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            macros: KeyMap::default(),
        }
    }

    /// Registers one behaviour under every name in `spec.names`, replacing
    /// earlier definitions of those names.
    ///
    /// ```
    /// use latex::define_macro::{ArgKind, MacroDefSpec};
    /// use latex::LatexContext;
    ///
    /// let mut ctx = LatexContext::empty();
    /// ctx.define_macro(MacroDefSpec {
    ///     names: &[r"\pair", r"\couple"],
    ///     args: &[ArgKind::Mandatory, ArgKind::Mandatory],
    ///     handler: None,
    /// });
    /// assert_eq!(ctx.get_macro(r"\couple").map(|m| m.args.len()), Some(2));
    /// ```
    pub fn define_macro(&mut self, spec: MacroDefSpec) {
        let data = MacroSpec {
            args: spec.args.to_vec(),
            handler: spec.handler,
        };
        for name in spec.names {
            self.macros.insert((*name).to_owned(), data.clone());
        }
    }

    /// Looks up the behaviour registered for `name`.
    #[must_use]
    pub fn get_macro(&self, name: &str) -> Option<&MacroSpec> {
        self.macros.get(name)
    }

    /// Whether `name` has a registered behaviour.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }
}

impl Default for LatexContext {
    fn default() -> Self {
        let mut ctx = Self::empty();
        macros::define_builtin_macros(&mut ctx);
        debug!("registered {} builtin macros", ctx.macros.len());
        ctx
    }
}
