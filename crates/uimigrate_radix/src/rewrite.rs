//! Textual rewrite of `@radix-ui/react-*` imports to the `radix-ui` package.
//!
//! The rewrite is a fixed table of regex substitutions applied in order to the
//! whole file. It is purely lexical: a `Slot` inside a comment or string is
//! rewritten like any other.

use log::trace;
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::OnceLock};

/// The consolidated package every primitive is imported from after migration.
pub const RADIX_UI_PACKAGE: &str = "radix-ui";

/// Prefix shared by the per-primitive packages.
pub const LEGACY_PACKAGE_PREFIX: &str = "@radix-ui/react-";

pub const SLOT_PACKAGE: &str = "@radix-ui/react-slot";

/// Migrated text of one file, plus the packages whose imports were rewritten away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// In match order; a package imported twice appears twice.
    pub unused: Vec<String>,
}

// Word classes and boundaries are ASCII-only, as in JavaScript regexes.
struct Rule {
    name: &'static str,
    pattern: &'static str,
    /// Maximum number of replacements, 0 for all.
    limit: usize,
    replace: fn(&Captures<'_>, &mut Vec<String>) -> String,
}

const RULES: &[Rule] = &[
    Rule {
        name: "namespace-import",
        pattern: r#"import \* as ((?-u:\w)+Primitive) from "@radix-ui/react-((?-u:[\w-])+)""#,
        limit: 0,
        replace: consolidate_namespace_import,
    },
    // radix-ui exports the old Sheet primitive as Dialog
    Rule {
        name: "sheet",
        pattern: r"(?-u:\b)Sheet\s+as\s+SheetPrimitive(?-u:\b)",
        limit: 0,
        replace: sheet_as_dialog,
    },
    Rule {
        name: "slot-import",
        pattern: r#"import\s+\{\s+Slot\s+\}\s+from\s+"@radix-ui/react-slot""#,
        limit: 1,
        replace: slot_import,
    },
    Rule {
        name: "slot-typeof",
        pattern: r"typeof\s+Slot(?-u:\b)",
        limit: 0,
        replace: slot_typeof,
    },
    Rule {
        name: "slot-ternary",
        pattern: r"\?\s+Slot\s+:",
        limit: 0,
        replace: slot_ternary,
    },
];

fn consolidate_namespace_import(caps: &Captures<'_>, unused: &mut Vec<String>) -> String {
    let binding = &caps[1];
    unused.push(format!("{}{}", LEGACY_PACKAGE_PREFIX, &caps[2]));
    let member = binding.replacen("Primitive", "", 1);
    format!(r#"import {{ {member} as {binding} }} from "{RADIX_UI_PACKAGE}""#)
}

fn sheet_as_dialog(_: &Captures<'_>, _: &mut Vec<String>) -> String {
    "Dialog as SheetPrimitive".to_string()
}

fn slot_import(_: &Captures<'_>, unused: &mut Vec<String>) -> String {
    unused.push(SLOT_PACKAGE.to_string());
    format!("import {{ Slot as SlotPrimitive }} from '{RADIX_UI_PACKAGE}'")
}

fn slot_typeof(_: &Captures<'_>, _: &mut Vec<String>) -> String {
    "typeof SlotPrimitive.Slot".to_string()
}

fn slot_ternary(_: &Captures<'_>, _: &mut Vec<String>) -> String {
    "? SlotPrimitive.Slot :".to_string()
}

fn compiled_rules() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES.iter().map(|rule| Regex::new(rule.pattern).expect("invalid rewrite pattern")).collect()
    })
}

/// Applies every rewrite rule, in order, to `source`.
///
/// Text no rule matches is returned unchanged, and rewriting the output again
/// is a no-op.
pub fn rewrite(source: &str) -> Rewrite {
    let mut content = source.to_string();
    let mut unused = Vec::new();

    for (rule, re) in RULES.iter().zip(compiled_rules()) {
        let next = match re.replacen(&content, rule.limit, |caps: &Captures<'_>| {
            (rule.replace)(caps, &mut unused)
        }) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        trace!("Rule '{}' matched", rule.name);
        content = next;
    }

    Rewrite { content, unused }
}
