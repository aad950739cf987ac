//! Constants for file discovery and project configuration.
//!
//! Component directories only ever contain plain ES module sources, so the
//! extension list is narrower than what a bundler would resolve.

/// File extensions of component sources that migrations rewrite
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js",  // JavaScript
    "ts",  // TypeScript
    "jsx", // JavaScript with JSX
    "tsx", // TypeScript with JSX
];

/// Project configuration file written by the component CLI
pub const COMPONENTS_JSON: &str = "components.json";

/// Compiler config files consulted for path aliases (in priority order)
pub const TSCONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];

pub const MISSING_UI_PATH_MESSAGE: &str = "We could not find a valid `ui` path in your \
     `components.json` file. Please ensure you have a valid `ui` path in your \
     `components.json` file.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_extensions_cover_js_and_ts() {
        assert!(SOURCE_EXTENSIONS.contains(&"js"));
        assert!(SOURCE_EXTENSIONS.contains(&"ts"));
        assert!(SOURCE_EXTENSIONS.contains(&"jsx"));
        assert!(SOURCE_EXTENSIONS.contains(&"tsx"));
        assert_eq!(SOURCE_EXTENSIONS.len(), 4);
    }

    #[test]
    fn test_module_variants_not_collected() {
        // .mjs/.cjs/.mts/.cts never appear in generated component folders
        for ext in ["mjs", "cjs", "mts", "cts"] {
            assert!(!SOURCE_EXTENSIONS.contains(&ext), "unexpected extension '{}'", ext);
        }
    }

    #[test]
    fn test_tsconfig_preferred_over_jsconfig() {
        assert_eq!(TSCONFIG_FILES.first(), Some(&"tsconfig.json"));
    }
}
