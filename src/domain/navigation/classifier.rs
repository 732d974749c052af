//! Route-to-menu-key classification
//!
//! Maps the current URL path to the menu entry that should be highlighted.
//! Detail pages, edit forms and wizards inherit their parent feature's menu
//! entry through prefix matching, so new sub-routes need no registration here.

/// A single match condition inside a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Path must equal the value exactly.
    Exact(&'static str),
    /// Path must start with the value.
    Prefix(&'static str),
}

impl Pattern {
    pub fn matches(&self, path: &str) -> bool {
        match *self {
            Pattern::Exact(expected) => path == expected,
            Pattern::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// One entry of the ordered rule table: if any pattern matches, the path
/// resolves to `key`.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub patterns: &'static [Pattern],
    pub key: &'static str,
}

/// Ordered rule table, first match wins.
///
/// Order is load-bearing in two places: the exact `/admin/playground` rule
/// must come before the prompts rule, and the evaluator rule deliberately
/// absorbs the exact `/admin/evaluation/debug` surface (the debug page is
/// reached from the evaluator screens, so it keeps that entry highlighted).
pub const RULES: &[ClassificationRule] = &[
    // The root path is an alias of the app builder, the default landing surface.
    ClassificationRule {
        patterns: &[Pattern::Exact("/"), Pattern::Prefix("/build")],
        key: "/build",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/app")],
        key: "/app",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/mcp")],
        key: "/mcp",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/component")],
        key: "/component",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/knowledge")],
        key: "/knowledge",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/setting")],
        key: "/setting",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/debug")],
        key: "/debug",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/dify")],
        key: "/dify",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/agent-schema")],
        key: "/agent-schema",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/admin/evaluation/gather")],
        key: "/admin/evaluation/gather",
    },
    // The standalone evaluation debug page intentionally highlights the
    // evaluator entry rather than getting its own menu item.
    ClassificationRule {
        patterns: &[
            Pattern::Prefix("/admin/evaluation/evaluator"),
            Pattern::Exact("/admin/evaluation/debug"),
        ],
        key: "/admin/evaluation/evaluator",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/admin/evaluation/experiment")],
        key: "/admin/evaluation/experiment",
    },
    // Playground is a distinct leaf and must win over the prompts rule below.
    ClassificationRule {
        patterns: &[Pattern::Exact("/admin/playground")],
        key: "/admin/playground",
    },
    ClassificationRule {
        patterns: &[
            Pattern::Prefix("/admin/prompt"),
            Pattern::Exact("/admin/prompts"),
            Pattern::Exact("/admin/version-history"),
        ],
        key: "/admin/prompts",
    },
    ClassificationRule {
        patterns: &[Pattern::Prefix("/admin/tracing")],
        key: "/admin/tracing",
    },
];

/// Resolve a path to the menu key that should be highlighted.
///
/// Expects the path component only; callers strip any query string or
/// fragment first. Total function: paths with no dedicated menu entry fall
/// through and are returned verbatim, which simply highlights nothing in
/// the menu.
pub fn classify(path: &str) -> &str {
    for rule in RULES {
        if rule.patterns.iter().any(|pattern| pattern.matches(path)) {
            tracing::trace!(path, key = rule.key, "classified path");
            return rule.key;
        }
    }
    tracing::trace!(path, "no rule matched, returning path verbatim");
    path
}

/// All distinct keys the rule table can resolve to.
pub fn canonical_keys() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_alias_of_build() {
        assert_eq!(classify("/"), "/build");
    }

    #[test]
    fn test_build_prefix_covers_sub_routes() {
        assert_eq!(classify("/build"), "/build");
        assert_eq!(classify("/build/wizard/step2"), "/build");
        assert_eq!(classify("/builder"), "/build");
    }

    #[test]
    fn test_plain_feature_prefixes() {
        assert_eq!(classify("/app"), "/app");
        assert_eq!(classify("/app/42/edit"), "/app");
        assert_eq!(classify("/mcp/servers"), "/mcp");
        assert_eq!(classify("/component/form"), "/component");
        assert_eq!(classify("/knowledge/docs/3"), "/knowledge");
        assert_eq!(classify("/setting/model-service"), "/setting");
        assert_eq!(classify("/debug/console"), "/debug");
        assert_eq!(classify("/dify/import"), "/dify");
        assert_eq!(classify("/agent-schema/editor"), "/agent-schema");
    }

    #[test]
    fn test_evaluation_debug_aliases_to_evaluator() {
        assert_eq!(
            classify("/admin/evaluation/debug"),
            "/admin/evaluation/evaluator"
        );
        // Only the exact path is aliased, deeper paths fall through.
        assert_eq!(
            classify("/admin/evaluation/debug/session"),
            "/admin/evaluation/debug/session"
        );
    }

    #[test]
    fn test_evaluation_surfaces() {
        assert_eq!(
            classify("/admin/evaluation/gather/12"),
            "/admin/evaluation/gather"
        );
        assert_eq!(
            classify("/admin/evaluation/evaluator/new"),
            "/admin/evaluation/evaluator"
        );
        assert_eq!(
            classify("/admin/evaluation/experiment/7/report"),
            "/admin/evaluation/experiment"
        );
    }

    #[test]
    fn test_playground_wins_over_prompts() {
        assert_eq!(classify("/admin/playground"), "/admin/playground");
    }

    #[test]
    fn test_prompt_surfaces_resolve_to_prompts() {
        assert_eq!(classify("/admin/prompts"), "/admin/prompts");
        assert_eq!(classify("/admin/prompt/123/edit"), "/admin/prompts");
        assert_eq!(classify("/admin/version-history"), "/admin/prompts");
    }

    #[test]
    fn test_tracing_prefix() {
        assert_eq!(classify("/admin/tracing"), "/admin/tracing");
        assert_eq!(classify("/admin/tracing/span/9"), "/admin/tracing");
    }

    #[test]
    fn test_unmatched_path_returned_verbatim() {
        assert_eq!(classify("/unmatched/random/path"), "/unmatched/random/path");
        assert_eq!(classify("/login"), "/login");
    }

    #[test]
    fn test_empty_string_falls_through() {
        // No rule matches the empty string, identity fallback applies.
        assert_eq!(classify(""), "");
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        // Every canonical key classifies to itself, so re-classifying an
        // already-classified canonical key is stable.
        for key in canonical_keys() {
            assert_eq!(classify(key), key, "canonical key {key} must be stable");
            assert_eq!(classify(classify(key)), classify(key));
        }
    }

    #[test]
    fn test_fallback_output_never_becomes_canonical() {
        // A fallback output is the raw path; classifying it again still
        // returns it verbatim rather than promoting it to a canonical key.
        let out = classify("/nowhere/special");
        assert_eq!(out, "/nowhere/special");
        assert_eq!(classify(out), out);
        assert!(canonical_keys().all(|key| key != out));
    }
}
