//! The rewrite rules, in the order they run.
//!
//! Every rule is a pure `fn(&str) -> Rewrite`. None of them parse Dart; they are
//! textual substitutions and may over-match inside strings or comments. Later
//! rules see the output of earlier ones.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

/// Output of one rule: the rewritten text and how many substitutions it made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub count: usize,
}

impl Rewrite {
    fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            count: 0,
        }
    }
}

/// A named rewrite rule.
#[derive(Clone, Copy, Serialize)]
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub apply: fn(&str) -> Rewrite,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// How many substitutions one rule made in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub count: usize,
}

/// Result of threading a file's text through every rule.
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    pub content: String,
    pub total: usize,
    /// Only rules with a non-zero count appear here.
    pub hits: Vec<RuleHit>,
}

/// The rule chain. Order matters.
pub const RULES: &[Rule] = &[
    Rule {
        id: "onpressed-rename",
        description: "onPressed: → onPress:",
        apply: rename_on_pressed,
    },
    Rule {
        id: "button-style-variant",
        description: "FButtonStyle.<x> → Variant.<x>",
        apply: rename_button_styles,
    },
    Rule {
        id: "design-param-removal",
        description: "drop `, design: FButtonCustomStyle(...)`",
        apply: remove_design_parameter,
    },
    Rule {
        id: "label-text-wrap",
        description: "label: 'x' → label: const Text('x')",
        apply: wrap_label_literals,
    },
    Rule {
        id: "text-field-label-wrap",
        description: "label: 'x' → label: const Text('x') inside FTextField(",
        apply: wrap_text_field_labels,
    },
];

/// Run every rule in order over `content`.
pub fn apply_all(content: &str) -> ChainOutcome {
    let mut current = content.to_string();
    let mut total = 0;
    let mut hits = Vec::new();

    for rule in RULES {
        let rewrite = (rule.apply)(&current);
        if rewrite.count > 0 {
            total += rewrite.count;
            hits.push(RuleHit {
                rule: rule.id,
                count: rewrite.count,
            });
        }
        current = rewrite.content;
    }

    ChainOutcome {
        content: current,
        total,
        hits,
    }
}

// ============================================================================
// onPressed → onPress
// ============================================================================

const ON_PRESSED: &str = "onPressed:";
const ON_PRESS: &str = "onPress:";

pub fn rename_on_pressed(content: &str) -> Rewrite {
    let count = content.matches(ON_PRESSED).count();
    if count == 0 {
        return Rewrite::unchanged(content);
    }

    Rewrite {
        content: content.replace(ON_PRESSED, ON_PRESS),
        count,
    }
}

// ============================================================================
// FButtonStyle.x → Variant.x
// ============================================================================

const BUTTON_STYLE_VARIANTS: &[(&str, &str)] = &[
    (r"FButtonStyle\.primary", "Variant.primary"),
    (r"FButtonStyle\.outline", "Variant.outline"),
    (r"FButtonStyle\.destructive", "Variant.destructive"),
];

static BUTTON_STYLE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    BUTTON_STYLE_VARIANTS
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
});

pub fn rename_button_styles(content: &str) -> Rewrite {
    let mut current = content.to_string();
    let mut count = 0;

    for (pattern, replacement) in BUTTON_STYLE_PATTERNS.iter() {
        let matches = pattern.find_iter(&current).count();
        if matches == 0 {
            continue;
        }
        count += matches;
        current = pattern
            .replace_all(&current, NoExpand(*replacement))
            .into_owned();
    }

    Rewrite {
        content: current,
        count,
    }
}

// ============================================================================
// design: FButtonCustomStyle(...) removal
// ============================================================================

// Single level only: `[^)]*` stops at the first closing paren, so a nested
// call inside the style is cut short rather than balanced.
static DESIGN_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*design:\s*FButtonCustomStyle\([^)]*\)").unwrap());

pub fn remove_design_parameter(content: &str) -> Rewrite {
    let count = DESIGN_PARAM.find_iter(content).count();
    if count == 0 {
        return Rewrite::unchanged(content);
    }

    Rewrite {
        content: DESIGN_PARAM.replace_all(content, "").into_owned(),
        count,
    }
}

// ============================================================================
// label: 'x' → label: const Text('x')
// ============================================================================

static LABEL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"label:\s*'([^']+)'").unwrap());

const LABEL_TEXT_WIDGET: &str = "label: const Text('${1}')";

pub fn wrap_label_literals(content: &str) -> Rewrite {
    let count = LABEL_LITERAL.find_iter(content).count();
    if count == 0 {
        return Rewrite::unchanged(content);
    }

    Rewrite {
        content: LABEL_LITERAL
            .replace_all(content, LABEL_TEXT_WIDGET)
            .into_owned(),
        count,
    }
}

const TEXT_FIELD_OPEN: &str = "FTextField(";

/// Same rewrap as [`wrap_label_literals`], limited to lines that look like they
/// sit inside an `FTextField(` call.
///
/// Scope is tracked per line: a line containing `FTextField(` enters it, and the
/// first line containing `)` (the entry line included) leaves it. Nested calls
/// on their own line therefore end the scope early. Every label on a matching
/// line receives the text of the first one. Counts one per rewritten line.
pub fn wrap_text_field_labels(content: &str) -> Rewrite {
    let mut inside = false;
    let mut count = 0;
    let mut lines: Vec<Cow<'_, str>> = Vec::new();

    for line in content.split('\n') {
        if line.contains(TEXT_FIELD_OPEN) {
            inside = true;
        }

        let first = if inside {
            LABEL_LITERAL.captures(line)
        } else {
            None
        };
        let line = match first {
            Some(caps) => {
                count += 1;
                let wrapped = format!("label: const Text('{}')", &caps[1]);
                LABEL_LITERAL.replace_all(line, NoExpand(&wrapped))
            }
            None => Cow::Borrowed(line),
        };

        if inside && line.contains(')') {
            inside = false;
        }

        lines.push(line);
    }

    if count == 0 {
        return Rewrite::unchanged(content);
    }

    Rewrite {
        content: lines.join("\n"),
        count,
    }
}

// ============================================================================
// Tests
// ============================================================================
