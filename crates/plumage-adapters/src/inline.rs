//! Inline markup parser.
//!
//! Parses snippets like `<Button tone="accent" disabled>Click me</Button>`
//! into a component name, a prop bag, and children, so registered styled
//! components can be rendered from plain text.

use regex::Regex;
use std::sync::LazyLock;

use crate::props::{PropValue, Props};

/// Parsed inline element.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineJsx {
    /// Component name (e.g., "Button")
    pub component: String,

    /// Props in source order
    pub props: Props,

    /// Children content (text or nested markup as string)
    pub children: Option<String>,

    /// Whether self-closing
    pub self_closing: bool,
}

static SELF_CLOSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][\w.-]*)\s*([^>]*?)\s*/>").expect("Invalid self-closing regex")
});

static OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][\w.-]*)\s*([^>]*)>").expect("Invalid open tag regex")
});

// name="value" | name='value' | name={expr} | name
static PROP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_][\w-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|\{([^}]*)\}))?"#)
        .expect("Invalid prop regex")
});

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("Invalid number regex"));

/// Parse inline markup.
///
/// Returns the first top-level element found.
pub fn parse_inline_jsx(source: &str) -> Option<InlineJsx> {
    let source = source.trim();

    parse_self_closing(source).or_else(|| parse_with_children(source))
}

fn parse_self_closing(source: &str) -> Option<InlineJsx> {
    let caps = SELF_CLOSING_RE.captures(source)?;

    Some(InlineJsx {
        component: caps.get(1)?.as_str().to_string(),
        props: parse_props(caps.get(2).map(|m| m.as_str()).unwrap_or("")),
        children: None,
        self_closing: true,
    })
}

fn parse_with_children(source: &str) -> Option<InlineJsx> {
    let caps = OPEN_RE.captures(source)?;
    let component = caps.get(1)?.as_str().to_string();
    let open_len = caps.get(0)?.len();

    let close_pos = find_matching_close_tag(source, &component, open_len)?;
    let children = source[open_len..close_pos].trim();

    Some(InlineJsx {
        props: parse_props(caps.get(2).map(|m| m.as_str()).unwrap_or("")),
        children: (!children.is_empty()).then(|| children.to_string()),
        component,
        self_closing: false,
    })
}

/// Find the closing tag for `component`, skipping nested same-name elements.
fn find_matching_close_tag(source: &str, component: &str, start: usize) -> Option<usize> {
    let open_pattern = format!("<{component}");
    let close_tag = format!("</{component}>");
    let mut depth = 1usize;
    let mut pos = start;

    while pos < source.len() {
        let rest = &source[pos..];
        let next_close = rest.find(&close_tag)?;

        match rest.find(&open_pattern) {
            Some(open) if open < next_close => {
                let after = &rest[open + open_pattern.len()..];
                let tag_end = after.find('>').unwrap_or(after.len());
                let boundary = after.starts_with(|c: char| c == '>' || c == '/' || c.is_whitespace());
                if boundary && !after[..tag_end].trim_end().ends_with('/') {
                    depth += 1;
                }
                pos += open + open_pattern.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + next_close);
                }
                pos += next_close + close_tag.len();
            }
        }
    }

    None
}

fn parse_props(props_str: &str) -> Props {
    let mut props = Props::new();

    for caps in PROP_RE.captures_iter(props_str.trim()) {
        let Some(name) = caps.get(1) else { continue };

        let value = if let Some(m) = caps.get(2).or_else(|| caps.get(3)) {
            PropValue::String(m.as_str().to_string())
        } else if let Some(m) = caps.get(4) {
            parse_expression(m.as_str())
        } else {
            PropValue::Boolean(true)
        };

        props.insert(name.as_str().to_string(), value);
    }

    props
}

/// Literal expressions become values; anything else stays opaque.
fn parse_expression(expr: &str) -> PropValue {
    let expr = expr.trim();
    match expr {
        "true" => PropValue::Boolean(true),
        "false" => PropValue::Boolean(false),
        _ if NUMBER_RE.is_match(expr) => expr
            .parse()
            .map(PropValue::Number)
            .unwrap_or_else(|_| PropValue::Expression(expr.to_string())),
        _ => {
            let quoted = expr.len() >= 2
                && ((expr.starts_with('"') && expr.ends_with('"'))
                    || (expr.starts_with('\'') && expr.ends_with('\'')));
            if quoted {
                PropValue::String(expr[1..expr.len() - 1].to_string())
            } else {
                PropValue::Expression(expr.to_string())
            }
        }
    }
}
