//! DOT text primitives: value escaping and a line-oriented builder.

use std::fmt::Write;
use std::sync::LazyLock;

use graphdot_core::Attrs;
use regex::Regex;

/// Suffix marking an attribute whose value is an HTML-like label.
pub const HTML_SUFFIX: &str = "_html";
/// Suffix marking an attribute whose value is record-label syntax.
pub const RECORD_SUFFIX: &str = "_record";

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("numeral pattern is valid")
});

/// Whether `value` is a DOT numeral and can be written without quotes.
pub fn is_numeral(value: &str) -> bool {
    NUMERAL.is_match(value)
}

/// Escape a value for use as a DOT identifier or attribute value.
///
/// Numerals pass through unquoted. Everything else is quoted, with markup
/// characters turned into entities and newlines into left-justified breaks.
pub fn escape(value: &str) -> String {
    if is_numeral(value) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\l"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Quote a record label, escaping only embedded double quotes.
fn escape_record(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Render an attribute list as `[k1=v1 k2=v2]`.
///
/// Keys ending in `_html` lose the suffix and keep their raw value inside
/// angle brackets; keys ending in `_record` lose the suffix and are quoted
/// without entity escaping.
pub fn escape_attributes(attrs: &Attrs) -> String {
    let mut out = String::from("[");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if let Some(key) = key.strip_suffix(HTML_SUFFIX) {
            let _ = write!(out, "{key}=<{value}>");
        } else if let Some(key) = key.strip_suffix(RECORD_SUFFIX) {
            let _ = write!(out, "{key}={}", escape_record(value));
        } else {
            let _ = write!(out, "{key}={}", escape(value));
        }
    }
    out.push(']');
    out
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
///
/// Statements are written one per line; graph-level statements sit one
/// indentation level deep and cluster bodies two.
pub struct DotBuilder {
    output: String,
    indent: usize,
    edge_op: &'static str,
}

impl DotBuilder {
    /// Open a `digraph` or `graph`, optionally named.
    pub fn new(directed: bool, name: Option<&str>) -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str(if directed { "digraph " } else { "graph " });
        if let Some(name) = name {
            output.push_str(&escape(name));
            output.push(' ');
        }
        output.push_str("{\n");
        Self {
            output,
            indent: 1,
            edge_op: if directed { "->" } else { "--" },
        }
    }

    /// Add a `graph`/`node`/`edge` default block. Empty blocks are skipped.
    pub fn attr_block(&mut self, keyword: &str, attrs: &Attrs) -> &mut Self {
        if attrs.is_empty() {
            return self;
        }
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{keyword} {}", escape_attributes(attrs));
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, index: usize, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{index} {{");
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label = {}", escape(label));
        self
    }

    /// End the current subgraph cluster. Does nothing when no cluster is open.
    pub fn end_cluster(&mut self) -> &mut Self {
        if self.indent <= 1 {
            return self;
        }
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Add a vertex statement, with a bracketed layout when non-empty.
    pub fn vertex(&mut self, vid: &str, layout: &Attrs) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&escape(vid));
        self.push_layout(layout);
        self
    }

    /// Add an edge statement using the graph's edge operator.
    pub fn edge(&mut self, from: &str, to: &str, layout: &Attrs) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(
            self.output,
            "{} {} {}",
            escape(from),
            self.edge_op,
            escape(to)
        );
        self.push_layout(layout);
        self
    }

    fn push_layout(&mut self, layout: &Attrs) {
        if !layout.is_empty() {
            self.output.push(' ');
            self.output.push_str(&escape_attributes(layout));
        }
        self.output.push('\n');
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    /// Get current indent level.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numerals_stay_bare() {
        for value in ["0", "-3", "2.5", ".5", "-.5", "10.", "42"] {
            assert_eq!(escape(value), value, "{value} should be a numeral");
        }
    }

    #[test]
    fn test_non_numerals_are_quoted() {
        assert_eq!(escape("a&b"), "\"a&amp;b\"");
        assert_eq!(escape("-"), "\"-\"");
        assert_eq!(escape("."), "\".\"");
        assert_eq!(escape("1e5"), "\"1e5\"");
        assert_eq!(escape("+1"), "\"+1\"");
        assert_eq!(escape(""), "\"\"");
    }

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape("<a href='x'>\"q\"</a>"),
            "\"&lt;a href=&apos;x&apos;&gt;&quot;q&quot;&lt;/a&gt;\""
        );
        assert_eq!(escape("C:\\tmp"), "\"C:\\\\tmp\"");
        assert_eq!(escape("line1\nline2"), "\"line1\\lline2\"");
    }

    #[test]
    fn test_escape_attributes_suffixes() {
        let attrs = Attrs::new()
            .with("color", "red")
            .with("label_html", "<b>bold</b>")
            .with("shape", "record")
            .with("xlabel_record", "{a|\"b\"}")
            .with("width", "1.5");
        assert_eq!(
            escape_attributes(&attrs),
            "[color=\"red\" label=<<b>bold</b>> shape=\"record\" xlabel=\"{a|\\\"b\\\"}\" width=1.5]"
        );
    }

    #[test]
    fn test_escape_attributes_empty() {
        assert_eq!(escape_attributes(&Attrs::new()), "[]");
    }

    #[test]
    fn test_builder_layout() {
        let mut b = DotBuilder::new(true, Some("g"));
        b.attr_block("node", &Attrs::new().with("shape", "box"))
            .attr_block("edge", &Attrs::new())
            .start_cluster(0, "left");
        assert_eq!(b.indent(), 2);
        b.vertex("1", &Attrs::new()).end_cluster().edge(
            "1",
            "x",
            &Attrs::new().with("dir", "none"),
        );
        assert_eq!(
            b.build(),
            "digraph \"g\" {\n  node [shape=\"box\"]\n  subgraph cluster_0 {\n    label = \"left\"\n    1\n  }\n  1 -> \"x\" [dir=\"none\"]\n}\n"
        );
    }

    #[test]
    fn test_builder_undirected_unnamed() {
        let mut b = DotBuilder::new(false, None);
        b.edge("1", "2", &Attrs::new());
        assert_eq!(b.build(), "graph {\n  1 -- 2\n}\n");
    }

    #[test]
    fn test_unmatched_end_cluster_is_ignored() {
        let mut b = DotBuilder::new(false, None);
        b.end_cluster().vertex("1", &Attrs::new());
        assert_eq!(b.indent(), 1);
        assert_eq!(b.build(), "graph {\n  1\n}\n");
    }
}
