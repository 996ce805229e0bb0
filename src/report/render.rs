//! Plain-text rendering of report trees

use report_trie::Tree;

use super::assembler::ReportModel;
use crate::model::FailureNode;

/// How report trees are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level whose children are printed; the root is level 0.
    /// `None` prints everything.
    pub expand_depth: Option<usize>,

    /// Use ASCII connectors instead of box-drawing characters
    pub ascii: bool,
}

impl RenderOptions {
    fn expands(&self, depth: usize) -> bool {
        self.expand_depth.map_or(true, |max| depth < max)
    }

    fn glyphs(&self) -> Glyphs {
        if self.ascii {
            Glyphs {
                branch: "|-- ",
                last: "`-- ",
                vertical: "|   ",
                blank: "    ",
            }
        } else {
            Glyphs {
                branch: "├── ",
                last: "└── ",
                vertical: "│   ",
                blank: "    ",
            }
        }
    }
}

struct Glyphs {
    branch: &'static str,
    last: &'static str,
    vertical: &'static str,
    blank: &'static str,
}

/// Render one tree, one node per line
pub fn render_tree(tree: &Tree<FailureNode>, options: &RenderOptions) -> String {
    let glyphs = options.glyphs();
    let mut out = String::new();

    write_node_line(&mut out, tree, 0, options);
    write_continuation(&mut out, &tree.label, "");
    if options.expands(0) {
        write_children(&mut out, &tree.children, "", 1, options, &glyphs);
    }
    out
}

/// Render the failure count followed by both trees
pub fn render_report(model: &ReportModel, options: &RenderOptions) -> String {
    let header = match model.total_failures {
        1 => "1 failure".to_string(),
        n => format!("{} failures", n),
    };
    format!(
        "{}\n\n{}\n{}",
        header,
        render_tree(&model.message_tree, options),
        render_tree(&model.task_tree, options)
    )
}

fn write_children(
    out: &mut String,
    children: &[Tree<FailureNode>],
    prefix: &str,
    depth: usize,
    options: &RenderOptions,
    glyphs: &Glyphs,
) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if last { glyphs.last } else { glyphs.branch });
        write_node_line(out, child, depth, options);

        let rail = if last { glyphs.blank } else { glyphs.vertical };
        let child_prefix = format!("{}{}", prefix, rail);
        write_continuation(out, &child.label, &child_prefix);
        if options.expands(depth) {
            write_children(out, &child.children, &child_prefix, depth + 1, options, glyphs);
        }
    }
}

fn write_node_line(
    out: &mut String,
    node: &Tree<FailureNode>,
    depth: usize,
    options: &RenderOptions,
) {
    let first = node.label.display_lines().first().copied().unwrap_or_default();
    out.push_str(first);
    if !node.is_leaf() && !options.expands(depth) {
        out.push_str(&format!(" [+{}]", node.children.len()));
    }
    out.push('\n');
}

/// Lines after the first, aligned under it. Blank lines are kept.
fn write_continuation(out: &mut String, label: &FailureNode, prefix: &str) {
    for line in label.display_lines().into_iter().skip(1) {
        if line.is_empty() {
            out.push_str(prefix.trim_end());
        } else {
            out.push_str(prefix);
            out.push_str(line);
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FailureRecord;

    fn record(trace: &[&str], message: &str) -> FailureRecord {
        FailureRecord::new(trace.iter().map(|s| s.to_string()).collect(), message)
    }

    #[test]
    fn test_render_chain() {
        let model = ReportModel::assemble(&[record(&["taskA", "taskB"], "Boom")]);
        let text = render_tree(&model.message_tree, &RenderOptions::default());
        assert_eq!(
            text,
            "Failures grouped by message\n\
             └── Boom\n    \
             └── taskA\n        \
             └── taskB\n"
        );
    }

    #[test]
    fn test_render_siblings_and_error_body() {
        let model = ReportModel::assemble(&[
            record(&["a"], "m"),
            record(&["b"], "m").with_error("E\n  at x\n  at y"),
        ]);
        let text = render_tree(&model.task_tree, &RenderOptions::default());
        let expected = [
            "Failures grouped by task",
            "├── a",
            "│   └── m",
            "└── b",
            "    └── E",
            "        at x",
            "        at y",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_ascii() {
        let model = ReportModel::assemble(&[record(&["a"], "m"), record(&["b"], "m")]);
        let options = RenderOptions {
            ascii: true,
            ..Default::default()
        };
        let text = render_tree(&model.task_tree, &options);
        let expected = [
            "Failures grouped by task",
            "|-- a",
            "|   `-- m",
            "`-- b",
            "    `-- m",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_collapsed_beyond_depth() {
        let model = ReportModel::assemble(&[
            record(&["t1", "t2"], "Boom"),
            record(&["t3"], "Boom"),
        ]);
        let options = RenderOptions {
            expand_depth: Some(1),
            ..Default::default()
        };
        let text = render_tree(&model.message_tree, &options);
        assert_eq!(text, "Failures grouped by message\n└── Boom [+2]\n");
    }

    #[test]
    fn test_render_leaf_never_marked_collapsed() {
        let model = ReportModel::assemble(&[record(&[], "Boom")]);
        let options = RenderOptions {
            expand_depth: Some(1),
            ..Default::default()
        };
        let text = render_tree(&model.message_tree, &options);
        assert_eq!(text, "Failures grouped by message\n└── Boom\n");
    }

    #[test]
    fn test_render_multiline_message_and_blank_body_line() {
        let model = ReportModel::assemble(&[
            record(&["a"], "first\nsecond"),
            record(&["b"], "m").with_error("E\n  at x\n\n  at y"),
        ]);
        let text = render_tree(&model.task_tree, &RenderOptions::default());
        let expected = [
            "Failures grouped by task",
            "├── a",
            "│   └── first",
            "│       second",
            "└── b",
            "    └── E",
            "        at x",
            "",
            "        at y",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_report_header() {
        let model = ReportModel::assemble(&[record(&[], "x")]);
        let single = render_report(&model, &RenderOptions::default());
        assert!(single.starts_with("1 failure\n\nFailures grouped by message\n"));
        assert!(single.contains("\nFailures grouped by task\n"));

        let none = render_report(&ReportModel::assemble(&[]), &RenderOptions::default());
        assert_eq!(
            none,
            "0 failures\n\nFailures grouped by message\n\nFailures grouped by task\n"
        );
    }
}
