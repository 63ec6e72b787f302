//! Markdown rendering of an assembled page tree.

use confluence_tree::PageNode;

/// Renders a tree as one markdown document: each node becomes a heading at
/// its depth (capped at `######`) with its content beneath, children in
/// source order. Error stubs render like any other content.
pub fn render_tree(root: &PageNode) -> String {
    let mut out = String::new();
    render_node(root, 1, &mut out);
    out.trim_end().to_string()
}

fn render_node(node: &PageNode, level: usize, out: &mut String) {
    out.push_str(&"#".repeat(level.min(6)));
    out.push(' ');
    out.push_str(&node.title);
    out.push_str("\n\n");

    let content = node.content.trim();
    if !content.is_empty() {
        out.push_str(content);
        out.push_str("\n\n");
    }

    for child in &node.children {
        render_node(child, level + 1, out);
    }
}
