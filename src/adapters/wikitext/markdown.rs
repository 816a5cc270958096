//! Markdown rendering of a parsed wikitext node stream.
//!
//! Wikitext heading levels start at `=` (level 1, rarely used in articles);
//! the conventional top-level article section is `==`. Markdown depth is
//! therefore `level - 1`, clamped to the `#`..`######` range.

use parse_wiki_text::{DefinitionListItemType, Node};

pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_block(node, &mut out);
    }
    out
}

fn render_block(node: &Node, out: &mut String) {
    match node {
        Node::Heading { level, nodes, .. } => {
            ensure_blank_line(out);
            let depth = (*level as usize).saturating_sub(1).clamp(1, 6);
            out.push_str(&"#".repeat(depth));
            out.push(' ');
            out.push_str(render_inline(nodes).trim());
            out.push_str("\n\n");
        }
        Node::UnorderedList { items, .. } => {
            ensure_blank_line(out);
            for item in items {
                out.push_str("- ");
                out.push_str(render_inline(&item.nodes).trim());
                out.push('\n');
            }
            out.push('\n');
        }
        Node::OrderedList { items, .. } => {
            ensure_blank_line(out);
            for (index, item) in items.iter().enumerate() {
                out.push_str(&format!("{}. ", index + 1));
                out.push_str(render_inline(&item.nodes).trim());
                out.push('\n');
            }
            out.push('\n');
        }
        Node::DefinitionList { items, .. } => {
            ensure_blank_line(out);
            for item in items {
                match item.type_ {
                    DefinitionListItemType::Term => {
                        out.push_str("**");
                        out.push_str(render_inline(&item.nodes).trim());
                        out.push_str("**\n");
                    }
                    DefinitionListItemType::Details => {
                        out.push_str(render_inline(&item.nodes).trim());
                        out.push('\n');
                    }
                }
            }
            out.push('\n');
        }
        Node::HorizontalDivider { .. } => {
            ensure_blank_line(out);
            out.push_str("---\n\n");
        }
        Node::ParagraphBreak { .. } => out.push_str("\n\n"),
        Node::Preformatted { nodes, .. } => {
            ensure_blank_line(out);
            for line in render_inline(nodes).trim_end().lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        inline => render_inline_node(inline, out),
    }
}

fn render_inline(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_inline_node(node, &mut out);
    }
    out
}

fn render_inline_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { value, .. } => out.push_str(value),
        Node::CharacterEntity { character, .. } => out.push(*character),
        Node::Link { target, text, .. } => {
            let label = render_inline(text);
            let label = if label.trim().is_empty() {
                *target
            } else {
                label.trim()
            };
            out.push_str(&format!("[{label}]({target})"));
        }
        Node::ExternalLink { nodes, .. } => {
            let inner = render_inline(nodes);
            let inner = inner.trim();
            match inner.split_once(' ') {
                Some((url, label)) if !label.trim().is_empty() => {
                    out.push_str(&format!("[{}]({url})", label.trim()));
                }
                _ => out.push_str(inner),
            }
        }
        // Wikitext emphasis markers toggle state; emitting the Markdown
        // marker at each toggle produces matched pairs.
        Node::Bold { .. } => out.push_str("**"),
        Node::Italic { .. } => out.push('*'),
        Node::BoldItalic { .. } => out.push_str("***"),
        Node::Tag { name, nodes, .. } => {
            if name != "ref" && name != "references" {
                out.push_str(&render_inline(nodes));
            }
        }
        _ => {}
    }
}

fn ensure_blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}
