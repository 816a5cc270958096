//! Plain-text rendering of a parsed wikitext node stream.
//!
//! Inline markup is flattened to display text; block markers (`==`, `*`,
//! `#`, `;`, `:`) are re-emitted in wikitext syntax so the output can be
//! parsed again for block structure.

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
            ensure_block_start(out);
            let marker = "=".repeat(*level as usize);
            let text = render_inline(nodes);
            out.push_str(&marker);
            out.push_str(text.trim());
            out.push_str(&marker);
            out.push('\n');
        }
        Node::UnorderedList { items, .. } => {
            ensure_block_start(out);
            for item in items {
                out.push_str("* ");
                out.push_str(render_inline(&item.nodes).trim());
                out.push('\n');
            }
        }
        Node::OrderedList { items, .. } => {
            ensure_block_start(out);
            for item in items {
                out.push_str("# ");
                out.push_str(render_inline(&item.nodes).trim());
                out.push('\n');
            }
        }
        Node::DefinitionList { items, .. } => {
            ensure_block_start(out);
            for item in items {
                let marker = match item.type_ {
                    DefinitionListItemType::Term => "; ",
                    DefinitionListItemType::Details => ": ",
                };
                out.push_str(marker);
                out.push_str(render_inline(&item.nodes).trim());
                out.push('\n');
            }
        }
        Node::HorizontalDivider { .. } => {
            ensure_block_start(out);
            out.push_str("----\n");
        }
        Node::ParagraphBreak { .. } => out.push_str("\n\n"),
        Node::Preformatted { nodes, .. } => {
            ensure_block_start(out);
            out.push_str(render_inline(nodes).trim_end());
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
            if label.trim().is_empty() {
                out.push_str(target);
            } else {
                out.push_str(&label);
            }
        }
        Node::ExternalLink { nodes, .. } => {
            // `[url label]` - keep the label, drop the bare URL form entirely
            // except when no label exists.
            let inner = render_inline(nodes);
            let inner = inner.trim();
            match inner.split_once(' ') {
                Some((_, label)) if !label.trim().is_empty() => out.push_str(label.trim()),
                _ => out.push_str(inner),
            }
        }
        // Emphasis toggles carry no text of their own; dropping them unwraps
        // the styled run.
        Node::Bold { .. } | Node::Italic { .. } | Node::BoldItalic { .. } => {}
        Node::Tag { name, nodes, .. } => {
            // References are footnote apparatus, not content.
            if name != "ref" && name != "references" {
                out.push_str(&render_inline(nodes));
            }
        }
        // Templates, comments, magic words, images, categories, tables and
        // tag soup contribute nothing to the plain-text rendering.
        _ => {}
    }
}

fn ensure_block_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
