use crate::compiler::{
    Fragment,
    links::{Link, LinkRecord},
};

use super::{
    kinds::{LinkKind, WikiLink},
    parse_inline,
    types::InlineNode,
};

/// Compiles one block's text to HTML, returning the links it contains.
pub fn compile_inline(s: &str) -> Fragment {
    let mut frag = Fragment::default();
    for node in parse_inline(s) {
        render_node(&node, &mut frag.html, &mut frag.links);
    }
    frag
}

fn render_node(node: &InlineNode<'_>, html: &mut String, links: &mut LinkRecord) {
    match *node {
        InlineNode::Text(text) => html.push_str(text),
        InlineNode::Span { kind, inner } => {
            let tag = kind.tag();
            html.push_str(&format!("<{tag}>{inner}</{tag}>"));
        }
        InlineNode::Link {
            kind: LinkKind::External,
            text,
            destination,
        } => {
            html.push_str(&format!(
                r#"<a href="{destination}" target="_blank" rel="noopener noreferrer">{text}</a>"#
            ));
            links.external.push(Link::new(text, destination));
        }
        InlineNode::Link {
            kind: LinkKind::Image,
            text,
            destination,
        } => {
            html.push_str(&format!(r#"<img src="{destination}" alt="{text}">"#));
            links.external.push(Link::new(text, destination));
        }
        InlineNode::Link {
            kind: LinkKind::Wiki,
            text: name,
            ..
        } => {
            let href = WikiLink::href(name);
            let display = WikiLink::display_name(name);
            html.push_str(&format!(r#"<a href="{href}">{display}</a>"#));
            links.internal.push(Link::new(display, href));
        }
    }
}
