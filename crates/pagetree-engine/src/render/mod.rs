use std::fmt::{self, Write};

use crate::models::{Node, TEXT_ATTRIBUTE, Tag};

/// Declaration written before the root of an exported page.
pub const DOCTYPE_DECLARATION: &str = "<!doctype html>\n";

/// Render a tree as HTML markup, one construct per line.
pub fn render(root: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_into(root, &mut out);
    out
}

/// Render a full page: the doctype declaration followed by the tree.
pub fn render_page(root: &Node) -> String {
    let mut out = String::from(DOCTYPE_DECLARATION);
    let _ = render_into(root, &mut out);
    out
}

enum Step<'a> {
    Open(&'a Node),
    Close(&'a Tag),
}

/// Write the markup for `root` to `out`.
///
/// Pre-order: opening tag, then each child's subtree, then the closing tag
/// for closable tags. Text nodes emit only their text and are never
/// descended into. Stops at the first error `out` reports.
pub fn render_into<W: Write>(root: &Node, out: &mut W) -> fmt::Result {
    let mut stack = vec![Step::Open(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open(node) if node.tag.is_text() => {
                writeln!(out, "{}", node.tag.attribute(TEXT_ATTRIBUTE).unwrap_or_default())?;
            }
            Step::Open(node) => {
                write_opening_tag(&node.tag, out)?;
                if node.tag.closable {
                    stack.push(Step::Close(&node.tag));
                }
                stack.extend(node.children.iter().rev().map(Step::Open));
            }
            Step::Close(tag) => writeln!(out, "</{}>", tag.name)?,
        }
    }

    Ok(())
}

fn write_opening_tag<W: Write>(tag: &Tag, out: &mut W) -> fmt::Result {
    write!(out, "<{}", tag.name)?;
    for (name, value) in tag.rendered_attributes() {
        write!(out, " {name} = \"{value}\"")?;
    }
    writeln!(out, ">")
}
