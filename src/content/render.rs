//! Render content blocks to HTML and to plain text.

use std::fmt::Write;

use super::Block;
use crate::utils::html_escape;

/// Inline markup element found while scanning text.
enum Inline<'a> {
    Plain(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    Link { label: &'a str, url: &'a str },
}

/// Split `s` into inline elements. Unmatched markers are kept as plain text.
fn scan(s: &str) -> Vec<Inline<'_>> {
    let mut out = Vec::new();
    let mut rest = s;
    let mut pos = 0usize;

    while pos < rest.len() {
        let tail = &rest[pos..];
        let found = if let Some(after) = tail.strip_prefix("**") {
            after.find("**").map(|end| (Inline::Bold(&after[..end]), 2 + end + 2))
        } else if let Some(after) = tail.strip_prefix('*') {
            after
                .find('*')
                .filter(|end| *end > 0)
                .map(|end| (Inline::Italic(&after[..end]), 1 + end + 1))
        } else if let Some(after) = tail.strip_prefix('[') {
            after.find("](").and_then(|mid| {
                let url_part = &after[mid + 2..];
                url_part.find(')').map(|end| {
                    (
                        Inline::Link {
                            label: &after[..mid],
                            url: &url_part[..end],
                        },
                        1 + mid + 2 + end + 1,
                    )
                })
            })
        } else {
            None
        };

        match found {
            Some((inline, consumed)) => {
                if pos > 0 {
                    out.push(Inline::Plain(&rest[..pos]));
                }
                out.push(inline);
                rest = &rest[pos + consumed..];
                pos = 0;
            }
            None => {
                pos += tail.chars().next().map(char::len_utf8).unwrap_or(1);
            }
        }
    }
    if !rest.is_empty() {
        out.push(Inline::Plain(rest));
    }
    out
}

/// Expand inline markup to escaped HTML.
pub fn inline_html(s: &str) -> String {
    let mut html = String::new();
    for part in scan(s) {
        match part {
            Inline::Plain(t) => html.push_str(&html_escape(t)),
            Inline::Bold(t) => {
                let _ = write!(html, "<strong>{}</strong>", inline_html(t));
            }
            Inline::Italic(t) => {
                let _ = write!(html, "<em>{}</em>", inline_html(t));
            }
            Inline::Link { label, url } => {
                let _ = write!(
                    html,
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                    html_escape(url),
                    inline_html(label)
                );
            }
        }
    }
    html
}

/// Strip inline markup; links become `label (url)`.
pub fn inline_text(s: &str) -> String {
    let mut text = String::new();
    for part in scan(s) {
        match part {
            Inline::Plain(t) => text.push_str(t),
            Inline::Bold(t) | Inline::Italic(t) => text.push_str(&inline_text(t)),
            Inline::Link { label, url } => {
                let _ = write!(text, "{} ({})", inline_text(label), url);
            }
        }
    }
    text
}

/// `(label, url)` of every link in `s`.
pub fn links(s: &str) -> Vec<(&str, &str)> {
    scan(s)
        .into_iter()
        .filter_map(|part| match part {
            Inline::Link { label, url } => Some((label, url)),
            _ => None,
        })
        .collect()
}

/// Render blocks to HTML.
pub fn to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        block_html(block, &mut html);
    }
    html
}

fn block_html(block: &Block, html: &mut String) {
    match block {
        Block::Centered { level, text } => {
            let level = (*level).clamp(1, 3);
            let _ = write!(
                html,
                r#"<h{l} class="centered">{}</h{l}>"#,
                inline_html(text),
                l = level
            );
        }
        Block::Header(t) => {
            let _ = write!(html, "<h2>{}</h2>", inline_html(t));
        }
        Block::Heading(t) => {
            let _ = write!(html, "<h3>{}</h3>", inline_html(t));
        }
        Block::Text(t) => {
            let _ = write!(html, "<p>{}</p>", inline_html(t));
        }
        Block::Bullets(items) => {
            html.push_str("<ul>");
            for item in items.iter() {
                let _ = write!(html, "<li>{}</li>", inline_html(item));
            }
            html.push_str("</ul>");
        }
        Block::Outline(items) => {
            html.push_str("<ol>");
            for (item, sub) in items.iter() {
                let _ = write!(html, "<li>{}", inline_html(item));
                if !sub.is_empty() {
                    html.push_str("<ul>");
                    for s in sub.iter() {
                        let _ = write!(html, "<li>{}</li>", inline_html(s));
                    }
                    html.push_str("</ul>");
                }
                html.push_str("</li>");
            }
            html.push_str("</ol>");
        }
        Block::Quote(lines) => {
            let body: Vec<_> = lines.iter().map(|l| inline_html(l)).collect();
            let _ = write!(html, "<blockquote>{}</blockquote>", body.join("<br>"));
        }
        Block::Table { headers, rows } => {
            html.push_str(r#"<table class="data-table"><thead><tr>"#);
            for h in headers.iter() {
                let _ = write!(html, "<th>{}</th>", html_escape(h));
            }
            html.push_str("</tr></thead><tbody>");
            for row in rows.iter() {
                html.push_str("<tr>");
                for cell in row.iter() {
                    let _ = write!(html, "<td>{}</td>", html_escape(cell));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody></table>");
        }
        Block::Image { src, alt, width } => {
            let _ = write!(
                html,
                r#"<p class="centered"><img src="{}" alt="{}" width="{}"></p>"#,
                html_escape(src),
                html_escape(alt),
                width
            );
        }
        Block::Callout(kind, inner) => {
            let _ = write!(
                html,
                r#"<div class="{}">{}</div>"#,
                kind.css_class(),
                to_html(inner)
            );
        }
        Block::Columns(cols) => {
            let _ = write!(html, r#"<div class="columns columns-{}">"#, cols.len());
            for col in cols.iter() {
                let _ = write!(html, r#"<div class="column">{}</div>"#, to_html(col));
            }
            html.push_str("</div>");
        }
        Block::Expander { summary, blocks } => {
            let _ = write!(
                html,
                r#"<details class="expander"><summary>{}</summary>{}</details>"#,
                inline_html(summary),
                to_html(blocks)
            );
        }
        Block::Tabs(tabs) => {
            // CSS-only tabs: radio buttons share a group name per panel.
            let group = format!("tabs-{}", tabs.len());
            html.push_str(r#"<div class="tabs">"#);
            for (i, tab) in tabs.iter().enumerate() {
                let id = format!("{}-{}", group, i);
                let _ = write!(
                    html,
                    r#"<input type="radio" name="{g}" id="{id}"{checked}><label for="{id}">{label}</label><div class="tab-panel">{body}</div>"#,
                    g = group,
                    id = id,
                    checked = if i == 0 { " checked" } else { "" },
                    label = html_escape(tab.label),
                    body = to_html(tab.blocks)
                );
            }
            html.push_str("</div>");
        }
        Block::Rule => html.push_str("<hr>"),
    }
}

/// Render blocks to plain text for the terminal.
pub fn to_text(blocks: &[Block]) -> String {
    let mut text = String::new();
    for block in blocks {
        block_text(block, &mut text);
    }
    text
}

fn block_text(block: &Block, text: &mut String) {
    match block {
        Block::Centered { text: t, .. } | Block::Header(t) | Block::Heading(t) => {
            let _ = writeln!(text, "{}\n", inline_text(t));
        }
        Block::Text(t) => {
            let _ = writeln!(text, "{}\n", inline_text(t));
        }
        Block::Bullets(items) => {
            for item in items.iter() {
                let _ = writeln!(text, "  - {}", inline_text(item));
            }
            text.push('\n');
        }
        Block::Outline(items) => {
            for (n, (item, sub)) in items.iter().enumerate() {
                let _ = writeln!(text, "  {}. {}", n + 1, inline_text(item));
                for s in sub.iter() {
                    let _ = writeln!(text, "     - {}", inline_text(s));
                }
            }
            text.push('\n');
        }
        Block::Quote(lines) => {
            for line in lines.iter() {
                let _ = writeln!(text, "  > {}", inline_text(line));
            }
            text.push('\n');
        }
        Block::Table { headers, rows } => {
            let widths: Vec<usize> = (0..headers.len())
                .map(|i| {
                    rows.iter()
                        .filter_map(|r| r.get(i))
                        .chain(std::iter::once(&headers[i]))
                        .map(|c| c.chars().count())
                        .max()
                        .unwrap_or(0)
                })
                .collect();
            let fmt_row = |cells: &[&str]| -> String {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{:<width$}", c, width = *w))
                    .collect::<Vec<_>>()
                    .join(" | ")
            };
            let _ = writeln!(text, "  {}", fmt_row(&headers[..]).trim_end());
            let _ = writeln!(
                text,
                "  {}",
                widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("-+-")
            );
            for row in rows.iter() {
                let _ = writeln!(text, "  {}", fmt_row(&row[..]).trim_end());
            }
            text.push('\n');
        }
        Block::Image { alt, src, .. } => {
            let _ = writeln!(text, "[image: {}] {}\n", alt, src);
        }
        Block::Callout(_, inner) => {
            for line in to_text(inner).lines() {
                if line.is_empty() {
                    text.push_str("|\n");
                } else {
                    let _ = writeln!(text, "| {}", line);
                }
            }
            text.push('\n');
        }
        Block::Columns(cols) => {
            for col in cols.iter() {
                text.push_str(&to_text(col));
            }
        }
        Block::Expander { summary, blocks } => {
            let _ = writeln!(text, "{}\n", inline_text(summary));
            text.push_str(&to_text(blocks));
        }
        Block::Tabs(tabs) => {
            for tab in tabs.iter() {
                let _ = writeln!(text, "[{}]\n", tab.label);
                text.push_str(&to_text(tab.blocks));
            }
        }
        Block::Rule => text.push_str("----------------------------------------\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CalloutKind;

    #[test]
    fn test_inline_bold_and_italic() {
        assert_eq!(
            inline_html("**Who:** Tiffin and *others*"),
            "<strong>Who:</strong> Tiffin and <em>others</em>"
        );
        assert_eq!(inline_text("**Who:** Tiffin"), "Who: Tiffin");
    }

    #[test]
    fn test_inline_escapes_html() {
        assert_eq!(inline_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(inline_html("**<b>**"), "<strong>&lt;b&gt;</strong>");
    }

    #[test]
    fn test_inline_link() {
        let s = "[JSTOR](https://www.jstor.org/)";
        assert_eq!(
            inline_html(s),
            r#"<a href="https://www.jstor.org/" target="_blank" rel="noopener">JSTOR</a>"#
        );
        assert_eq!(inline_text(s), "JSTOR (https://www.jstor.org/)");
        assert_eq!(links(s), vec![("JSTOR", "https://www.jstor.org/")]);
    }

    #[test]
    fn test_unmatched_markers_are_literal() {
        assert_eq!(inline_text("5 * 3 and [draft"), "5 * 3 and [draft");
        assert_eq!(inline_html("**open"), "**open");
    }

    #[test]
    fn test_multibyte_text_survives_scanning() {
        assert_eq!(inline_text("❌ Michigan **labeled** 🌾"), "❌ Michigan labeled 🌾");
    }

    #[test]
    fn test_block_html() {
        static BLOCKS: [Block; 2] = [
            Block::Bullets(&["one", "**two**"]),
            Block::Callout(CalloutKind::Warning, &[Block::Text("careful")]),
        ];
        let html = to_html(&BLOCKS);
        assert_eq!(
            html,
            r#"<ul><li>one</li><li><strong>two</strong></li></ul><div class="callout callout-warning"><p>careful</p></div>"#
        );
    }

    #[test]
    fn test_table_text() {
        static BLOCKS: [Block; 1] = [Block::Table {
            headers: &["Year", "Population"],
            rows: &[&["1815", "8000"]],
        }];
        let text = to_text(&BLOCKS);
        assert!(text.contains("Year | Population"));
        assert!(text.contains("1815 | 8000"));
    }
}
