// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for the demo binary.

/// One titled demo section with inline SVG and a short note.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) note: String,
    pub(crate) svg: String,
}

/// Assembles the sections into a single self-contained HTML page.
pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         section { margin-bottom: 2.5em; }\n\
         h2 { margin-bottom: 0.2em; }\n\
         p.note { color: #555; margin-top: 0; }\n\
         svg { border: 1px solid #ddd; }\n\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        out.push_str(&format!(
            "<p class=\"note\">{}</p>\n",
            escape_html(&section.note)
        ));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
