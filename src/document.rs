use scraper::{ElementRef, Html, Node, Selector};

/// Parsed HTML page, owned for the duration of one extraction call.
///
/// Extraction logic depends only on the traversal operations exposed here,
/// so the parsing backend stays swappable.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Raw text of every `<script type="application/ld+json">` element,
    /// in document order.
    pub fn linked_data_blocks(&self) -> Vec<String> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();
        self.html
            .select(&selector)
            .map(|script| script.inner_html())
            .collect()
    }

    /// Trimmed text of every `<li>` descendant of the element with the given
    /// id, in document order. Items that trim to nothing are dropped.
    pub fn list_items(&self, region_id: &str) -> Vec<String> {
        let Ok(region_selector) = Selector::parse(&format!("#{region_id}")) else {
            return Vec::new();
        };
        let Some(region) = self.html.select(&region_selector).next() else {
            return Vec::new();
        };

        let li_selector = Selector::parse("li").unwrap();
        region
            .select(&li_selector)
            .map(|li| li.text().collect::<Vec<_>>().join(" ").trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Visible page text with non-content regions stripped out and all
    /// whitespace runs collapsed to single spaces.
    ///
    /// Text inside script, style, header, footer, nav, aside, noscript,
    /// iframe and svg subtrees never reaches the result.
    pub fn visible_text(&self) -> String {
        let mut parts = Vec::new();
        collect_text(&self.html.root_element(), &mut parts);
        parts
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_non_content(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "header" | "footer" | "nav" | "aside" | "noscript" | "iframe" | "svg"
    )
}

fn collect_text(element: &ElementRef, parts: &mut Vec<String>) {
    if is_non_content(element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, parts);
                }
            }
            _ => {}
        }
    }
}
