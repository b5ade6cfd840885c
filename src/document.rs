//! A small, typed query layer over a parsed HTML page.
//!
//! The scrapers only ever talk to [`Document`] and [`Node`], so the html
//! parser underneath can change without touching any extraction logic.

use scraper::{ElementRef, Html};

use crate::text_manipulators::extract_text;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }
}

/// An element inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn tag(self) -> &'a str {
        self.0.value().name()
    }

    pub fn has_class(self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn matches(self, tag: &str, class: Option<&str>) -> bool {
        self.tag().eq_ignore_ascii_case(tag) && class.is_none_or(|c| self.has_class(c))
    }

    /// Every descendant element (excluding this one) with the given tag and,
    /// if provided, the given class. Document order.
    pub fn find_all(
        self,
        tag: &'a str,
        class: Option<&'a str>,
    ) -> impl Iterator<Item = Node<'a>> + 'a {
        self.0
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Node)
            .filter(move |node| node.matches(tag, class))
    }

    pub fn find_first(self, tag: &'a str, class: Option<&'a str>) -> Option<Node<'a>> {
        self.find_all(tag, class).next()
    }

    /// Nearest ancestor element with the given tag.
    pub fn parent(self, tag: &str) -> Option<Node<'a>> {
        self.0
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(Node)
            .find(|node| node.matches(tag, None))
    }

    /// Nearest following sibling element with the given tag.
    pub fn next_sibling(self, tag: &str) -> Option<Node<'a>> {
        self.0
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .map(Node)
            .find(|node| node.matches(tag, None))
    }

    pub fn text(self) -> String {
        extract_text(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h3>Page heading</h3>
          <table class="table table-bordered">
            <tr><th class="lead">First</th></tr>
            <tr><td><span class="nro">01</span><span class="other">x</span></td></tr>
            <tr><td><span class="nro"> 02 </span></td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn finds_by_tag_and_class_in_document_order() {
        let document = Document::parse(PAGE);
        let numbers: Vec<String> = document
            .root()
            .find_all("span", Some("nro"))
            .map(|n| n.text())
            .collect();
        assert_eq!(numbers, vec!["01", "02"]);
    }

    #[test]
    fn class_matching_checks_each_token() {
        let document = Document::parse(PAGE);
        assert!(document.root().find_first("table", Some("table-bordered")).is_some());
        assert!(document.root().find_first("table", Some("table-striped")).is_none());
    }

    #[test]
    fn walks_to_parent_row_and_following_rows() {
        let document = Document::parse(PAGE);
        let th = document.root().find_first("th", Some("lead")).unwrap();
        let row = th.parent("tr").unwrap();
        let next = row.next_sibling("tr").unwrap();
        assert_eq!(next.find_first("span", Some("nro")).unwrap().text(), "01");
        let last = next.next_sibling("tr").unwrap();
        assert!(last.next_sibling("tr").is_none());
    }

    #[test]
    fn find_first_excludes_the_node_itself() {
        let document = Document::parse(PAGE);
        let table = document.root().find_first("table", None).unwrap();
        assert!(table.find_first("table", None).is_none());
        assert_eq!(document.root().find_first("h3", None).unwrap().text(), "Page heading");
    }
}
