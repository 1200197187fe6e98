use scraper::{Html, Node, Selector};

// Page chrome that never carries documentation content.
const SKIPPED_ELEMENTS: [&str; 6] = ["script", "style", "nav", "footer", "header", "aside"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub text: String,
}

/// Reduces an HTML document to its title and the visible text outside page chrome,
/// each text run trimmed and joined with single spaces.
pub fn extract(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
        })
        .unwrap_or_default();

    let mut parts = Vec::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_chrome = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| SKIPPED_ELEMENTS.contains(&element.name()))
        });
        let trimmed = text.trim();
        if !in_chrome && !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    PageContent {
        title,
        text: parts.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_scripts_and_navigation() {
        let page = extract(
            r#"<html><head><title> JPA @Id </title><style>p{}</style></head>
            <body>
              <header>Site header</header>
              <nav><a href="/">Home</a></nav>
              <main><h1>Identifiers</h1><p>Every entity needs an <code>@Id</code>.</p></main>
              <aside>Ads</aside>
              <script>track()</script>
              <footer>Copyright</footer>
            </body></html>"#,
        );

        assert_eq!(page.title, "JPA @Id");
        assert_eq!(page.text, "JPA @Id Identifiers Every entity needs an @Id .");
    }

    #[test]
    fn should_handle_pages_without_title() {
        let page = extract("<p>plain</p>");
        assert_eq!(page.title, "");
        assert_eq!(page.text, "plain");
    }
}
