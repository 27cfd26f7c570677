use maud::{Markup, html};

/// Render the `<head>` element with meta tags, the site stylesheet and the header script.
pub(crate) fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="main.css";
            link rel="shortcut icon" href="images/favicons/favicon.ico";
            title { (title) " | Greater Love Church" }
            script src="/app.js" defer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_script() {
        let html = head("Sermones").into_string();
        assert!(html.contains("<title>Sermones | Greater Love Church</title>"), "{html}");
        assert!(html.contains(r#"src="/app.js""#), "{html}");
    }

    #[test]
    fn title_is_escaped() {
        let html = head("<script>").into_string();
        assert!(html.contains("&lt;script&gt;"), "{html}");
    }
}
