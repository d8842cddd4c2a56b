/// Escapes text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{}</h{level}>", escape(text))
}

pub fn bullet_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&escape(item));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

pub fn chips<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str(&format!("<span class=\"chip\">{}</span>", escape(item)));
    }
    html
}

/// Wraps section markup. `id` is used for in-page anchors.
pub fn section(id: Option<&str>, class: &str, inner: &str) -> String {
    match id {
        Some(id) => format!("<section id=\"{}\" class=\"{}\">{}</section>", escape(id), class, inner),
        None => format!("<section class=\"{class}\">{inner}</section>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn lists_escape_each_item() {
        assert_eq!(bullet_list(["a<b", "c"]), "<ul><li>a&lt;b</li><li>c</li></ul>");
    }
}
