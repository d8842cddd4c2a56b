use super::html::escape;
use crate::{
    config::SiteMetadata,
    content::NAV_LINKS,
    core::{
        AssetResolver,
        ProjectRecord,
    },
    view::modal::ImageModal,
};

pub const NOT_FOUND_TITLE: &str = "Project Not Found";

/// Web component behind `<model-viewer>`, loaded only by pages that embed one.
pub const MODEL_VIEWER_SCRIPT: &str = "https://ajax.googleapis.com/ajax/libs/model-viewer/3.3.0/model-viewer.min.js";

/// `<head>` metadata of one generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    pub fn home(metadata: &SiteMetadata) -> Self {
        Self {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            keywords: metadata.keywords.clone(),
        }
    }

    pub fn project(project: &ProjectRecord) -> Self {
        Self {
            title: format!("{} | Portfolio", project.title),
            description: project.short_description.clone(),
            keywords: project.technologies.clone(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            description: String::new(),
            keywords: Vec::new(),
        }
    }
}

pub fn navigation(resolver: &AssetResolver) -> String {
    let home = resolver.resolve("/");
    let mut html = String::from("<nav class=\"site-nav\"><ul>");
    for link in NAV_LINKS {
        html.push_str(&format!(
            "<li><a href=\"{}#{}\">{}</a></li>",
            escape(&home),
            link.anchor,
            escape(link.label)
        ));
    }
    html.push_str("</ul></nav>");
    html
}

/// Full HTML document around `body`. The modal overlay lives once per page.
pub fn document(meta: &PageMeta, author: &str, resolver: &AssetResolver, body: &str) -> String {
    let mut head = format!(
        "<meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title>",
        escape(&meta.title)
    );
    if !meta.description.is_empty() {
        head.push_str(&format!("<meta name=\"description\" content=\"{}\">", escape(&meta.description)));
    }
    if !meta.keywords.is_empty() {
        head.push_str(&format!("<meta name=\"keywords\" content=\"{}\">", escape(&meta.keywords.join(", "))));
    }
    if !author.is_empty() {
        head.push_str(&format!("<meta name=\"author\" content=\"{}\">", escape(author)));
    }
    head.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(&resolver.resolve("/assets/site.css"))
    ));
    if body.contains("<model-viewer") {
        head.push_str(&format!("<script type=\"module\" src=\"{MODEL_VIEWER_SCRIPT}\"></script>"));
    }

    format!(
        "<!doctype html><html lang=\"en\"><head>{head}</head>\
<body data-base-path=\"{}\">{}<main>{body}</main>{}\
<script src=\"{}\" defer></script></body></html>",
        escape(resolver.prefix()),
        navigation(resolver),
        modal_overlay(&ImageModal::new()),
        escape(&resolver.resolve("/assets/site.js")),
    )
}

/// Overlay markup for `modal` as it stands; pages start with it closed.
fn modal_overlay(modal: &ImageModal) -> String {
    let (src, alt) = modal
        .content()
        .map(|image| (image.src.as_str(), image.alt.as_str()))
        .unwrap_or_default();
    format!(
        "<div id=\"image-modal\" class=\"modal-backdrop\" data-close-on-backdrop=\"{}\"{}>\
<button type=\"button\" class=\"modal-close\" aria-label=\"Close\">&times;</button>\
<img class=\"modal-image\" src=\"{}\" alt=\"{}\"></div>",
        modal.config.close_on_outside_click,
        if modal.is_open() { "" } else { " hidden" },
        escape(src),
        escape(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::catalog::tests::record,
        view::modal::{
            EnlargedImage,
            ModalConfig,
        },
    };

    #[test]
    fn project_meta_uses_title_suffix_and_technologies() {
        let mut project = record("demo");
        project.title = "Demo Robot".to_string();
        project.technologies = vec!["Arduino".to_string(), "MATLAB".to_string()];

        let meta = PageMeta::project(&project);
        assert_eq!(meta.title, "Demo Robot | Portfolio");
        assert_eq!(meta.description, "short");
        assert_eq!(meta.keywords, vec!["Arduino", "MATLAB"]);
    }

    #[test]
    fn document_prefixes_assets_and_escapes_head() {
        let meta = PageMeta {
            title: "A <b> & C".to_string(),
            description: String::new(),
            keywords: vec!["x".to_string(), "y".to_string()],
        };
        let html = document(&meta, "", &AssetResolver::new("/repo"), "<p>body</p>");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>A &lt;b&gt; &amp; C</title>"));
        assert!(html.contains("content=\"x, y\""));
        assert!(!html.contains("name=\"description\""));
        assert!(html.contains("href=\"/repo/assets/site.css\""));
        assert!(html.contains("src=\"/repo/assets/site.js\""));
        assert!(html.contains("<main><p>body</p></main>"));
        assert_eq!(html.matches("id=\"image-modal\"").count(), 1);
        assert!(!html.contains(MODEL_VIEWER_SCRIPT));
    }

    #[test]
    fn model_viewer_script_loads_only_with_a_viewer() {
        let meta = PageMeta::not_found();
        let body = "<model-viewer src=\"/m.glb\"></model-viewer>";
        let html = document(&meta, "", &AssetResolver::new(""), body);

        let tag = format!("<script type=\"module\" src=\"{MODEL_VIEWER_SCRIPT}\"></script>");
        assert_eq!(html.matches(&tag).count(), 1);
        assert!(html.find(&tag) < html.find("</head>"));
    }

    #[test]
    fn overlay_follows_modal_state() {
        let mut modal = ImageModal::new();
        let closed = modal_overlay(&modal);
        assert!(closed.contains("data-close-on-backdrop=\"true\" hidden>"));
        assert!(closed.contains("src=\"\""));

        modal.open(EnlargedImage::new("/images/a.png", "A & B"));
        let open = modal_overlay(&modal);
        assert!(!open.contains(" hidden"));
        assert!(open.contains("src=\"/images/a.png\" alt=\"A &amp; B\""));

        let sticky = ImageModal::new().with_config(ModalConfig { close_on_outside_click: false, ..ModalConfig::default() });
        assert!(modal_overlay(&sticky).contains("data-close-on-backdrop=\"false\""));
    }
}
