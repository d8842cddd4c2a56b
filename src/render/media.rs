use super::html::escape;
use crate::{
    core::{
        models::PerformanceVideo,
        AssetResolver,
        Video,
    },
    view::{
        detail::{
            Figure,
            Span,
        },
        image_state::{
            ImageKey,
            ImageLoadState,
            ImagePresentation,
            IMAGE_NOT_FOUND,
        },
        video::VISIBILITY_THRESHOLD,
    },
};

fn span_class(span: Span) -> &'static str {
    match span {
        Span::Full => "span-full",
        Span::Half => "span-half",
        Span::TwoThirds => "span-two-thirds",
        Span::OneThird => "span-one-third",
    }
}

/// Clickable image that opens the modal, followed by the hidden placeholder
/// the page swaps in once this key is marked broken.
pub fn enlargeable_image(key: &ImageKey, src: &str, alt: &str, resolver: &AssetResolver) -> String {
    let mut state = ImageLoadState::new();
    let mut html = image_presentation(key, state.presentation(key, src, alt), resolver);
    state.mark_broken(key.clone());
    html.push_str(&image_presentation(key, state.presentation(key, src, alt), resolver));
    html
}

fn image_presentation(key: &ImageKey, presentation: ImagePresentation, resolver: &AssetResolver) -> String {
    let key = escape(key.as_str());
    match presentation {
        ImagePresentation::Image { src, alt } => {
            let src = escape(&resolver.resolve(src));
            let alt = escape(alt);
            format!(
                "<button type=\"button\" class=\"enlargeable\" data-enlarge-src=\"{src}\" data-enlarge-alt=\"{alt}\">\
<img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" data-image-key=\"{key}\">\
<span class=\"enlarge-hint\">Click to enlarge</span></button>"
            )
        }
        ImagePresentation::Placeholder { alt } => format!(
            "<div class=\"image-placeholder\" data-placeholder-for=\"{key}\" hidden>\
<p class=\"placeholder-title\">{IMAGE_NOT_FOUND}</p><p class=\"placeholder-alt\">{}</p></div>",
            escape(alt)
        ),
    }
}

pub fn figure(figure: &Figure, resolver: &AssetResolver) -> String {
    let mut html = format!("<figure class=\"figure {}\">", span_class(figure.span));
    match figure.model3d {
        Some(model) => html.push_str(&format!(
            "<model-viewer src=\"{}\" alt=\"{}\" auto-rotate camera-controls \
interaction-policy=\"allow-when-focused\"></model-viewer>",
            escape(&resolver.resolve(model)),
            escape(figure.alt)
        )),
        None => html.push_str(&enlargeable_image(&figure.key, figure.src, figure.alt, resolver)),
    }
    if let Some(caption) = figure.caption {
        html.push_str(&format!("<figcaption>{}</figcaption>", escape(caption)));
    }
    html.push_str("</figure>");
    html
}

pub fn figure_grid(figures: &[Figure], columns: u8, resolver: &AssetResolver) -> String {
    let mut html = format!("<div class=\"grid cols-{columns}\">");
    for item in figures {
        html.push_str(&figure(item, resolver));
    }
    html.push_str("</div>");
    html
}

/// `<video>` that pauses itself when scrolled out of view.
pub fn auto_pause_video(src: &str, poster: Option<&str>, resolver: &AssetResolver) -> String {
    let src = escape(&resolver.resolve(src));
    let poster = poster
        .map(|poster| format!(" poster=\"{}\"", escape(&resolver.resolve(poster))))
        .unwrap_or_default();
    format!(
        "<video class=\"auto-pause\" data-threshold=\"{VISIBILITY_THRESHOLD}\" controls controlslist=\"nodownload\" \
preload=\"metadata\" playsinline loop{poster}><source src=\"{src}\" type=\"video/mp4\">\
Your browser does not support the video tag.</video>"
    )
}

/// Video card: player, title, optional description and an optional badge.
pub fn video_card(video: &Video, badge: Option<&str>, resolver: &AssetResolver) -> String {
    let mut html = String::from("<div class=\"video-card\">");
    html.push_str(&auto_pause_video(&video.src, video.thumbnail.as_deref(), resolver));
    html.push_str(&format!("<div class=\"video-body\"><h3>{}</h3>", escape(&video.title)));
    if let Some(description) = &video.description {
        html.push_str(&format!("<p>{}</p>", escape(description)));
    }
    if let Some(badge) = badge {
        html.push_str(&format!("<span class=\"chip\">{}</span>", escape(badge)));
    }
    html.push_str("</div></div>");
    html
}

pub fn performance_video(video: &PerformanceVideo, resolver: &AssetResolver) -> String {
    let mut html = String::from("<div class=\"video-card\">");
    html.push_str(&auto_pause_video(&video.src, None, resolver));
    if let Some(title) = &video.title {
        html.push_str(&format!("<div class=\"video-body\"><p>{}</p></div>", escape(title)));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MediaImage;

    #[test]
    fn figures_resolve_sources_and_carry_their_key() {
        let image = MediaImage {
            src: "/images/a.png".to_string(),
            alt: "A \"quoted\" alt".to_string(),
            caption: Some("Figure 1".to_string()),
        };
        let item = Figure::image(ImageKey::new("photo-0"), &image, Span::Half);
        let html = figure(&item, &AssetResolver::new("/repo"));

        assert!(html.contains("class=\"figure span-half\""));
        assert!(html.contains("src=\"/repo/images/a.png\""));
        assert!(html.contains("data-image-key=\"photo-0\""));
        assert!(html.contains("data-placeholder-for=\"photo-0\" hidden"));
        assert!(html.contains("A &quot;quoted&quot; alt"));
        assert!(html.contains("<figcaption>Figure 1</figcaption>"));
    }

    #[test]
    fn broken_presentation_renders_the_placeholder() {
        let key = ImageKey::new("cad-0");
        let html = image_presentation(&key, ImagePresentation::Placeholder { alt: "CAD" }, &AssetResolver::new(""));
        assert!(html.starts_with("<div class=\"image-placeholder\" data-placeholder-for=\"cad-0\""));
        assert!(html.contains(IMAGE_NOT_FOUND));
        assert!(!html.contains("<img"));

        let image = enlargeable_image(&key, "/a.png", "CAD", &AssetResolver::new(""));
        assert!(image.find("data-image-key=\"cad-0\"") < image.find("data-placeholder-for=\"cad-0\""));
    }

    #[test]
    fn videos_are_marked_for_auto_pause() {
        let html = auto_pause_video("/videos/a.mp4", Some("/images/poster.png"), &AssetResolver::new(""));
        assert!(html.contains("class=\"auto-pause\" data-threshold=\"0.5\""));
        assert!(html.contains("poster=\"/images/poster.png\""));
        assert!(html.contains("<source src=\"/videos/a.mp4\""));
    }
}
