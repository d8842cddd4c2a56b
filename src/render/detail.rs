use super::{
    html::{
        bullet_list,
        chips,
        escape,
        heading,
        section,
    },
    media::{
        auto_pause_video,
        enlargeable_image,
        figure,
        figure_grid,
        performance_video,
        video_card,
    },
};
use crate::{
    core::{
        AssetResolver,
        ProjectRecord,
        Video,
    },
    view::{
        detail::{
            Card,
            DetailPage,
            MetricLine,
            ResultBlock,
            Section,
            BACK_LINK_LABEL,
            BACK_LINK_TARGET,
        },
        image_state::ImageKey,
        technologies::{
            ConceptsToggle,
            VISIBLE_TECHNOLOGIES,
        },
        video::ShowcaseMedia,
    },
};

/// Body of a project page.
pub fn render(page: &DetailPage, resolver: &AssetResolver) -> String {
    let mut html = header(page.project);
    html.push_str(&core_concepts(page.concepts()));
    for item in &page.sections {
        html.push_str(&render_section(item, resolver));
    }
    html.push_str(&achievements(page.achievements()));
    html.push_str(&back_link(resolver));
    html
}

pub fn not_found(resolver: &AssetResolver) -> String {
    section(
        None,
        "not-found",
        &format!(
            "<h1>Project Not Found</h1><p>The project you are looking for does not exist.</p>\
<a class=\"button\" href=\"{}\">{}</a>",
            escape(&resolver.resolve(BACK_LINK_TARGET)),
            BACK_LINK_LABEL
        ),
    )
}

fn header(project: &ProjectRecord) -> String {
    let mut html = format!("<header class=\"project-header\"><h1>{}</h1>", escape(&project.title));
    if let Some(line) = project.course_line() {
        html.push_str(&format!("<p class=\"course\">{}</p>", escape(&line)));
    }
    html.push_str(&format!("<p class=\"description\">{}</p>", escape(&project.full_description)));
    if let Some(github) = &project.github_url {
        html.push_str(&format!(
            "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View on GitHub</a>",
            escape(github)
        ));
    }
    html.push_str("</header>");
    html
}

/// The first five chips are shown; the rest carry `hidden` until the toggle
/// is pressed.
fn core_concepts(technologies: &[String]) -> String {
    if technologies.is_empty() {
        return String::new();
    }
    let collapsed = ConceptsToggle::default();
    let mut expanded = ConceptsToggle::default();
    expanded.toggle();

    let mut inner = format!("{}<div class=\"chips concepts\">", heading(2, "Core Concepts"));
    for (idx, tech) in technologies.iter().enumerate() {
        if idx < VISIBLE_TECHNOLOGIES {
            inner.push_str(&format!("<span class=\"chip\">{}</span>", escape(tech)));
        } else {
            inner.push_str(&format!("<span class=\"chip extra-concept\" hidden>{}</span>", escape(tech)));
        }
    }
    inner.push_str("</div>");
    if let (Some(more), Some(less)) = (collapsed.button_label(technologies), expanded.button_label(technologies)) {
        inner.push_str(&format!(
            "<button type=\"button\" class=\"concepts-toggle\" data-more-label=\"{more}\" data-less-label=\"{less}\">{more}</button>"
        ));
    }
    section(None, "core-concepts", &inner)
}

fn achievements(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut inner = format!("{}<ol class=\"grid cols-2 achievements\">", heading(2, "Key Achievements"));
    for (idx, item) in items.iter().enumerate() {
        inner.push_str(&format!(
            "<li><span class=\"number\">{}</span><p>{}</p></li>",
            idx + 1,
            escape(item)
        ));
    }
    inner.push_str("</ol>");
    section(None, "achievements", &inner)
}

fn back_link(resolver: &AssetResolver) -> String {
    format!(
        "<div class=\"back-link\"><a class=\"button\" href=\"{}\">&larr; {}</a></div>",
        escape(&resolver.resolve(BACK_LINK_TARGET)),
        BACK_LINK_LABEL
    )
}

fn titled(title: Option<&str>, body: String) -> String {
    match title {
        Some(title) => format!("{}{body}", heading(2, title)),
        None => body,
    }
}

pub fn render_section(item: &Section, resolver: &AssetResolver) -> String {
    let body = match item {
        Section::Introduction { text } | Section::Objectives { text, figure: None } => {
            format!("<p class=\"lead\">{}</p>", escape(text))
        }
        Section::Objectives { text, figure: Some(objective_figure) } => format!(
            "<p class=\"lead\">{}</p>{}",
            escape(text),
            figure(objective_figure, resolver)
        ),
        Section::Groups { groups, media, .. } => {
            let mut html = String::from("<div class=\"grid cols-2\">");
            for group in groups.iter() {
                html.push_str(&format!(
                    "<div class=\"card\"><h3>{}</h3>{}</div>",
                    escape(&group.title),
                    bullet_list(group.items.iter().map(String::as_str))
                ));
            }
            html.push_str("</div>");
            if !media.is_empty() {
                html.push_str(&figure_grid(media, 2, resolver));
            }
            html
        }
        Section::PerformanceAndResults { videos, metrics } => {
            let mut html = String::new();
            if !videos.is_empty() {
                html.push_str("<div class=\"grid cols-3\">");
                for video in videos.iter() {
                    html.push_str(&performance_video(video, resolver));
                }
                html.push_str("</div>");
            }
            if !metrics.is_empty() {
                html.push_str(&format!(
                    "<div class=\"card\">{}</div>",
                    bullet_list(metrics.iter().map(String::as_str))
                ));
            }
            html
        }
        Section::Dataset { dataset, figures, emphasize_name } => {
            let name = if *emphasize_name {
                format!("<strong>{}</strong>", escape(&dataset.name))
            } else {
                escape(&dataset.name)
            };
            let mut html = format!(
                "<div class=\"card\"><h3>{name}</h3><p>{}</p>",
                escape(&dataset.description)
            );
            if let Some(configurations) = &dataset.configurations {
                html.push_str(&bullet_list(configurations.iter().map(String::as_str)));
            }
            html.push_str("</div>");
            if !figures.is_empty() {
                html.push_str(&figure_grid(figures, 2, resolver));
            }
            html
        }
        Section::Architectures { architectures } => {
            let mut html = String::from("<div class=\"grid cols-2\">");
            for architecture in architectures.iter() {
                html.push_str(&format!(
                    "<div class=\"card\"><h3>{}</h3><p>{}</p>",
                    escape(&architecture.name),
                    escape(&architecture.description)
                ));
                if let Some(details) = &architecture.details {
                    html.push_str(&bullet_list(details.iter().map(String::as_str)));
                }
                html.push_str("</div>");
            }
            html.push_str("</div>");
            html
        }
        Section::Cards { cards, columns, .. } => card_grid(cards, *columns),
        Section::FigureRow { figures } => {
            let mut html = String::from("<div class=\"figure-row\">");
            for item in figures {
                html.push_str(&figure(item, resolver));
            }
            html.push_str("</div>");
            html
        }
        Section::VideoDemonstration { video, metrics, .. } => {
            let card = video_card(video, None, resolver);
            match metrics {
                Some(grid) => format!(
                    "{card}<div class=\"card\">{}{}</div>",
                    heading(3, grid.title),
                    metric_list(&grid.metrics, grid.columns)
                ),
                None => card,
            }
        }
        Section::Results { blocks, .. } => blocks
            .iter()
            .map(|block| result_block(block, resolver))
            .collect(),
        Section::Gallery { figures, columns, .. } => figure_grid(figures, *columns, resolver),
        Section::VideoShowcase { videos, .. } => {
            let mut html = String::from("<div class=\"showcase\">");
            for (idx, video) in videos.iter().enumerate() {
                html.push_str(&showcase_entry(idx, video, resolver));
            }
            html.push_str("</div>");
            html
        }
        Section::VideoGallery { videos, .. } => {
            let mut html = String::from("<div class=\"grid cols-2\">");
            for video in videos.iter() {
                html.push_str(&video_card(video, video.kind.map(|kind| kind.label()), resolver));
            }
            html.push_str("</div>");
            html
        }
    };
    section(None, "detail-section", &titled(item.title(), body))
}

fn card_grid(cards: &[Card], columns: u8) -> String {
    let mut html = format!("<div class=\"grid cols-{columns}\">");
    for card in cards {
        html.push_str("<div class=\"card\">");
        if let Some(title) = card.title {
            html.push_str(&heading(3, title));
        }
        html.push_str(&bullet_list(card.items.iter().copied()));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn metric_list(metrics: &[MetricLine], columns: u8) -> String {
    let mut html = format!("<dl class=\"metrics grid cols-{columns}\">");
    for metric in metrics {
        html.push_str(&format!(
            "<div class=\"metric\"><dt>{}</dt><dd>{}</dd></div>",
            escape(metric.label),
            escape(&metric.value)
        ));
    }
    html.push_str("</dl>");
    html
}

fn video_with_metrics(video: &Video, title: &str, metrics: &[MetricLine], resolver: &AssetResolver) -> String {
    format!(
        "<div class=\"video-with-metrics\"><div class=\"video-main\">{}</div>\
<aside class=\"card\">{}{}</aside></div>",
        video_card(video, None, resolver),
        heading(3, title),
        metric_list(metrics, 1)
    )
}

fn result_block(block: &ResultBlock, resolver: &AssetResolver) -> String {
    match block {
        ResultBlock::Figures { title, figures } => {
            let grid = figure_grid(figures, figures.len().clamp(1, 2) as u8, resolver);
            match title {
                Some(title) => format!("{}{grid}", heading(3, title)),
                None => grid,
            }
        }
        ResultBlock::Metrics { title, metrics, columns } => format!(
            "<div class=\"card\">{}{}</div>",
            heading(3, title),
            metric_list(metrics, *columns)
        ),
        ResultBlock::VideoWithMetrics { video, metrics_title, metrics } => {
            video_with_metrics(video, metrics_title, metrics, resolver)
        }
        ResultBlock::Video { video } => video_card(video, None, resolver),
    }
}

fn showcase_entry(idx: usize, video: &Video, resolver: &AssetResolver) -> String {
    let media = match ShowcaseMedia::for_video(video) {
        ShowcaseMedia::Image => {
            enlargeable_image(&ImageKey::indexed("showcase", idx), &video.src, &video.title, resolver)
        }
        ShowcaseMedia::Video => auto_pause_video(&video.src, video.thumbnail.as_deref(), resolver),
    };
    let mut html = format!(
        "<article class=\"showcase-entry\"><div class=\"showcase-media\">{media}</div>\
<div class=\"showcase-body\"><h3>{}</h3>",
        escape(&video.title)
    );
    if let Some(text) = video.project_description.as_ref().or(video.description.as_ref()) {
        html.push_str(&format!("<p>{}</p>", escape(text)));
    }
    if let Some(skills) = &video.skills {
        html.push_str(&format!(
            "<div class=\"chips\">{}</div>",
            chips(skills.iter().map(String::as_str))
        ));
    }
    html.push_str("</div></article>");
    html
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{
        core::{
            catalog::tests::record,
            ProjectCatalog,
        },
        persistence,
    };

    fn bundled() -> ProjectCatalog {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/projects.json");
        persistence::load_catalog(&path).unwrap()
    }

    #[test]
    fn header_lists_course_line_and_github() {
        let mut project = record("demo");
        project.course = Some("MIE444".to_string());
        project.institution = Some("University of Toronto".to_string());
        project.github_url = Some("https://github.com/x/demo".to_string());

        let html = header(&project);
        assert!(html.contains("<p class=\"course\">MIE444 • University of Toronto</p>"));
        assert!(html.contains(">View on GitHub</a>"));
    }

    #[test]
    fn concepts_past_five_are_hidden_behind_toggle() {
        let technologies: Vec<String> = (1..=8).map(|n| format!("T{n}")).collect();
        let html = core_concepts(&technologies);

        assert_eq!(html.matches("extra-concept\" hidden").count(), 3);
        assert!(html.contains(">Show 3 More</button>"));
        assert!(html.contains("data-less-label=\"Show Less\""));
        assert!(!core_concepts(&technologies[..5]).contains("concepts-toggle"));
    }

    #[test]
    fn achievements_are_numbered_and_page_ends_with_back_link() {
        let mut project = record("demo");
        project.key_achievements = Some(vec!["First".to_string(), "Second".to_string()]);
        let page = DetailPage::plan(&project);

        let html = render(&page, &AssetResolver::new("/repo"));
        assert!(html.contains("<span class=\"number\">2</span><p>Second</p>"));
        assert!(html.ends_with("&larr; Back to All Projects</a></div>"));
        assert!(html.contains("href=\"/repo/#projects\""));
    }

    #[test]
    fn every_bundled_project_renders_its_section_titles() {
        let catalog = bundled();
        let resolver = AssetResolver::new("");
        for slug in catalog.slugs() {
            let page = DetailPage::resolve(&catalog, slug).unwrap();
            let html = render(&page, &resolver);
            for title in page.section_titles() {
                assert!(html.contains(&heading(2, title)), "{slug} is missing {title}");
            }
            for item in &page.sections {
                for fig in item.figures() {
                    assert!(html.contains(&format!("data-image-key=\"{}\"", fig.key)) || fig.model3d.is_some());
                }
            }
        }
    }

    #[test]
    fn demonstration_videos_keep_title_and_metric_grid() {
        let catalog = bundled();
        let resolver = AssetResolver::new("");

        let whac = render(&DetailPage::resolve(&catalog, "whac-a-mole-embedded-game").unwrap(), &resolver);
        assert!(whac.contains("<h3>Whac-A-Mole Project Presentation</h3>"));
        assert!(whac.contains("<h3>Performance Metrics</h3><dl class=\"metrics grid cols-3\">"));
        assert!(whac.contains("<dt>Response Latency</dt>"));

        let tensile = render(&DetailPage::resolve(&catalog, "mie320-tensile-test").unwrap(), &resolver);
        assert!(tensile.contains("<h3>Tensile Testing Video</h3>"));
        assert!(tensile.contains("<p>Experimental testing of the acrylic tensile specimen to failure</p>"));
        assert!(tensile.contains("<h3>Test Metrics</h3>"));
    }

    #[test]
    fn not_found_links_back_home() {
        let html = not_found(&AssetResolver::new(""));
        assert!(html.contains("<h1>Project Not Found</h1>"));
        assert!(html.contains("href=\"/#projects\""));
    }
}
