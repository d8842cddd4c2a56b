use super::{
    html::{
        chips,
        escape,
        section,
    },
    media::enlargeable_image,
};
use crate::{
    content::{
        self,
        ABOUT,
        CERTIFICATIONS,
        HERO,
        SKILL_CATEGORIES,
    },
    core::{
        AssetResolver,
        ProjectCatalog,
        ProjectRecord,
    },
    view::{
        contact::{
            ContactForm,
            ContactFormState,
            ACKNOWLEDGEMENT,
            SENDING_LABEL,
            SUBMIT_DELAY,
        },
        image_state::ImageKey,
        project_list::{
            ListControl,
            ListCuration,
            ProjectListState,
            PROJECTS_SECTION_ID,
        },
        technologies::TechnologyChips,
    },
};

pub struct HomeOptions {
    pub show_skills: bool,
}

/// Body of the home page, top to bottom.
pub fn render(
    catalog: &ProjectCatalog,
    curation: &ListCuration,
    options: &HomeOptions,
    resolver: &AssetResolver,
) -> String {
    let mut html = hero();
    html.push_str(&about(resolver));
    if options.show_skills {
        html.push_str(&skills());
    }
    html.push_str(&projects(catalog, curation, resolver));
    html.push_str(&certifications(resolver));
    html.push_str(&contact());
    html
}

fn hero() -> String {
    let mut inner = format!(
        "<h1>{} <span class=\"accent\">{}</span></h1><p class=\"tagline\">{}</p><p>{}</p>\
<a class=\"button\" href=\"#contact\">{}</a><div class=\"social\">",
        escape(HERO.greeting),
        escape(content::OWNER_NAME),
        escape(HERO.tagline),
        escape(HERO.intro),
        escape(HERO.call_to_action)
    );
    for link in HERO.links {
        inner.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{label}\">{label}</a>",
            escape(link.href),
            label = escape(link.label)
        ));
    }
    inner.push_str("</div>");
    section(Some("home"), "hero", &inner)
}

fn about(resolver: &AssetResolver) -> String {
    let mut inner = String::from("<h2>About Me</h2><div class=\"grid cols-2\"><div class=\"profile\">");
    inner.push_str(&enlargeable_image(
        &ImageKey::new("profile"),
        ABOUT.profile_image,
        ABOUT.profile_alt,
        resolver,
    ));
    inner.push_str("</div><div class=\"bio\">");
    for paragraph in ABOUT.bio {
        inner.push_str(&format!(
            "<p>{}<strong>{}</strong>{}</p>",
            escape(paragraph.before),
            escape(paragraph.strong),
            escape(paragraph.after)
        ));
    }
    inner.push_str("</div></div>");

    for (title, entries) in [("Highlights", ABOUT.highlights), ("Core Strengths", ABOUT.core_strengths)] {
        inner.push_str(&format!("<h3>{title}</h3><div class=\"grid cols-2\">"));
        for entry in entries {
            inner.push_str(&format!(
                "<div class=\"card\"><h4>{}</h4><p>{}</p></div>",
                escape(entry.title),
                escape(entry.text)
            ));
        }
        inner.push_str("</div>");
    }
    section(Some("about"), "about", &inner)
}

fn skills() -> String {
    let mut inner = format!("<h2>Skills</h2><p class=\"subtitle\">{}</p><div class=\"grid cols-3\">", content::SKILLS_SUBTITLE);
    for category in SKILL_CATEGORIES {
        inner.push_str(&format!("<div class=\"card\"><h3>{}</h3><ul class=\"skills\">", escape(category.title)));
        for skill in category.skills {
            inner.push_str(&format!(
                "<li><span>{}</span><span class=\"years\">{}</span></li>",
                escape(skill.name),
                skill.years_label()
            ));
        }
        inner.push_str("</ul></div>");
    }
    inner.push_str("</div>");
    section(Some("skills"), "skills", &inner)
}

pub fn project_card(project: &ProjectRecord, resolver: &AssetResolver) -> String {
    let chips_view = TechnologyChips::truncated(&project.technologies);
    let mut html = format!(
        "<article class=\"project-card\"><div class=\"card-image\">{}</div><div class=\"card-body\">\
<h3>{}</h3><p>{}</p><div class=\"chips\">{}",
        enlargeable_image(&ImageKey::new(format!("card-{}", project.slug)), &project.image, &project.title, resolver),
        escape(&project.title),
        escape(&project.short_description),
        chips(chips_view.shown.iter().map(String::as_str)),
    );
    if let Some(more) = chips_view.overflow_label() {
        html.push_str(&format!("<span class=\"chip more\">{more}</span>"));
    }
    html.push_str(&format!(
        "</div><div class=\"card-links\"><a class=\"button\" href=\"{}\">View Details</a>",
        escape(&resolver.resolve(&format!("/projects/{}", project.slug)))
    ));
    if let Some(github) = &project.github_url {
        html.push_str(&format!(
            "<a class=\"button secondary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Code</a>",
            escape(github)
        ));
    }
    html.push_str("</div></div></article>");
    html
}

/// Every visible card is rendered; cards past the initial count start hidden
/// and the toggle reveals them.
fn projects(catalog: &ProjectCatalog, curation: &ListCuration, resolver: &AssetResolver) -> String {
    let visible = curation.visible(catalog);
    let state = ProjectListState::default();
    let shown = state.displayed(&visible, curation).len();

    let mut inner = format!(
        "<h2>{}</h2><p class=\"subtitle\">{}</p><div class=\"grid cols-2 project-grid\">",
        escape(content::PROJECTS_TITLE),
        escape(content::PROJECTS_SUBTITLE)
    );
    for (idx, project) in visible.iter().enumerate() {
        let card = project_card(project, resolver);
        if idx < shown {
            inner.push_str(&card);
        } else {
            inner.push_str(&format!("<div class=\"extra-project\" hidden>{card}</div>"));
        }
    }
    inner.push_str("</div>");

    if let Some(control) = state.control(visible.len(), curation) {
        inner.push_str(&format!(
            "<button type=\"button\" class=\"button list-toggle\" data-more-label=\"{}\" data-less-label=\"{}\" \
data-scroll-target=\"{PROJECTS_SECTION_ID}\">{}</button>",
            ListControl::SeeMore.label(),
            ListControl::ShowLess.label(),
            control.label()
        ));
    }
    section(Some(PROJECTS_SECTION_ID), "projects", &inner)
}

fn certifications(resolver: &AssetResolver) -> String {
    let mut inner = format!(
        "<h2>{}</h2><p class=\"subtitle\">{}</p><div class=\"grid cols-3\">",
        escape(content::CERTIFICATIONS_TITLE),
        escape(content::CERTIFICATIONS_SUBTITLE)
    );
    for (idx, cert) in CERTIFICATIONS.iter().enumerate() {
        inner.push_str(&format!(
            "<article class=\"card\"><div class=\"card-image\">{}</div><h3>{}</h3>\
<p class=\"institution\">{}</p><p class=\"year\">{}</p><p>{}</p></article>",
            enlargeable_image(&ImageKey::indexed("cert", idx), cert.image, cert.alt, resolver),
            escape(cert.title),
            escape(cert.institution),
            escape(cert.year),
            escape(cert.description)
        ));
    }
    inner.push_str("</div>");
    section(Some("certifications"), "certifications", &inner)
}

fn contact() -> String {
    let channels = content::CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            let value = if channel.title == "Email" {
                format!("<a href=\"mailto:{0}\">{0}</a>", escape(channel.text))
            } else {
                escape(channel.text)
            };
            format!("<li><strong>{}</strong> {}</li>", escape(channel.title), value)
        })
        .collect::<String>();

    let inner = format!(
        "<h2>{}</h2><p class=\"subtitle\">{}</p><div class=\"grid cols-2\">\
<div class=\"card\"><h3>Contact Information</h3><ul class=\"channels\">{channels}</ul></div>\
<form class=\"contact-form\" novalidate data-delay-ms=\"{}\" data-ack=\"{}\" data-required=\"{}\">\
<label>Name<input name=\"name\" type=\"text\" required></label>\
<label>Email<input name=\"email\" type=\"email\" required></label>\
<label>Message<textarea name=\"message\" rows=\"5\" required></textarea></label>\
<button type=\"submit\" class=\"button\" data-sending-label=\"{}\">{}</button></form></div>",
        escape(content::CONTACT_TITLE),
        escape(content::CONTACT_SUBTITLE),
        SUBMIT_DELAY.as_millis(),
        escape(ACKNOWLEDGEMENT),
        ContactForm::FIELDS.join(" "),
        escape(SENDING_LABEL),
        escape(ContactFormState::default().button_label())
    );
    section(Some("contact"), "contact", &inner)
}

/// Plain list of card titles, for logs and `folio list`.
pub fn visible_titles(catalog: &ProjectCatalog, curation: &ListCuration) -> Vec<String> {
    curation.visible(catalog).iter().map(|project| project.title.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::record;

    fn catalog(slugs: &[&str]) -> ProjectCatalog {
        ProjectCatalog::new(slugs.iter().map(|slug| record(slug)).collect()).unwrap()
    }

    fn curation(order: &[&str], hidden: &[&str], initial_count: usize) -> ListCuration {
        ListCuration::new(
            order.iter().map(|s| s.to_string()).collect(),
            hidden.iter().map(|s| s.to_string()),
            initial_count,
        )
    }

    #[test]
    fn cards_past_the_initial_count_start_hidden() {
        let catalog = catalog(&["a", "b", "c"]);
        let html = projects(&catalog, &curation(&["a", "b", "c"], &[], 2), &AssetResolver::new(""));

        assert_eq!(html.matches("class=\"project-card\"").count(), 3);
        assert_eq!(html.matches("class=\"extra-project\" hidden").count(), 1);
        assert!(html.contains(">See More Projects</button>"));
        assert!(html.contains("data-less-label=\"Show Less\""));
    }

    #[test]
    fn no_toggle_when_everything_fits() {
        let catalog = catalog(&["a", "b"]);
        let html = projects(&catalog, &curation(&["a", "b", "c"], &["b"], 6), &AssetResolver::new(""));

        assert_eq!(html.matches("class=\"project-card\"").count(), 1);
        assert!(!html.contains("list-toggle"));
    }

    #[test]
    fn card_links_and_chips() {
        let mut project = record("demo");
        project.technologies = (1..=7).map(|n| format!("T{n}")).collect();
        project.github_url = Some("https://github.com/x/demo".to_string());

        let html = project_card(&project, &AssetResolver::new("/repo"));
        assert_eq!(html.matches("<span class=\"chip\">").count(), 5);
        assert!(html.contains("<span class=\"chip more\">+2 more</span>"));
        assert!(html.contains("href=\"/repo/projects/demo\">View Details</a>"));
        assert!(html.contains(">Code</a>"));
        assert!(html.contains("src=\"/repo/images/demo.png\""));
    }

    #[test]
    fn skills_only_when_enabled() {
        let catalog = catalog(&["a"]);
        let curation = curation(&["a"], &[], 6);
        let resolver = AssetResolver::new("");

        let without = render(&catalog, &curation, &HomeOptions { show_skills: false }, &resolver);
        let with = render(&catalog, &curation, &HomeOptions { show_skills: true }, &resolver);
        assert!(!without.contains("id=\"skills\""));
        assert!(with.contains("id=\"skills\""));
        assert!(with.contains("id=\"contact\""));
        assert!(with.contains("Send Message"));
    }

    #[test]
    fn contact_form_carries_submit_behavior() {
        let html = contact();
        assert!(html.contains("data-delay-ms=\"1000\""));
        assert!(html.contains(&format!("data-ack=\"{ACKNOWLEDGEMENT}\"")));
        assert!(html.contains("data-required=\"name email message\""));
        assert!(html.contains("data-sending-label=\"Sending...\">Send Message</button>"));
    }
}
