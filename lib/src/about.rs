//! The about page: fixed literal content plus configuration-resolved links.

use crate::config::SiteConfig;
use crate::content::icon::IconKind;
use crate::content::node::{Block, Inline};
use crate::content::page::{AssetRef, PageMeta, PageModel, SocialLink};

/// The mail link always points at this address, independent of configuration.
const MAIL_HREF: &str = "mailto:pkellar@gmail.com";
const MAIL_LABEL: &str = "pjkellar@gmail.com";

const PORTRAIT: &str = "images/portrait.jpg";

const TITLE: &str = "About | Patrick Kellar";
const DESCRIPTION: &str =
    "I’m Patrick Kellar. I am a fullstack developer working remotely from Ontario, Canada";

/// Builds the about page model.
///
/// Deterministic: the same configuration snapshot always yields the same
/// model. Unset configuration values become empty link destinations; nothing
/// here can fail.
///
/// ## Examples
///
/// ```
/// use mugshot_lib::{SiteConfig, about_page};
///
/// let page = about_page(&SiteConfig::default());
/// assert_eq!(page.social.len(), 5);
/// ```
pub fn about_page(config: &SiteConfig) -> PageModel {
    tracing::debug!("building about page model");

    let meta = PageMeta {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        keywords: [
            "fullstack developer",
            "blog",
            "remote work",
            "canada",
            "technology",
            "php",
            "software development",
            "software engineering",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    };

    PageModel {
        meta,
        portrait: AssetRef::new(PORTRAIT),
        heading: "Hi, I’m Patrick Kellar 👋".to_string(),
        sections: body_sections(),
        social: social_links(config),
    }
}

fn body_sections() -> Vec<Block> {
    vec![
        Block::heading(2, "About Me"),
        Block::text_paragraph(
            "I'm a Senior Software Engineer with over 13 years of experience, currently \
             working remotely from Ontario, Canada. I work on a small team of brilliant \
             developers for a company called QuoteVelocity. We provide real-time web and \
             live transfer prospects. We generate qualified leads and calls of consumers \
             seeking assistance in most financial, automotive, and healthcare verticals. \
             The companies experience spans over a decade in delivering the right \
             customers to the right clients.",
        ),
        Block::text_paragraph(
            "When I am not working you'll find me hanging out with my Wife and two dogs, \
             Bear and Teddy. If the weather is warm you will catch me out for a tour in \
             the twistys on my motorcycle — I recently picked up a 2018 Triumph Street \
             Triple RS 765! Even more recently, my Wife acquired her M2 license and we \
             have been enjoying rides together.",
        ),
        Block::text_paragraph(
            "I enjoy tinkering on wood working projects in the garage, ranging from \
             little things like cutting boards, wood signs, etc. — all the way up to \
             full-on furniture, like tables, desks (like the one my keyboard is on \
             right now).",
        ),
        Block::heading(2, "My Current Stack"),
        Block::paragraph(vec![
            Inline::text(
                "For work, I use PHP and Laravel, Vue.js, and Nova 4. For personal \
                 projects, you'll find me using the TALL stack: Tailwind CSS, Alpine JS, \
                 Laravel, and Livewire. It's fast, scalable, and allows for rapid \
                 development and prototyping of ideas; and with Laravel recently \
                 announcing first-party support for Livewire, it's not going away \
                 anytime soon! If I need to script something, it's either Powershell or \
                 Bash, depending on which OS I am using. I'm also familiar with Python, \
                 I've recently been using it to help fine-tune ",
            ),
            Inline::link("OpenAI", "https://openai.com"),
            Inline::text(" models."),
        ]),
        Block::text_paragraph(
            "I've deployed apps to on-prem servers, Azure app services, AWS EC2 and \
             Lambda functions (Laravel Vapor), Docker, and for rapid development I use \
             services like surge.sh and Vercel to get something up fast and easy.",
        ),
        Block::text_paragraph(
            "For the most part I try to at least stay in touch with the current trends, \
             so I will often dabble in new tech or frameworks just to get a sense for \
             what's out there (like this site I made with Next.js). Well written docs \
             make it so easy to jump into something new and get up-to-speed quickly \
             (I'm looking at you Laravel…).",
        ),
        Block::paragraph(vec![
            Inline::text(
                "I've started looking into open source projects I can contribute to in \
                 my spare time, as well I have a couple ideas floating around that I \
                 think would make for potential packages that I'd like to develop. I've \
                 also committed myself to start ",
            ),
            Inline::link("blogging!", "/articles"),
        ]),
    ]
}

fn social_links(config: &SiteConfig) -> Vec<SocialLink> {
    // Order is part of the page contract: X, Instagram, GitHub, LinkedIn,
    // then the fixed mail link.
    let resolved = [
        ("Follow on X (Twitter)", &config.twitter_url, IconKind::X),
        ("Follow on Instagram", &config.instagram_url, IconKind::Instagram),
        ("Follow on GitHub", &config.github_url, IconKind::GitHub),
        ("Follow on LinkedIn", &config.linkedin_url, IconKind::LinkedIn),
    ];

    resolved
        .into_iter()
        .map(|(label, href, icon)| SocialLink {
            label: label.to_string(),
            href: href.clone(),
            icon,
        })
        .chain(std::iter::once(SocialLink {
            label: MAIL_LABEL.to_string(),
            href: MAIL_HREF.to_string(),
            icon: IconKind::Mail,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_order_is_fixed() {
        let page = about_page(&SiteConfig::default());
        let icons: Vec<IconKind> = page.social.iter().map(|link| link.icon).collect();
        assert_eq!(
            icons,
            [
                IconKind::X,
                IconKind::Instagram,
                IconKind::GitHub,
                IconKind::LinkedIn,
                IconKind::Mail,
            ]
        );
    }

    #[test]
    fn test_mail_link_ignores_configuration() {
        let page = about_page(&SiteConfig {
            twitter_url: "https://x.com/someone".to_string(),
            ..SiteConfig::default()
        });
        let mail = page.social.last().unwrap();
        assert_eq!(mail.href, MAIL_HREF);
        assert_eq!(mail.label, MAIL_LABEL);
    }

    #[test]
    fn test_body_has_exactly_two_inline_links() {
        let page = about_page(&SiteConfig::default());
        let hrefs: Vec<&str> = page
            .sections
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(inlines) => Some(inlines),
                _ => None,
            })
            .flatten()
            .filter_map(|inline| match inline {
                Inline::Link { href, .. } => Some(href.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(hrefs, ["https://openai.com", "/articles"]);
    }

    #[test]
    fn test_builder_is_deterministic() {
        let config = SiteConfig {
            github_url: "https://github.com/pkellar".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(about_page(&config), about_page(&config));
    }
}
