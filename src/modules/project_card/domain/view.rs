use serde::Serialize;

use super::attributes::CardAttributes;
use crate::shared::html::escape;

pub const DEFAULT_LINK_LABEL: &str = "View details";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub label: String,
}

/// What a card shows after a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub timeframe: String,
    pub description: String,
    /// `None` hides the image block.
    pub thumbnail: Option<Thumbnail>,
    /// `None` hides the link.
    pub link: Option<CardLink>,
    pub tags: Vec<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl CardView {
    pub fn from_attributes(attrs: &CardAttributes) -> Self {
        let title = present(&attrs.title).unwrap_or_default().to_string();

        let thumbnail = present(&attrs.image).map(|src| Thumbnail {
            src: src.to_string(),
            alt: present(&attrs.alt).unwrap_or(&title).to_string(),
        });

        let link = present(&attrs.link).map(|href| CardLink {
            href: href.to_string(),
            label: present(&attrs.link_label)
                .unwrap_or(DEFAULT_LINK_LABEL)
                .to_string(),
        });

        Self {
            timeframe: present(&attrs.timeframe).unwrap_or_default().to_string(),
            description: present(&attrs.desc).unwrap_or_default().to_string(),
            thumbnail,
            link,
            tags: attrs.tags.clone(),
            title,
        }
    }

    pub fn image_hidden(&self) -> bool {
        self.thumbnail.is_none()
    }

    pub fn link_hidden(&self) -> bool {
        self.link.is_none()
    }

    /// Card markup with every text value escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<article class=\"card\">");

        html.push_str("<div class=\"header\">");
        match &self.thumbnail {
            Some(thumb) => html.push_str(&format!(
                "<figure class=\"thumb\" part=\"thumbnail\"><picture><img part=\"thumbnail-image\" src=\"{}\" alt=\"{}\"></picture></figure>",
                escape(&thumb.src),
                escape(&thumb.alt)
            )),
            None => html.push_str(
                "<figure class=\"thumb\" part=\"thumbnail\" hidden><picture><img part=\"thumbnail-image\"></picture></figure>",
            ),
        }
        html.push_str(&format!(
            "<div class=\"title-block\"><h2 part=\"title\">{}</h2><p class=\"timeframe\" part=\"timeframe\">{}</p></div>",
            escape(&self.title),
            escape(&self.timeframe)
        ));
        html.push_str("</div>");

        html.push_str(&format!(
            "<div class=\"body\"><p part=\"description\">{}</p></div>",
            escape(&self.description)
        ));

        html.push_str("<div class=\"footer\"><div class=\"tags\" part=\"tags\">");
        for tag in &self.tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
        }
        html.push_str("</div>");
        match &self.link {
            Some(link) => html.push_str(&format!(
                "<a class=\"more\" part=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(&link.href),
                escape(&link.label)
            )),
            None => html.push_str(
                "<a class=\"more\" part=\"link\" href=\"#\" target=\"_blank\" rel=\"noopener\" hidden></a>",
            ),
        }
        html.push_str("</div></article>");

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project_card::domain::attributes::CardAttribute;

    fn attrs(pairs: &[(CardAttribute, &str)]) -> CardAttributes {
        let mut a = CardAttributes::default();
        for (attr, value) in pairs {
            a.set(*attr, value);
        }
        a
    }

    #[test]
    fn missing_optional_text_renders_empty() {
        let view = CardView::from_attributes(&CardAttributes::default());

        assert_eq!(view.title, "");
        assert_eq!(view.timeframe, "");
        assert_eq!(view.description, "");
        assert!(view.image_hidden());
        assert!(view.link_hidden());
        assert!(view.tags.is_empty());
    }

    #[test]
    fn alt_defaults_to_title() {
        let view = CardView::from_attributes(&attrs(&[
            (CardAttribute::Title, "RoundSense"),
            (CardAttribute::Image, "RoundSense.png"),
        ]));

        let thumb = view.thumbnail.unwrap();
        assert_eq!(thumb.src, "RoundSense.png");
        assert_eq!(thumb.alt, "RoundSense");
    }

    #[test]
    fn explicit_alt_wins() {
        let view = CardView::from_attributes(&attrs(&[
            (CardAttribute::Title, "RoundSense"),
            (CardAttribute::Image, "RoundSense.png"),
            (CardAttribute::Alt, "Logo"),
        ]));

        assert_eq!(view.thumbnail.unwrap().alt, "Logo");
    }

    #[test]
    fn link_without_label_uses_default() {
        let view = CardView::from_attributes(&attrs(&[(
            CardAttribute::Link,
            "https://github.com/X1aoshu",
        )]));

        let link = view.link.unwrap();
        assert_eq!(link.href, "https://github.com/X1aoshu");
        assert_eq!(link.label, DEFAULT_LINK_LABEL);
    }

    #[test]
    fn empty_image_value_stays_hidden() {
        let view = CardView::from_attributes(&attrs(&[(CardAttribute::Image, "")]));
        assert!(view.image_hidden());
    }

    #[test]
    fn html_renders_one_badge_per_tag_and_escapes() {
        let view = CardView::from_attributes(&attrs(&[
            (CardAttribute::Title, "<b>CPU</b>"),
            (CardAttribute::Tags, "a, b ,, c"),
        ]));

        let html = view.to_html();
        assert_eq!(html.matches("<span class=\"tag\">").count(), 3);
        assert!(html.contains("&lt;b&gt;CPU&lt;/b&gt;"));
        assert!(html.contains("part=\"thumbnail\" hidden"));
        assert!(html.contains("rel=\"noopener\" hidden"));
    }
}
