use serde::{Deserialize, Serialize};

use crate::modules::project_card::{CardAttribute, ProjectCard};
use crate::shared::lenient;

/// One project entry, as stored locally or served remotely.
///
/// Both sources are untrusted: each field decodes on its own and falls back
/// to empty when missing or of the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub timeframe: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "lenient::tag_list")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
    #[serde(
        default,
        rename = "linkLabel",
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_label: Option<String>,
}

impl ProjectRecord {
    /// Builds an unattached card carrying only the fields this record has.
    pub fn to_card(&self) -> ProjectCard {
        let mut card = ProjectCard::new();

        let fields = [
            (CardAttribute::Title, &self.title),
            (CardAttribute::Timeframe, &self.timeframe),
            (CardAttribute::Desc, &self.desc),
            (CardAttribute::Image, &self.image),
            (CardAttribute::Alt, &self.alt),
            (CardAttribute::Link, &self.link),
            (CardAttribute::LinkLabel, &self.link_label),
        ];
        for (attr, value) in fields {
            if let Some(value) = value {
                card.set_attribute(attr.as_str(), value);
            }
        }
        if !self.tags.is_empty() {
            card.set_tags(self.tags.clone());
        }

        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_stored_shape() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "cpu",
            "title": "Custom 16-bit Pipelined Processor",
            "timeframe": "03/2025 – 06/2025",
            "desc": "Five stage pipeline",
            "tags": ["SystemVerilog", "FPGA"],
            "image": "PIPLINE.png",
            "linkLabel": "View related repository"
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("cpu"));
        assert_eq!(record.tags, vec!["SystemVerilog", "FPGA"]);
        assert_eq!(record.link_label.as_deref(), Some("View related repository"));
        assert_eq!(record.link, None);
    }

    #[test]
    fn to_card_sets_only_present_fields() {
        let record = ProjectRecord {
            title: Some("RoundSense".into()),
            tags: vec!["Startup".into()],
            ..Default::default()
        };

        let mut card = record.to_card();
        let view = card.attach().clone();

        assert_eq!(view.title, "RoundSense");
        assert_eq!(view.description, "");
        assert!(view.image_hidden());
        assert!(view.link_hidden());
        assert_eq!(card.get_attribute("desc"), None);
        assert_eq!(card.get_attribute("tags").as_deref(), Some("Startup"));
    }
}
