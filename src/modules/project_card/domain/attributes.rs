use crate::shared::lenient::split_tags;

/// Attributes a project card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAttribute {
    Title,
    Timeframe,
    Desc,
    Image,
    Alt,
    Link,
    LinkLabel,
    Tags,
}

impl CardAttribute {
    pub const OBSERVED: [CardAttribute; 8] = [
        CardAttribute::Title,
        CardAttribute::Timeframe,
        CardAttribute::Desc,
        CardAttribute::Image,
        CardAttribute::Alt,
        CardAttribute::Link,
        CardAttribute::LinkLabel,
        CardAttribute::Tags,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "timeframe" => Some(Self::Timeframe),
            "desc" => Some(Self::Desc),
            "image" => Some(Self::Image),
            "alt" => Some(Self::Alt),
            "link" => Some(Self::Link),
            "link-label" => Some(Self::LinkLabel),
            "tags" => Some(Self::Tags),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Timeframe => "timeframe",
            Self::Desc => "desc",
            Self::Image => "image",
            Self::Alt => "alt",
            Self::Link => "link",
            Self::LinkLabel => "link-label",
            Self::Tags => "tags",
        }
    }
}

/// Typed card configuration.
///
/// `None` means the attribute is absent. Tags are kept as a list; the
/// comma-joined form only exists at the attribute boundary
/// ([`CardAttributes::set`], [`CardAttributes::get`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAttributes {
    pub title: Option<String>,
    pub timeframe: Option<String>,
    pub desc: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub link: Option<String>,
    pub link_label: Option<String>,
    pub tags: Vec<String>,
}

impl CardAttributes {
    pub fn set(&mut self, attr: CardAttribute, value: &str) {
        let value = value.to_string();
        match attr {
            CardAttribute::Title => self.title = Some(value),
            CardAttribute::Timeframe => self.timeframe = Some(value),
            CardAttribute::Desc => self.desc = Some(value),
            CardAttribute::Image => self.image = Some(value),
            CardAttribute::Alt => self.alt = Some(value),
            CardAttribute::Link => self.link = Some(value),
            CardAttribute::LinkLabel => self.link_label = Some(value),
            CardAttribute::Tags => self.tags = split_tags(&value),
        }
    }

    pub fn remove(&mut self, attr: CardAttribute) {
        match attr {
            CardAttribute::Title => self.title = None,
            CardAttribute::Timeframe => self.timeframe = None,
            CardAttribute::Desc => self.desc = None,
            CardAttribute::Image => self.image = None,
            CardAttribute::Alt => self.alt = None,
            CardAttribute::Link => self.link = None,
            CardAttribute::LinkLabel => self.link_label = None,
            CardAttribute::Tags => self.tags.clear(),
        }
    }

    pub fn get(&self, attr: CardAttribute) -> Option<String> {
        match attr {
            CardAttribute::Title => self.title.clone(),
            CardAttribute::Timeframe => self.timeframe.clone(),
            CardAttribute::Desc => self.desc.clone(),
            CardAttribute::Image => self.image.clone(),
            CardAttribute::Alt => self.alt.clone(),
            CardAttribute::Link => self.link.clone(),
            CardAttribute::LinkLabel => self.link_label.clone(),
            CardAttribute::Tags if self.tags.is_empty() => None,
            CardAttribute::Tags => Some(self.tags.join(", ")),
        }
    }

    /// Present attributes as `(name, value)` pairs in declaration order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        CardAttribute::OBSERVED
            .iter()
            .filter_map(|attr| self.get(*attr).map(|v| (attr.as_str(), v)))
            .collect()
    }
}
