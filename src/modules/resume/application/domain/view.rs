use serde::Serialize;

use super::entities::{EducationEntry, ExperienceEntry, ResumeDocument, SkillEntry};
use crate::shared::html::escape;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationArticle {
    pub school: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    pub heading: String,
    /// The summary, or the period when there is no summary.
    pub subheading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillLine {
    /// Label followed by `": "`.
    pub label: String,
    pub value: String,
}

/// All six rendered resume regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeView {
    pub education: Vec<EducationArticle>,
    pub entrepreneurial: Vec<Article>,
    pub internship: Vec<Article>,
    pub projects: Vec<Article>,
    pub activities: Vec<String>,
    pub skills: Vec<SkillLine>,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl From<&EducationEntry> for EducationArticle {
    fn from(entry: &EducationEntry) -> Self {
        Self {
            school: text(&entry.school),
            degree: text(&entry.degree),
            period: text(&entry.period),
        }
    }
}

impl From<&ExperienceEntry> for Article {
    fn from(entry: &ExperienceEntry) -> Self {
        Self {
            heading: text(&entry.title),
            subheading: entry
                .summary
                .clone()
                .or_else(|| entry.period.clone())
                .unwrap_or_default(),
            bullets: entry.bullets.clone(),
        }
    }
}

impl From<&SkillEntry> for SkillLine {
    fn from(entry: &SkillEntry) -> Self {
        Self {
            label: format!("{}: ", text(&entry.label)),
            value: text(&entry.value),
        }
    }
}

impl From<&ResumeDocument> for ResumeView {
    fn from(doc: &ResumeDocument) -> Self {
        Self {
            education: doc.education.iter().map(EducationArticle::from).collect(),
            entrepreneurial: doc.entrepreneurial.iter().map(Article::from).collect(),
            internship: doc.internship.iter().map(Article::from).collect(),
            projects: doc.projects.iter().map(Article::from).collect(),
            activities: doc.activities.clone(),
            skills: doc.skills.iter().map(SkillLine::from).collect(),
        }
    }
}

fn articles_html(id: &str, articles: &[Article]) -> String {
    let mut html = format!("<div id=\"{}\">", id);
    for article in articles {
        html.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p>",
            escape(&article.heading),
            escape(&article.subheading)
        ));
        if !article.bullets.is_empty() {
            html.push_str("<ul>");
            for bullet in &article.bullets {
                html.push_str(&format!("<li>{}</li>", escape(bullet)));
            }
            html.push_str("</ul>");
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    html
}

impl ResumeView {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"resume-education-list\">");
        for edu in &self.education {
            html.push_str(&format!(
                "<article><h3>{}</h3><p>{}</p><p>{}</p></article>",
                escape(&edu.school),
                escape(&edu.degree),
                escape(&edu.period)
            ));
        }
        html.push_str("</div>\n");

        html.push_str(&articles_html("resume-entrepreneurial-list", &self.entrepreneurial));
        html.push('\n');
        html.push_str(&articles_html("resume-internship-list", &self.internship));
        html.push('\n');
        html.push_str(&articles_html("resume-projects-list", &self.projects));
        html.push('\n');

        html.push_str("<div id=\"resume-activities-list\"><ul>");
        for activity in &self.activities {
            html.push_str(&format!("<li>{}</li>", escape(activity)));
        }
        html.push_str("</ul></div>\n");

        html.push_str("<div id=\"resume-skills-list\"><ul>");
        for skill in &self.skills {
            html.push_str(&format!(
                "<li><b>{}</b>{}</li>",
                escape(&skill.label),
                escape(&skill.value)
            ));
        }
        html.push_str("</ul></div>");

        html
    }
}
