//! Catalog content: blog articles, guides, calculator tools and FAQs.

use chrono::NaiveDate;

use crate::domain::calculators::CalculatorKind;

/// A titled block of prose.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>, paragraphs: &[&str]) -> Self {
        Self {
            heading: heading.into(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A question with its answer, shown on FAQ blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A blog post served under `/blog/{slug}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Byline; the site organization is credited when absent.
    pub author: Option<String>,
    pub category: String,
    pub published: NaiveDate,
    pub modified: Option<NaiveDate>,
    pub reading_minutes: u32,
    pub sections: Vec<Section>,
}

impl Article {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Most recent date the article changed.
    pub fn last_modified(&self) -> NaiveDate {
        self.modified.unwrap_or(self.published)
    }
}

/// One step of a how-to guide.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideStep {
    pub name: String,
    pub text: String,
}

impl GuideStep {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A long-form guide served under `/guides/{slug}`.
///
/// Guides with steps are published as how-to content, the rest as
/// general learning resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub level: String,
    pub published: NaiveDate,
    pub modified: Option<NaiveDate>,
    pub estimated_minutes: u32,
    pub steps: Vec<GuideStep>,
    pub sections: Vec<Section>,
}

impl Guide {
    pub fn path(&self) -> String {
        format!("/guides/{}", self.slug)
    }

    pub fn last_modified(&self) -> NaiveDate {
        self.modified.unwrap_or(self.published)
    }

    pub fn is_how_to(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Estimated duration as an ISO-8601 duration, e.g. `PT15M`.
    pub fn iso_duration(&self) -> String {
        format!("PT{}M", self.estimated_minutes)
    }
}

/// A calculator landing page served under `/tools/{slug}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub slug: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub calculator: CalculatorKind,
    pub intro: String,
    /// Empty means the default feature list is published.
    pub features: Vec<String>,
    pub faqs: Vec<Faq>,
    pub updated: NaiveDate,
}

impl Tool {
    pub fn path(&self) -> String {
        format!("/tools/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_article_last_modified_falls_back_to_published() {
        let article = Article {
            slug: "post".to_string(),
            title: "Post".to_string(),
            description: "d".to_string(),
            keywords: String::new(),
            author: None,
            category: "Salary".to_string(),
            published: date(2024, 3, 1),
            modified: None,
            reading_minutes: 4,
            sections: vec![],
        };

        assert_eq!(article.last_modified(), date(2024, 3, 1));
        assert_eq!(article.path(), "/blog/post");
    }

    #[test]
    fn test_guide_kind_and_duration() {
        let guide = Guide {
            slug: "negotiate".to_string(),
            title: "Negotiate".to_string(),
            description: "d".to_string(),
            keywords: String::new(),
            level: "Beginner".to_string(),
            published: date(2024, 1, 1),
            modified: Some(date(2024, 2, 1)),
            estimated_minutes: 15,
            steps: vec![GuideStep::new("Research", "Find market data")],
            sections: vec![],
        };

        assert!(guide.is_how_to());
        assert_eq!(guide.iso_duration(), "PT15M");
        assert_eq!(guide.last_modified(), date(2024, 2, 1));
    }
}
