mod fields;
pub mod patterns;
mod section;

use serde::{Deserialize, Serialize};

use patterns::Field;

pub use section::{Section, SectionPolicy, segment};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Structured résumé written to `resume.json`.
///
/// Missing keys deserialize to empty values so partial records from older
/// runs still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// Limits and policies applied while building a [`ResumeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub summary_limit: usize,
    pub skills_limit: usize,
    pub highlights_limit: usize,
    pub section_policy: SectionPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            summary_limit: 6,
            skills_limit: 30,
            highlights_limit: 8,
            section_policy: SectionPolicy::Rename,
        }
    }
}

/// Turns a normalized line sequence into a [`ResumeRecord`].
pub struct ResumeExtractor {
    options: ExtractOptions,
}

impl ResumeExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn sections(&self, lines: &[String]) -> Vec<Section> {
        segment(lines, self.options.section_policy)
    }

    pub fn extract(&self, lines: &[String]) -> ResumeRecord {
        let sections = self.sections(lines);
        self.extract_from_sections(lines, &sections)
    }

    /// Build the record from lines that were already segmented.
    pub fn extract_from_sections(&self, lines: &[String], sections: &[Section]) -> ResumeRecord {
        let opts = &self.options;
        let record = ResumeRecord {
            contact: fields::extract_contact(&lines.join("\n")),
            name: fields::guess_name(lines),
            summary: fields::extract_list(sections, Field::Summary, Some(opts.summary_limit)),
            skills: fields::extract_list(sections, Field::Skills, Some(opts.skills_limit)),
            education: fields::extract_list(sections, Field::Education, None),
            certificates: fields::extract_list(sections, Field::Certificates, None),
            experiences: fields::extract_experiences(sections, opts.highlights_limit),
        };

        tracing::debug!(
            sections = sections.len(),
            skills = record.skills.len(),
            experiences = record.experiences.len(),
            "extracted resume record"
        );
        if record.name.is_empty() {
            tracing::warn!("could not guess a name from the document");
        }

        record
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_lines;

    const SAMPLE: &str = "Jane Doe\nExperience\nSenior Engineer\nAcme Corp\n2020-Present\n\
                          Built things\n\nSkills\nC++\nReact\nMySQL\n";

    #[test]
    fn test_sample_resume() {
        let lines = normalize_lines(SAMPLE);
        let extractor = ResumeExtractor::default();

        let sections = extractor.sections(&lines);
        assert_eq!(sections[0].title, "Summary");
        assert_eq!(sections[0].items, vec!["Jane Doe"]);

        let record = extractor.extract(&lines);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.summary, vec!["Jane Doe"]);
        assert_eq!(record.skills, vec!["C++", "React", "MySQL"]);
        assert_eq!(record.experiences.len(), 1);
        assert_eq!(record.experiences[0].title, "Senior Engineer");
        assert_eq!(record.experiences[0].company, "Acme Corp");
        assert_eq!(record.experiences[0].period, "2020-Present");
        assert!(record.education.is_empty());
        assert!(record.certificates.is_empty());
    }

    #[test]
    fn test_no_headers_only_summary() {
        let lines = normalize_lines("Jane Doe\nBuilds software\nLives in Daejeon");
        let extractor = ResumeExtractor::default();

        let sections = extractor.sections(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Summary");
        assert_eq!(sections[0].items, lines);

        let record = extractor.extract(&lines);
        assert_eq!(record.summary.len(), 3);
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
        assert!(record.certificates.is_empty());
        assert!(record.experiences.is_empty());
    }

    #[test]
    fn test_empty_document_degrades() {
        let record = ResumeExtractor::default().extract(&[]);
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_truncation_bounds() {
        let mut raw = String::from("Jane Doe\n");
        for i in 0..10 {
            raw.push_str(&format!("summary line {i}\n"));
        }
        raw.push_str("Experience\nEngineer\nAcme\n");
        for i in 0..20 {
            raw.push_str(&format!("did thing {i}\n"));
        }
        raw.push_str("Skills\n");
        for i in 0..50 {
            raw.push_str(&format!("skill {i}\n"));
        }

        let record = ResumeExtractor::default().extract(&normalize_lines(&raw));
        assert_eq!(record.summary.len(), 6);
        assert_eq!(record.skills.len(), 30);
        assert_eq!(record.skills[0], "skill 0");
        assert_eq!(record.experiences[0].highlights.len(), 8);
    }

    #[test]
    fn test_custom_limits() {
        let options = ExtractOptions {
            skills_limit: 2,
            ..ExtractOptions::default()
        };
        let lines = normalize_lines("Skills\nC++\nC#\nWPF");
        let record = ResumeExtractor::new(options).extract(&lines);
        assert_eq!(record.skills, vec!["C++", "C#"]);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ResumeRecord {
            name: "Jane Doe".into(),
            experiences: vec![Experience {
                period: "2020-Present".into(),
                title: "Engineer".into(),
                ..Experience::default()
            }],
            ..ResumeRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["contact"]["linkedin"], "");
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["experiences"][0]["period"], "2020-Present");
        assert!(value["experiences"][0]["highlights"].as_array().unwrap().is_empty());

        let partial: ResumeRecord = serde_json::from_str(r#"{"skills": ["C++"]}"#).unwrap();
        assert_eq!(partial.skills, vec!["C++"]);
        assert_eq!(partial.contact, Contact::default());
    }
}
