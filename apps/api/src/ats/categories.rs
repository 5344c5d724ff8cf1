//! The five category evaluators. Each is a pure function from the document
//! to a sub-score capped at the scale's category ceiling.

use serde::Serialize;

use crate::ats::models::{filled, ResumeDocument};
use crate::ats::policy::*;
use crate::ats::text::{has_quantified_achievement, parse_leading_number, starts_with_action_verb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Contact Information")]
    Contact,
    #[serde(rename = "Skills & Keywords")]
    Skills,
    #[serde(rename = "Work Experience")]
    Experience,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Formatting & Structure")]
    Formatting,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Contact => "Contact Information",
            Category::Skills => "Skills & Keywords",
            Category::Experience => "Work Experience",
            Category::Education => "Education",
            Category::Formatting => "Formatting & Structure",
        }
    }

    /// Index in the report, matching `EVALUATORS`.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn feedback_copy(self) -> &'static CategoryCopy {
        match self {
            Category::Contact => &CONTACT_COPY,
            Category::Skills => &SKILLS_COPY,
            Category::Experience => &EXPERIENCE_COPY,
            Category::Education => &EDUCATION_COPY,
            Category::Formatting => &FORMATTING_COPY,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub type Evaluator = fn(&ResumeDocument, &ScoringScale) -> Points;

/// Evaluators in report order.
pub const EVALUATORS: [(Category, Evaluator); 5] = [
    (Category::Contact, score_contact),
    (Category::Skills, score_skills),
    (Category::Experience, score_experience),
    (Category::Education, score_education),
    (Category::Formatting, score_formatting),
];

fn award(condition: bool, points: Points) -> Points {
    if condition {
        points
    } else {
        Points::ZERO
    }
}

fn tier_bonus(count: usize, tiers: &[(usize, Points)]) -> Points {
    tiers
        .iter()
        .find(|(min, _)| count >= *min)
        .map_or(Points::ZERO, |(_, bonus)| *bonus)
}

pub fn score_contact(doc: &ResumeDocument, scale: &ScoringScale) -> Points {
    let info = &doc.personal_info;
    let score = award(filled(&info.full_name).is_some(), FULL_NAME_POINTS)
        + award(filled(&info.email).is_some(), EMAIL_POINTS)
        + award(filled(&info.phone).is_some(), PHONE_POINTS)
        + award(filled(&info.location).is_some(), LOCATION_POINTS)
        + award(filled(&info.linked_in).is_some(), LINKEDIN_POINTS);
    score.min(scale.category_ceiling)
}

fn any_skill_contains(skills: &[String], keywords: &[&str]) -> bool {
    skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        keywords.iter().any(|kw| skill.contains(kw))
    })
}

pub fn score_skills(doc: &ResumeDocument, scale: &ScoringScale) -> Points {
    let skills = &doc.skills;
    if skills.is_empty() {
        return Points::ZERO;
    }

    let technical = any_skill_contains(skills, TECHNICAL_KEYWORDS);
    let soft = any_skill_contains(skills, SOFT_SKILL_KEYWORDS);

    let score = tier_bonus(skills.len(), SKILL_COUNT_TIERS)
        + award(technical, TECHNICAL_SKILL_POINTS)
        + award(soft, SOFT_SKILL_POINTS)
        + award(technical && soft, SKILL_DIVERSITY_POINTS);
    score.min(scale.category_ceiling)
}

pub fn score_experience(doc: &ResumeDocument, scale: &ScoringScale) -> Points {
    let entries = &doc.experience;
    if entries.is_empty() {
        return Points::ZERO;
    }

    let per_entry: Points = entries
        .iter()
        .map(|exp| {
            let description = filled(&exp.description).unwrap_or_default();
            // Length in Unicode scalar values, not UTF-16 units or bytes.
            award(
                description.chars().count() > DETAILED_DESCRIPTION_CHARS,
                DETAILED_DESCRIPTION_POINTS,
            ) + award(
                filled(&exp.company).is_some() && filled(&exp.job_title).is_some(),
                ROLE_IDENTIFIED_POINTS,
            ) + award(filled(&exp.start_date).is_some(), START_DATE_POINTS)
                + award(has_quantified_achievement(description), QUANTIFIED_POINTS)
                + award(starts_with_action_verb(description), ACTION_VERB_POINTS)
        })
        .sum();

    (tier_bonus(entries.len(), EXPERIENCE_COUNT_TIERS) + per_entry).min(scale.category_ceiling)
}

pub fn score_education(doc: &ResumeDocument, scale: &ScoringScale) -> Points {
    let per_entry: Points = doc
        .education
        .iter()
        .map(|edu| {
            let high_gpa = filled(&edu.gpa)
                .and_then(parse_leading_number)
                .is_some_and(|gpa| gpa >= HIGH_GPA_MIN);

            award(filled(&edu.degree).is_some(), DEGREE_POINTS)
                + award(filled(&edu.school).is_some(), SCHOOL_POINTS)
                + award(filled(&edu.graduation_date).is_some(), GRADUATION_DATE_POINTS)
                + award(high_gpa, HIGH_GPA_POINTS)
        })
        .sum();
    per_entry.min(scale.category_ceiling)
}

/// Section presence plus summary/projects bonuses, rounded to whole points.
pub fn score_formatting(doc: &ResumeDocument, scale: &ScoringScale) -> Points {
    let sections = [
        doc.personal_info.has_any_field(),
        !doc.experience.is_empty(),
        !doc.education.is_empty(),
        !doc.skills.is_empty(),
    ];
    let present = sections.iter().filter(|p| **p).count();

    let mut score = present as f64 / sections.len() as f64 * STRUCTURE_BASE_POINTS;
    if filled(&doc.personal_info.summary).is_some() {
        score += SUMMARY_POINTS;
    }
    if !doc.projects.is_empty() {
        score += PROJECTS_POINTS;
    }

    // f64::round is half-away-from-zero, which is half-up for non-negative scores.
    Points::whole(score.round() as u32).min(scale.category_ceiling)
}
