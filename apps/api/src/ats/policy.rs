//! Scoring policy: the scale, per-rule points, keyword lists and feedback texts.
//!
//! Points are kept in tenths so sums compare exactly against thresholds.

use serde::Serialize;

/// A sub-score in tenths of a point (`15` = 1.5 points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "f64")]
pub struct Points(u32);

impl Points {
    pub const ZERO: Points = Points(0);

    pub const fn tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    pub const fn whole(points: u32) -> Self {
        Self(points * 10)
    }

    pub fn as_tenths(self) -> u32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl From<Points> for f64 {
    fn from(points: Points) -> f64 {
        points.value()
    }
}

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// Per-category ceiling, pass threshold and normalization target.
///
/// The raw maximum is `category_ceiling × categories`; the aggregate is
/// `round(raw / raw_max × report_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringScale {
    pub category_ceiling: Points,
    pub pass_threshold: Points,
    pub categories: u32,
    pub report_max: u32,
}

impl ScoringScale {
    pub const STANDARD: ScoringScale = ScoringScale {
        category_ceiling: Points::whole(5),
        pass_threshold: Points::whole(4),
        categories: 5,
        report_max: 100,
    };

    pub fn raw_max(&self) -> Points {
        Points(self.category_ceiling.0 * self.categories)
    }

    /// Normalizes a raw total to `0..=report_max`, rounding half up.
    pub fn normalize(&self, raw: Points) -> u32 {
        let max = self.raw_max().0;
        if max == 0 {
            return 0;
        }
        let raw = raw.0.min(max);
        (raw * self.report_max * 2 + max) / (max * 2)
    }

    pub fn passes(&self, score: Points) -> bool {
        score >= self.pass_threshold
    }
}

// Contact information
pub const FULL_NAME_POINTS: Points = Points::tenths(15);
pub const EMAIL_POINTS: Points = Points::tenths(15);
pub const PHONE_POINTS: Points = Points::tenths(10);
pub const LOCATION_POINTS: Points = Points::tenths(5);
pub const LINKEDIN_POINTS: Points = Points::tenths(5);

// Skills: (minimum item count, bonus), highest tier first
pub const SKILL_COUNT_TIERS: &[(usize, Points)] = &[
    (10, Points::tenths(20)),
    (7, Points::tenths(15)),
    (5, Points::tenths(10)),
    (3, Points::tenths(5)),
];
pub const TECHNICAL_SKILL_POINTS: Points = Points::tenths(10);
pub const SOFT_SKILL_POINTS: Points = Points::tenths(10);
pub const SKILL_DIVERSITY_POINTS: Points = Points::tenths(10);

pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "programming",
    "software",
    "technical",
    "development",
    "coding",
    "javascript",
    "python",
    "react",
    "node",
    "sql",
    "database",
];

pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "management",
    "collaboration",
    "analytical",
];

// Work experience: (minimum entry count, bonus), highest tier first
pub const EXPERIENCE_COUNT_TIERS: &[(usize, Points)] = &[
    (4, Points::tenths(20)),
    (3, Points::tenths(15)),
    (2, Points::tenths(10)),
    (1, Points::tenths(5)),
];
/// Descriptions strictly longer than this many Unicode scalar values earn the detail bonus.
pub const DETAILED_DESCRIPTION_CHARS: usize = 100;
pub const DETAILED_DESCRIPTION_POINTS: Points = Points::tenths(3);
pub const ROLE_IDENTIFIED_POINTS: Points = Points::tenths(3);
pub const START_DATE_POINTS: Points = Points::tenths(2);
pub const QUANTIFIED_POINTS: Points = Points::tenths(4);
pub const ACTION_VERB_POINTS: Points = Points::tenths(3);

pub const ACHIEVEMENT_WORDS: &[&str] = &["increased", "improved", "reduced", "achieved"];

pub const ACTION_VERBS: &[&str] = &[
    "Led",
    "Developed",
    "Implemented",
    "Managed",
    "Created",
    "Designed",
    "Built",
    "Optimized",
];

pub const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '–', '>'];

// Education
pub const DEGREE_POINTS: Points = Points::tenths(15);
pub const SCHOOL_POINTS: Points = Points::tenths(15);
pub const GRADUATION_DATE_POINTS: Points = Points::tenths(10);
pub const HIGH_GPA_POINTS: Points = Points::tenths(10);
pub const HIGH_GPA_MIN: f64 = 3.5;

// Formatting & structure
pub const STRUCTURE_BASE_POINTS: f64 = 3.0;
pub const SUMMARY_POINTS: f64 = 1.0;
pub const PROJECTS_POINTS: f64 = 1.0;

/// Score bands used for the badge next to the aggregate score.
pub const STRONG_BAND_MIN: u32 = 80;
pub const FAIR_BAND_MIN: u32 = 60;

/// Feedback copy for one category.
pub struct CategoryCopy {
    pub passing: &'static str,
    pub failing: &'static str,
    pub suggestions: &'static [&'static str],
}

pub const CONTACT_COPY: CategoryCopy = CategoryCopy {
    passing: "Good contact information provided",
    failing: "Missing or incomplete contact information",
    suggestions: &[
        "Include full name, phone number, email, and location",
        "Consider adding LinkedIn profile URL",
        "Ensure email is professional",
        "Add a portfolio or personal website if relevant",
    ],
};

pub const SKILLS_COPY: CategoryCopy = CategoryCopy {
    passing: "Strong skills section with relevant keywords",
    failing: "Skills section needs improvement",
    suggestions: &[
        "Add more relevant technical skills",
        "Include industry-specific keywords",
        "Balance technical skills with soft skills such as leadership or communication",
        "Organize skills by category (Technical, Soft Skills, etc.)",
    ],
};

pub const EXPERIENCE_COPY: CategoryCopy = CategoryCopy {
    passing: "Well-structured work experience section",
    failing: "Work experience section needs enhancement",
    suggestions: &[
        "Include specific dates and duration",
        "Use action verbs to start bullet points",
        "Add quantifiable achievements and metrics",
        "Include 3-5 bullet points per role",
    ],
};

pub const EDUCATION_COPY: CategoryCopy = CategoryCopy {
    passing: "Education section is complete",
    failing: "Education section could be improved",
    suggestions: &[
        "Include degree, institution, and graduation year",
        "Add relevant coursework or academic achievements",
        "Include GPA if above 3.5",
    ],
};

pub const FORMATTING_COPY: CategoryCopy = CategoryCopy {
    passing: "Good formatting and structure",
    failing: "Formatting needs improvement",
    suggestions: &[
        "Fill in contact, experience, education, and skills sections",
        "Add a professional summary",
        "Showcase projects to complement your experience",
        "Use bullet points for easy scanning",
    ],
};

/// Serializable view of the active policy, for auditing.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringPolicy {
    pub scale: ScoringScale,
    pub raw_max: Points,
    pub technical_keywords: &'static [&'static str],
    pub soft_skill_keywords: &'static [&'static str],
    pub achievement_words: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub strong_band_min: u32,
    pub fair_band_min: u32,
}

impl ScoringPolicy {
    pub fn current() -> Self {
        let scale = ScoringScale::STANDARD;
        Self {
            scale,
            raw_max: scale.raw_max(),
            technical_keywords: TECHNICAL_KEYWORDS,
            soft_skill_keywords: SOFT_SKILL_KEYWORDS,
            achievement_words: ACHIEVEMENT_WORDS,
            action_verbs: ACTION_VERBS,
            strong_band_min: STRONG_BAND_MIN,
            fair_band_min: FAIR_BAND_MIN,
        }
    }
}
