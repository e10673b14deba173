use serde::Serialize;

use super::grades::Grade;

/// Static guidance content associated with a mean-grade band.
///
/// Bundles are process-wide constants assembled at compile time and never
/// mutated at runtime.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub title: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
    pub universities: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub skills: &'static [&'static str],
}

static HIGH_ACHIEVEMENT: RecommendationBundle = RecommendationBundle {
    title: "High Achievement Path",
    description: "Your excellent KCSE performance opens doors to competitive programs in Kenya and internationally.",
    careers: &[
        "Medicine & Surgery",
        "Engineering",
        "Actuarial Science",
        "Law",
        "Architecture",
    ],
    universities: &[
        "University of Nairobi",
        "Kenyatta University",
        "Jomo Kenyatta University (JKUAT)",
        "Moi University",
        "Strathmore University",
    ],
    courses: &[
        "Bachelor of Medicine and Bachelor of Surgery (MBBS)",
        "Bachelor of Engineering (Various specializations)",
        "Bachelor of Science in Actuarial Science",
        "Bachelor of Laws (LLB)",
        "Bachelor of Architecture",
    ],
    skills: &[
        "Critical thinking",
        "Research methodology",
        "Advanced problem-solving",
        "Leadership",
        "Scientific reasoning",
    ],
};

static HIGH_ACHIEVEMENT_MINUS: RecommendationBundle = RecommendationBundle {
    title: "High Achievement Path",
    description: "Your excellent KCSE performance opens doors to competitive programs in Kenya.",
    careers: &[
        "Medicine & Surgery",
        "Engineering",
        "Actuarial Science",
        "Law",
        "Pharmacy",
    ],
    universities: &[
        "University of Nairobi",
        "Kenyatta University",
        "Jomo Kenyatta University (JKUAT)",
        "Moi University",
        "Strathmore University",
    ],
    courses: &[
        "Bachelor of Medicine and Bachelor of Surgery (MBBS)",
        "Bachelor of Engineering (Various specializations)",
        "Bachelor of Science in Actuarial Science",
        "Bachelor of Laws (LLB)",
        "Bachelor of Pharmacy",
    ],
    skills: &[
        "Critical thinking",
        "Research methodology",
        "Advanced problem-solving",
        "Leadership",
        "Scientific reasoning",
    ],
};

static STRONG_ACADEMIC: RecommendationBundle = RecommendationBundle {
    title: "Strong Academic Path",
    description: "Your strong KCSE performance qualifies you for competitive programs at top Kenyan universities.",
    careers: &[
        "Computer Science",
        "Economics",
        "Clinical Medicine",
        "Nursing",
        "Education (Science)",
    ],
    universities: &[
        "University of Nairobi",
        "Kenyatta University",
        "Jomo Kenyatta University (JKUAT)",
        "Moi University",
        "Egerton University",
    ],
    courses: &[
        "Bachelor of Science in Computer Science",
        "Bachelor of Economics",
        "Bachelor of Science in Clinical Medicine",
        "Bachelor of Science in Nursing",
        "Bachelor of Education (Science)",
    ],
    skills: &[
        "Analytical thinking",
        "Problem-solving",
        "Technical skills",
        "Communication",
        "Teamwork",
    ],
};

static SOLID_ACADEMIC: RecommendationBundle = RecommendationBundle {
    title: "Solid Academic Path",
    description: "Your good KCSE performance qualifies you for various degree programs at Kenyan universities.",
    careers: &[
        "Business Administration",
        "Information Technology",
        "Agriculture",
        "Education",
        "Public Health",
    ],
    universities: &[
        "Kenyatta University",
        "Jomo Kenyatta University (JKUAT)",
        "Moi University",
        "Egerton University",
        "Maseno University",
    ],
    courses: &[
        "Bachelor of Business Administration",
        "Bachelor of Science in Information Technology",
        "Bachelor of Science in Agriculture",
        "Bachelor of Education",
        "Bachelor of Science in Public Health",
    ],
    skills: &[
        "Business acumen",
        "Technical skills",
        "Communication",
        "Project management",
        "Critical thinking",
    ],
};

static PROMISING_ACADEMIC: RecommendationBundle = RecommendationBundle {
    title: "Promising Academic Path",
    description: "Your KCSE performance qualifies you for various degree programs at Kenyan universities.",
    careers: &[
        "Business Management",
        "Information Technology",
        "Agriculture",
        "Education",
        "Tourism Management",
    ],
    universities: &[
        "Kenyatta University",
        "Moi University",
        "Egerton University",
        "Maseno University",
        "Technical University of Kenya",
    ],
    courses: &[
        "Bachelor of Business Management",
        "Bachelor of Science in Information Technology",
        "Bachelor of Science in Agriculture",
        "Bachelor of Education",
        "Bachelor of Tourism Management",
    ],
    skills: &[
        "Business skills",
        "Technical knowledge",
        "Communication",
        "Project management",
        "Problem-solving",
    ],
};

static PRACTICAL_ACADEMIC: RecommendationBundle = RecommendationBundle {
    title: "Practical Academic Path",
    description: "Your KCSE performance qualifies you for diploma programs and some degree courses.",
    careers: &[
        "Accounting",
        "Marketing",
        "Human Resource Management",
        "Hospitality Management",
        "Supply Chain Management",
    ],
    universities: &[
        "Technical University of Kenya",
        "Technical University of Mombasa",
        "Kenya Technical Trainers College",
        "Masinde Muliro University",
        "Cooperative University of Kenya",
    ],
    courses: &[
        "Diploma in Business Management",
        "Diploma in Information Technology",
        "Diploma in Human Resource Management",
        "Diploma in Hospitality Management",
        "Diploma in Supply Chain Management",
    ],
    skills: &[
        "Practical skills",
        "Communication",
        "Customer service",
        "Technical knowledge",
        "Teamwork",
    ],
};

static VOCATIONAL: RecommendationBundle = RecommendationBundle {
    title: "Vocational Path",
    description: "Your KCSE performance qualifies you for certificate and diploma programs at technical institutions.",
    careers: &[
        "Accounting Technician",
        "ICT Technician",
        "Electrical Technician",
        "Hospitality",
        "Administrative Assistant",
    ],
    universities: &[
        "Kenya Technical Trainers College",
        "Technical and Vocational Colleges",
        "Kenya Institute of Management",
        "Kenya School of Government",
        "National Industrial Training Authority Institutions",
    ],
    courses: &[
        "Certificate in Business Management",
        "Certificate in Information Technology",
        "Certificate in Electrical Engineering",
        "Certificate in Food & Beverage",
        "Certificate in Office Administration",
    ],
    skills: &[
        "Technical skills",
        "Practical knowledge",
        "Communication",
        "Problem-solving",
        "Customer service",
    ],
};

static VOCATIONAL_TRAINING: RecommendationBundle = RecommendationBundle {
    title: "Vocational Training Path",
    description: "There are many valuable vocational training opportunities available to build practical skills.",
    careers: &[
        "Skilled Trades",
        "Entrepreneurship",
        "Administrative Support",
        "Sales Representative",
        "Artisan",
    ],
    universities: &[
        "Technical and Vocational Colleges",
        "Youth Polytechnics",
        "National Industrial Training Authority Institutions",
        "Kenya Youth Employment Opportunities Project Centers",
        "Vocational Training Centers",
    ],
    courses: &[
        "Certificate in Carpentry & Joinery",
        "Certificate in Masonry",
        "Certificate in Plumbing",
        "Certificate in Tailoring",
        "Certificate in Electrical Installation",
    ],
    skills: &[
        "Practical skills",
        "Hands-on techniques",
        "Customer service",
        "Basic business skills",
        "Problem-solving",
    ],
};

impl RecommendationBundle {
    /// Bundle for a computed mean grade. Grades below C share the fallback.
    pub fn for_grade(grade: Grade) -> &'static RecommendationBundle {
        match grade {
            Grade::A => &HIGH_ACHIEVEMENT,
            Grade::AMinus => &HIGH_ACHIEVEMENT_MINUS,
            Grade::BPlus => &STRONG_ACADEMIC,
            Grade::B => &SOLID_ACADEMIC,
            Grade::BMinus => &PROMISING_ACADEMIC,
            Grade::CPlus => &PRACTICAL_ACADEMIC,
            Grade::C => &VOCATIONAL,
            _ => &VOCATIONAL_TRAINING,
        }
    }

    /// Bundle for a raw grade token, e.g. from a URL parameter.
    ///
    /// This lookup never fails: tokens outside the scale degrade to the
    /// fallback bundle instead of erroring. Validation, if any, belongs
    /// earlier in the pipeline.
    pub fn for_token(token: &str) -> &'static RecommendationBundle {
        match token.trim().parse::<Grade>() {
            Ok(grade) => Self::for_grade(grade),
            Err(_) => &VOCATIONAL_TRAINING,
        }
    }

    pub fn fallback() -> &'static RecommendationBundle {
        &VOCATIONAL_TRAINING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_bands_each_have_a_dedicated_bundle() {
        assert_eq!(RecommendationBundle::for_grade(Grade::A).title, "High Achievement Path");
        assert_eq!(
            RecommendationBundle::for_grade(Grade::BPlus).title,
            "Strong Academic Path"
        );
        assert_eq!(RecommendationBundle::for_grade(Grade::C).title, "Vocational Path");
    }

    #[test]
    fn b_plus_bundle_recommends_computer_science() {
        let bundle = RecommendationBundle::for_grade(Grade::BPlus);
        assert!(bundle.careers.contains(&"Computer Science"));
    }

    #[test]
    fn grades_below_c_share_the_fallback_bundle() {
        for grade in [Grade::CMinus, Grade::DPlus, Grade::D, Grade::DMinus, Grade::E] {
            assert!(std::ptr::eq(
                RecommendationBundle::for_grade(grade),
                RecommendationBundle::fallback()
            ));
        }
    }

    #[test]
    fn unknown_tokens_degrade_to_the_fallback() {
        assert!(std::ptr::eq(
            RecommendationBundle::for_token("Z"),
            RecommendationBundle::for_token("D-")
        ));
        assert!(std::ptr::eq(
            RecommendationBundle::for_token(""),
            RecommendationBundle::fallback()
        ));
    }

    #[test]
    fn token_lookup_matches_grade_lookup_for_known_bands() {
        assert!(std::ptr::eq(
            RecommendationBundle::for_token("B+"),
            RecommendationBundle::for_grade(Grade::BPlus)
        ));
        assert!(std::ptr::eq(
            RecommendationBundle::for_token(" c+ "),
            RecommendationBundle::for_grade(Grade::CPlus)
        ));
    }

    #[test]
    fn every_bundle_lists_all_four_tracks() {
        let bundles = Grade::ordered().map(RecommendationBundle::for_grade);
        for bundle in bundles {
            assert_eq!(bundle.careers.len(), 5);
            assert_eq!(bundle.universities.len(), 5);
            assert_eq!(bundle.courses.len(), 5);
            assert_eq!(bundle.skills.len(), 5);
        }
    }
}
