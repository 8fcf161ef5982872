use crate::models::cv::{
    CvDocument, EducationEntry, ExperienceEntry, PersonalInfo, SkillEntry, SkillLevel,
    DEFAULT_THEME_COLOR,
};

/// Sample résumé used when no persisted snapshot is available.
pub fn seed_document() -> CvDocument {
    CvDocument {
        personal_info: PersonalInfo {
            full_name: "Alex Morgan".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            email: "alex.morgan@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "alexmorgan.dev".to_string(),
            linkedin: "linkedin.com/in/alexmorgan".to_string(),
            summary: "Passionate Senior Software Engineer with over 6 years of experience in \
                      building scalable web applications. Expert in React, TypeScript, and Cloud \
                      Architecture. Proven track record of leading teams and delivering \
                      high-impact projects."
                .to_string(),
            photo: None,
        },
        experience: vec![
            ExperienceEntry {
                id: "1".to_string(),
                company: "TechNova Solutions".to_string(),
                role: "Senior Frontend Developer".to_string(),
                location: "San Francisco, CA".to_string(),
                start_date: "2021-03".to_string(),
                end_date: String::new(),
                is_current: true,
                description: "• Led the migration of a legacy angular app to React 18, improving load times by 40%.\n\
                              • Mentored junior developers and established code quality standards.\n\
                              • Implemented a new design system using Tailwind CSS used across 5 different products."
                    .to_string(),
            },
            ExperienceEntry {
                id: "2".to_string(),
                company: "WebFlow Inc.".to_string(),
                role: "Software Engineer".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "2018-06".to_string(),
                end_date: "2021-02".to_string(),
                is_current: false,
                description: "• Developed and maintained customer-facing e-commerce platforms.\n\
                              • Integrated third-party payment gateways (Stripe, PayPal).\n\
                              • Collaborated with UX designers to implement responsive designs."
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            id: "1".to_string(),
            school: "University of Texas at Austin".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014-09".to_string(),
            end_date: "2018-05".to_string(),
            is_current: false,
            location: "Austin, TX".to_string(),
        }],
        skills: vec![
            skill("1", "React", SkillLevel::Expert),
            skill("2", "TypeScript", SkillLevel::Expert),
            skill("3", "Node.js", SkillLevel::Intermediate),
            skill("4", "AWS", SkillLevel::Intermediate),
        ],
        custom_sections: Vec::new(),
        theme_color: DEFAULT_THEME_COLOR.to_string(),
        template_id: "modern".to_string(),
    }
}

fn skill(id: &str, name: &str, level: SkillLevel) -> SkillEntry {
    SkillEntry {
        id: id.to_string(),
        name: name.to_string(),
        level,
    }
}
