//! Built-in sample resume used by `resume-score sample`

use crate::model::resume::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeRecord, Skills,
};

impl ResumeRecord {
    /// A fully filled resume that satisfies every scoring criterion.
    pub fn sample() -> Self {
        Self {
            personal: PersonalInfo {
                name: Some("Priya Raman".to_string()),
                email: Some("priya.raman@example.com".to_string()),
                phone: Some("+1 415 555 0142".to_string()),
                location: Some("Austin, TX".to_string()),
            },
            summary: Some(
                "Backend engineer with 4+ years of experience. Led the rebuild of a payments \
                 platform serving 2M users and shipped tooling adopted across 12 teams."
                    .to_string(),
            ),
            education: vec![EducationEntry {
                id: Some("edu-1".to_string()),
                institution: Some("University of Texas at Austin".to_string()),
                degree: Some("B.S. in Computer Science".to_string()),
                start_date: Some("2016".to_string()),
                end_date: Some("2020".to_string()),
                description: Some("Coursework: Distributed Systems, Databases, Compilers.".to_string()),
            }],
            experience: vec![
                ExperienceEntry {
                    id: Some("exp-1".to_string()),
                    company: Some("Northwind Payments".to_string()),
                    role: Some("Software Engineer".to_string()),
                    start_date: Some("Jul 2020".to_string()),
                    end_date: Some("Present".to_string()),
                    description: Some(
                        "Built a settlement service processing 50K+ transactions per day\n\
                         Reduced p99 API latency by 40% through query batching\n\
                         Led migration from REST to gRPC across 12 services"
                            .to_string(),
                    ),
                },
                ExperienceEntry {
                    id: Some("exp-2".to_string()),
                    company: Some("Contoso Labs".to_string()),
                    role: Some("Engineering Intern".to_string()),
                    start_date: Some("Jan 2020".to_string()),
                    end_date: Some("Jun 2020".to_string()),
                    description: Some(
                        "Developed internal inventory tooling used by 30 analysts\n\
                         Wrote unit tests raising coverage to 92%"
                            .to_string(),
                    ),
                },
            ],
            projects: vec![ProjectEntry {
                id: Some("proj-1".to_string()),
                name: Some("QuickDeploy CLI".to_string()),
                description: Some(
                    "Built an open-source deployment CLI with 200+ GitHub stars".to_string(),
                ),
                tech: None,
                tech_stack: Some(vec!["Rust".to_string(), "Docker".to_string(), "AWS".to_string()]),
                live_url: None,
                github_url: Some("https://github.com/praman/quickdeploy".to_string()),
            }],
            skills: Skills::Text(
                "Rust, Go, PostgreSQL, Kafka, Docker, Kubernetes, AWS, gRPC".to_string(),
            ),
            links: Links {
                github: Some("https://github.com/praman".to_string()),
                linkedin: Some("https://linkedin.com/in/praman".to_string()),
            },
        }
    }
}
