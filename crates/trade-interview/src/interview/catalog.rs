use super::domain::{DifficultyLevel, JobType};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Keyword sets for one (job, difficulty) partition, stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTiers {
    pub high_value: Vec<String>,
    pub medium_value: Vec<String>,
    pub basic_value: Vec<String>,
}

impl KeywordTiers {
    pub fn new(high_value: &[&str], medium_value: &[&str], basic_value: &[&str]) -> Self {
        fn lowered(words: &[&str]) -> Vec<String> {
            words.iter().map(|word| word.to_lowercase()).collect()
        }

        Self {
            high_value: lowered(high_value),
            medium_value: lowered(medium_value),
            basic_value: lowered(basic_value),
        }
    }
}

/// Question bank and keyword table keyed by (job, difficulty). Never mutated after construction.
#[derive(Debug)]
pub struct InterviewCatalog {
    questions: HashMap<(JobType, DifficultyLevel), Vec<&'static str>>,
    keywords: HashMap<(JobType, DifficultyLevel), KeywordTiers>,
}

impl InterviewCatalog {
    pub fn new(
        questions: HashMap<(JobType, DifficultyLevel), Vec<&'static str>>,
        keywords: HashMap<(JobType, DifficultyLevel), KeywordTiers>,
    ) -> Self {
        Self {
            questions,
            keywords,
        }
    }

    /// The built-in Plumber and Electrician catalog, built on first use.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<InterviewCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(standard_questions(), standard_keywords()))
    }

    pub fn questions(&self, job_type: JobType, difficulty: DifficultyLevel) -> &[&'static str] {
        self.questions
            .get(&(job_type, difficulty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn keywords(&self, job_type: JobType, difficulty: DifficultyLevel) -> Option<&KeywordTiers> {
        self.keywords.get(&(job_type, difficulty))
    }
}

fn standard_questions() -> HashMap<(JobType, DifficultyLevel), Vec<&'static str>> {
    use DifficultyLevel::{Easy, Hard, Medium};
    use JobType::{Electrician, Plumber};

    HashMap::from([
        (
            (Plumber, Easy),
            vec![
                "What is the main purpose of a P-trap in plumbing?",
                "What tools do you commonly use for basic pipe repairs?",
                "How do you turn off the main water supply?",
                "What's the difference between hot and cold water pipes?",
                "What should you do if you find a small water leak?",
            ],
        ),
        (
            (Plumber, Medium),
            vec![
                "How would you diagnose a running toilet problem?",
                "Explain the process of installing a new faucet.",
                "What causes low water pressure and how do you fix it?",
                "How do you properly join copper pipes?",
                "What are the signs of a failing water heater?",
            ],
        ),
        (
            (Plumber, Hard),
            vec![
                "Explain the hydraulic principles behind water hammer and its solutions.",
                "How would you design a drainage system for a multi-story building?",
                "What are the code requirements for backflow prevention systems?",
                "How do you calculate pipe sizing for a commercial building?",
                "Explain the process of hydro jetting and when it's appropriate.",
            ],
        ),
        (
            (Electrician, Easy),
            vec![
                "What is the purpose of a circuit breaker?",
                "What's the difference between AC and DC current?",
                "What tools do you need for basic electrical work?",
                "What safety precautions should you take before working on electrical systems?",
                "What does grounding mean in electrical systems?",
            ],
        ),
        (
            (Electrician, Medium),
            vec![
                "How do you wire a three-way switch?",
                "What causes electrical outlets to stop working?",
                "Explain how to install a ceiling fan with proper wiring.",
                "What are GFCI outlets and where are they required?",
                "How do you troubleshoot a circuit that keeps tripping?",
            ],
        ),
        (
            (Electrician, Hard),
            vec![
                "Explain three-phase power systems and their applications.",
                "How do you design electrical load calculations for a building?",
                "What are the NEC requirements for electrical panel installations?",
                "How do you troubleshoot motor control circuits?",
                "Explain power factor correction and its importance.",
            ],
        ),
    ])
}

fn standard_keywords() -> HashMap<(JobType, DifficultyLevel), KeywordTiers> {
    use DifficultyLevel::{Easy, Hard, Medium};
    use JobType::{Electrician, Plumber};

    HashMap::from([
        (
            (Plumber, Easy),
            KeywordTiers::new(
                &["trap", "sewer", "gas", "prevent", "water", "drain", "pipe"],
                &["plumbing", "tools", "wrench", "valve", "supply", "leak", "repair"],
                &["turn", "off", "main", "hot", "cold", "fix", "check"],
            ),
        ),
        (
            (Plumber, Medium),
            KeywordTiers::new(
                &[
                    "diagnose",
                    "flapper",
                    "chain",
                    "installation",
                    "pressure",
                    "copper",
                    "solder",
                    "temperature",
                ],
                &["toilet", "faucet", "valve", "joint", "pipe", "water", "heater", "flow"],
                &["running", "install", "low", "join", "signs", "failing", "problem"],
            ),
        ),
        (
            (Plumber, Hard),
            KeywordTiers::new(
                &[
                    "hydraulic",
                    "water hammer",
                    "arrestor",
                    "drainage",
                    "code",
                    "backflow",
                    "prevention",
                    "calculation",
                    "hydro jetting",
                ],
                &[
                    "principles",
                    "design",
                    "building",
                    "requirements",
                    "sizing",
                    "commercial",
                    "process",
                ],
                &["explain", "solutions", "system", "appropriate", "when", "why"],
            ),
        ),
        (
            (Electrician, Easy),
            KeywordTiers::new(
                &[
                    "circuit breaker",
                    "overload",
                    "protection",
                    "AC",
                    "DC",
                    "current",
                    "alternating",
                    "direct",
                    "grounding",
                    "safety",
                ],
                &[
                    "electrical",
                    "tools",
                    "multimeter",
                    "wire",
                    "voltage",
                    "safety",
                    "precautions",
                ],
                &["purpose", "difference", "work", "take", "mean", "systems"],
            ),
        ),
        (
            (Electrician, Medium),
            KeywordTiers::new(
                &[
                    "three-way switch",
                    "traveler",
                    "GFCI",
                    "ground fault",
                    "troubleshoot",
                    "circuit",
                    "tripping",
                ],
                &["wire", "outlets", "ceiling fan", "installation", "electrical", "power"],
                &["causes", "install", "required", "working", "problem"],
            ),
        ),
        (
            (Electrician, Hard),
            KeywordTiers::new(
                &[
                    "three-phase",
                    "power systems",
                    "load calculations",
                    "NEC",
                    "motor control",
                    "power factor",
                    "correction",
                ],
                &[
                    "design",
                    "electrical",
                    "building",
                    "requirements",
                    "panel",
                    "installations",
                    "circuits",
                ],
                &["explain", "applications", "troubleshoot", "importance"],
            ),
        ),
    ])
}
