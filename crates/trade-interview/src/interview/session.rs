use super::difficulty::DifficultyController;
use super::domain::{
    round_to_tenth, AnswerQuality, AnswerRecord, DifficultyLevel, InterviewError, JobType,
    MAX_ROUNDS,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// State of one interview. The round index is the length of the record list,
/// so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewSession {
    job_type: JobType,
    records: Vec<AnswerRecord>,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "current_difficulty")]
    difficulty: DifficultyController,
}

impl InterviewSession {
    pub fn new(job_type: JobType, start_time: DateTime<Utc>) -> Self {
        Self {
            job_type,
            records: Vec::with_capacity(MAX_ROUNDS),
            start_time,
            end_time: None,
            difficulty: DifficultyController::new(),
        }
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn round_index(&self) -> usize {
        self.records.len()
    }

    pub fn current_difficulty(&self) -> DifficultyLevel {
        self.difficulty.current()
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn is_complete(&self) -> bool {
        self.round_index() >= MAX_ROUNDS
    }

    /// Elapsed time between start and finish; `None` while the interview is running.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// "Question n of 5" for the round about to be asked.
    pub fn progress_label(&self) -> String {
        let next = (self.round_index() + 1).min(MAX_ROUNDS);
        format!("Question {next} of {MAX_ROUNDS}")
    }

    /// Appends the round. Rejected once all rounds are recorded.
    pub fn record_round(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: DifficultyLevel,
        score: f64,
    ) -> Result<&AnswerRecord, InterviewError> {
        if self.is_complete() {
            return Err(InterviewError::SessionComplete {
                max_rounds: MAX_ROUNDS,
            });
        }

        self.records.push(AnswerRecord {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            score: score.clamp(0.0, 10.0),
        });

        Ok(&self.records[self.records.len() - 1])
    }

    pub(crate) fn advance_difficulty(&mut self, quality: AnswerQuality) -> DifficultyLevel {
        self.difficulty.advance(quality)
    }

    pub(crate) fn finish(&mut self, end_time: DateTime<Utc>) {
        if self.end_time.is_none() {
            self.end_time = Some(end_time);
        }
    }

    pub fn finalize(&self) -> ScoreSummary {
        ScoreSummary::from_records(&self.records)
    }
}

/// Letter grade derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::APlus
        } else if percentage >= 80.0 {
            Self::A
        } else if percentage >= 70.0 {
            Self::B
        } else if percentage >= 60.0 {
            Self::C
        } else if percentage >= 50.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub rounds: usize,
    pub total_points: f64,
    pub max_possible: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub average_per_question: f64,
}

impl ScoreSummary {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        let rounds = records.len();
        let total_points = round_to_tenth(records.iter().map(|record| record.score).sum());
        let max_possible = rounds as f64 * 10.0;

        if rounds == 0 {
            return Self {
                rounds,
                total_points,
                max_possible,
                percentage: 0.0,
                grade: Grade::F,
                average_per_question: 0.0,
            };
        }

        let raw_percentage = total_points * 100.0 / max_possible;

        Self {
            rounds,
            total_points,
            max_possible,
            percentage: round_to_tenth(raw_percentage),
            grade: Grade::from_percentage(raw_percentage),
            average_per_question: round_to_tenth(total_points / rounds as f64),
        }
    }
}
