use super::summary::InterviewReport;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    #[serde(alias = "md")]
    Markdown,
    Csv,
    Json,
}

impl ReportFormat {
    pub const fn ordered() -> [Self; 3] {
        [Self::Markdown, Self::Csv, Self::Json]
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(label)
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unknown report format '{0}' (expected markdown, csv, or json)")]
    UnknownFormat(String),
    #[error("failed to write csv report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode json report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format report: {0}")]
    Format(#[from] fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InterviewReport {
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    pub fn render(&self, format: ReportFormat) -> Result<Vec<u8>, ReportError> {
        match format {
            ReportFormat::Markdown => Ok(self.to_markdown()?.into_bytes()),
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Json => Ok(serde_json::to_vec_pretty(self)?),
        }
    }

    fn to_markdown(&self) -> Result<String, fmt::Error> {
        let details = &self.details;
        let mut out = String::new();

        writeln!(out, "# {}", self.title)?;
        writeln!(out)?;
        writeln!(out, "| | |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Job Type | {} |", details.job_label)?;
        writeln!(out, "| Date | {} |", details.date.format("%Y-%m-%d"))?;
        writeln!(out, "| Duration | {} |", details.duration_label)?;
        writeln!(out, "| Questions Asked | {} |", details.questions_asked)?;
        writeln!(
            out,
            "| Overall Score | {:.1}/{:.0} ({:.1}%) |",
            details.total_points, details.max_possible, details.percentage
        )?;
        writeln!(out, "| Grade | {} |", details.grade_label)?;
        writeln!(
            out,
            "| Average per Question | {:.1}/10 |",
            details.average_per_question
        )?;
        writeln!(out)?;

        writeln!(out, "## Performance Analysis")?;
        writeln!(out)?;
        writeln!(
            out,
            "- **Overall Performance:** {} ({:.1}%)",
            details.grade_label, details.percentage
        )?;
        writeln!(out, "- **Strengths:** {}", self.analysis.strengths)?;
        writeln!(
            out,
            "- **Areas for Improvement:** {}",
            self.analysis.areas_for_improvement
        )?;
        writeln!(out)?;
        writeln!(out, "> {}", self.feedback_message)?;
        writeln!(out)?;

        writeln!(out, "### Score Breakdown")?;
        writeln!(out)?;
        writeln!(out, "| Question | Difficulty | Score | Answer Quality |")?;
        writeln!(out, "|---|---|---|---|")?;
        for entry in &self.rounds {
            writeln!(
                out,
                "| Q{} | {} | {:.1}/10 | {} |",
                entry.round, entry.difficulty_label, entry.score, entry.rating_label
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Interview Questions & Answers")?;
        for entry in &self.rounds {
            writeln!(out)?;
            writeln!(
                out,
                "**Question {} (Difficulty: {}) - Score: {:.1}/10**",
                entry.round, entry.difficulty_label, entry.score
            )?;
            writeln!(out)?;
            writeln!(out, "{}", entry.question)?;
            writeln!(out)?;
            writeln!(out, "**Answer:**")?;
            writeln!(out)?;
            let mut lines = entry.answer.lines().peekable();
            if lines.peek().is_none() {
                writeln!(out, ">")?;
            }
            for line in lines {
                writeln!(out, "> {}", escape_markdown(line.trim_end()))?;
            }
        }

        Ok(out)
    }

    fn to_csv(&self) -> Result<Vec<u8>, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["question", "difficulty", "score", "quality", "prompt", "answer"])?;
        for entry in &self.rounds {
            writer.write_record([
                format!("Q{}", entry.round),
                entry.difficulty_label.to_string(),
                format!("{:.1}", entry.score),
                entry.rating_label.to_string(),
                entry.question.clone(),
                entry.answer.clone(),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|err| ReportError::Io(err.into_error()))
    }
}

/// Backslash-escapes characters that would otherwise start headings, tables,
/// emphasis, links or HTML inside free-text answers.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '`' | '*' | '_' | '#' | '|' | '<' | '>' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
