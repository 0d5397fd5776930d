use crate::console::ConsoleVoice;
use crate::infra::{
    parse_difficulty, parse_job_type, parse_report_dir, parse_timeout, parse_voice_backend,
};
use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use trade_interview::config::{AppConfig, InterviewSettings};
use trade_interview::error::AppError;
use trade_interview::interview::{
    AnswerScorer, DifficultyLevel, InterviewCatalog, InterviewEngine, InterviewReport,
    InterviewSession, JobType, ReportFormat, RoundOutcome, ScoreBreakdown, ScriptedVoice,
    SilentVoice, VoiceBackendKind, VoiceGateway, VoiceIo,
};
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Trade to interview for (plumber or electrician)
    #[arg(long, value_parser = parse_job_type)]
    pub(crate) job: JobType,
    /// Read one answer per line from this file instead of listening
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Voice backend (console or silent); defaults to INTERVIEW_VOICE_BACKEND
    #[arg(long, value_parser = parse_voice_backend)]
    pub(crate) voice: Option<VoiceBackendKind>,
    /// Seconds to wait for each answer; defaults to INTERVIEW_LISTEN_TIMEOUT_SECS
    #[arg(long, value_parser = parse_timeout)]
    pub(crate) timeout: Option<Duration>,
    /// Directory for the saved report; defaults to INTERVIEW_REPORT_DIR
    #[arg(long, value_parser = parse_report_dir)]
    pub(crate) report_dir: Option<PathBuf>,
    /// Report format (markdown, csv, or json)
    #[arg(long, default_value = "markdown")]
    pub(crate) format: String,
    /// Print the summary without writing a report file
    #[arg(long)]
    pub(crate) no_report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[arg(long, value_parser = parse_job_type)]
    pub(crate) job: JobType,
    #[arg(long, value_parser = parse_difficulty)]
    pub(crate) difficulty: DifficultyLevel,
    /// Answer text to score
    pub(crate) answer: String,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    #[arg(long, value_parser = parse_job_type)]
    pub(crate) job: JobType,
}

pub(crate) fn run_interview(args: RunArgs) -> Result<(), AppError> {
    let format: ReportFormat = args.format.parse()?;
    let settings = resolve_settings(&args)?;

    let backend: Box<dyn VoiceIo> = match &args.answers {
        Some(path) => {
            let script = fs::read_to_string(path)?;
            Box::new(ScriptedVoice::from_lines(script.lines()))
        }
        None => match settings.voice_backend {
            VoiceBackendKind::Console => Box::new(ConsoleVoice::spawn()),
            VoiceBackendKind::Silent => Box::new(SilentVoice),
        },
    };
    let voice = VoiceGateway::new(backend);

    if !voice.is_available() {
        warn!(backend = %settings.voice_backend, "voice backend unavailable; answers will be scored as silence");
        println!("Voice input is unavailable; unanswered questions will score zero.");
    }

    let engine = InterviewEngine::standard();
    let mut session = engine.start(args.job, Utc::now());

    println!("{} interview practice", args.job);
    println!(
        "Answer each question within {} seconds. Type 'skipped' to pass.",
        settings.listen_timeout.as_secs()
    );

    while let Some(question) = engine.current_question(&session) {
        println!(
            "\n{} (difficulty: {})",
            session.progress_label(),
            session.current_difficulty()
        );
        voice.speak(question);
        let answer = voice.listen(settings.listen_timeout).into_answer();

        let (next, outcome) = engine.process_round(&session, &answer, Utc::now())?;
        render_round(&outcome);
        session = next;
    }

    let report = InterviewReport::from_session(&session)?;
    render_summary(&session, &report);

    if !args.no_report {
        let path = write_report(&report, format, &settings.report_dir)?;
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown(&args.answer, args.difficulty, args.job);
    let quality = scorer.classify(&args.answer, breakdown.score);

    println!("{} / {} answer", args.job, args.difficulty);
    render_breakdown(&breakdown);
    println!("  Quality: {}", quality.label());
    Ok(())
}

pub(crate) fn list_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = InterviewCatalog::standard();
    println!("{} question bank", args.job);
    for difficulty in DifficultyLevel::ordered() {
        println!("\n{difficulty}:");
        for (index, question) in catalog.questions(args.job, difficulty).iter().enumerate() {
            println!("  {}. {}", index + 1, question);
        }
    }
    Ok(())
}

fn resolve_settings(args: &RunArgs) -> Result<InterviewSettings, AppError> {
    let mut settings = AppConfig::load()?.interview;
    if let Some(voice) = args.voice {
        settings.voice_backend = voice;
    }
    if let Some(timeout) = args.timeout {
        settings.listen_timeout = timeout;
    }
    if let Some(dir) = &args.report_dir {
        settings.report_dir = dir.clone();
    }
    Ok(settings)
}

fn write_report(
    report: &InterviewReport,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(report.file_name(format));
    fs::write(&path, report.render(format)?)?;
    Ok(path)
}

fn render_round(outcome: &RoundOutcome) {
    println!(
        "  Score: {:.1}/10 ({})",
        outcome.record.score,
        outcome.quality.label()
    );
    if outcome.breakdown.sentinel {
        println!("  No usable answer recorded ({}).", outcome.record.answer);
    } else {
        println!(
            "  Keywords matched: {}",
            outcome.breakdown.matched_keywords()
        );
    }
    if !outcome.completed {
        println!("  Next difficulty: {}", outcome.next_difficulty);
    }
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    if breakdown.sentinel {
        println!("  No usable answer; scored 0.0");
        return;
    }
    println!(
        "  High-value keywords: {}",
        joined(&breakdown.high_value_matches)
    );
    println!(
        "  Medium-value keywords: {}",
        joined(&breakdown.medium_value_matches)
    );
    println!(
        "  Basic keywords: {}",
        joined(&breakdown.basic_value_matches)
    );
    println!(
        "  Words: {} (length factor {:.2})",
        breakdown.word_count, breakdown.length_multiplier
    );
    if breakdown.bonus_applied {
        println!("  Completeness bonus applied");
    }
    println!(
        "  Difficulty multiplier: x{:.1}",
        breakdown.difficulty_multiplier
    );
    println!("  Score: {:.1}/10", breakdown.score);
}

fn render_summary(session: &InterviewSession, report: &InterviewReport) {
    let details = &report.details;
    println!("\nInterview summary");
    println!("  Questions asked: {}", details.questions_asked);
    println!("  Duration: {}", details.duration_label);
    println!(
        "  Overall score: {:.1}/{:.0}",
        details.total_points, details.max_possible
    );
    println!(
        "  Grade: {} ({:.1}%)",
        details.grade_label, details.percentage
    );
    println!("  Strengths: {}", report.analysis.strengths);
    println!(
        "  Areas for improvement: {}",
        report.analysis.areas_for_improvement
    );
    println!("  {}", report.feedback_message);

    println!("\nScore breakdown");
    for (entry, record) in report.rounds.iter().zip(session.records()) {
        println!(
            "  Q{} {:<6} {:>4.1}/10  {:<9} {}",
            entry.round, entry.difficulty_label, entry.score, entry.rating_label, record.question
        );
    }
}

fn joined(words: &[String]) -> String {
    if words.is_empty() {
        "none".to_string()
    } else {
        words.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted_args(dir: &Path, answers: &Path) -> RunArgs {
        RunArgs {
            job: JobType::Plumber,
            answers: Some(answers.to_path_buf()),
            voice: Some(VoiceBackendKind::Silent),
            timeout: Some(Duration::from_secs(1)),
            report_dir: Some(dir.to_path_buf()),
            format: "csv".to_string(),
            no_report: false,
        }
    }

    #[test]
    fn scripted_run_writes_a_report() {
        let dir = std::env::temp_dir().join(format!("trade-interview-run-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let answers = dir.join("answers.txt");
        fs::write(
            &answers,
            "You turn off the main water valve to stop a leak\n\nskipped\n",
        )
        .expect("write answers");

        run_interview(scripted_args(&dir, &answers)).expect("interview runs");

        let reports: Vec<_> = fs::read_dir(&dir)
            .expect("list dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("Plumber_Interview_Report_") && name.ends_with(".csv"))
            .collect();
        assert_eq!(reports.len(), 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_report_format_is_rejected_up_front() {
        let dir = std::env::temp_dir();
        let mut args = scripted_args(&dir, &dir.join("missing-answers.txt"));
        args.format = "pdf".to_string();

        assert!(matches!(run_interview(args), Err(AppError::Interview(_))));
    }

    #[test]
    fn joined_lists_matches_or_none() {
        assert_eq!(joined(&[]), "none");
        assert_eq!(
            joined(&["water".to_string(), "valve".to_string()]),
            "water, valve"
        );
    }
}
