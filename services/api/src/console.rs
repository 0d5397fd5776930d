use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use trade_interview::interview::{ListenOutcome, VoiceError, VoiceIo};

/// Terminal stand-in for speech: questions go to stdout, answers are typed lines.
///
/// A background thread owns stdin so that `listen` can give up after the
/// timeout. Lines typed after a timeout are discarded before the next prompt,
/// so they are never scored against a later question.
pub(crate) struct ConsoleVoice {
    lines: Mutex<Receiver<String>>,
    closed: Arc<AtomicBool>,
    stale: AtomicBool,
}

impl ConsoleVoice {
    pub(crate) fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel();
        let closed = Arc::new(AtomicBool::new(false));
        let reader_closed = closed.clone();

        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
            reader_closed.store(true, Ordering::Release);
        });

        Self::from_receiver(receiver, closed)
    }

    fn from_receiver(receiver: Receiver<String>, closed: Arc<AtomicBool>) -> Self {
        Self {
            lines: Mutex::new(receiver),
            closed,
            stale: AtomicBool::new(false),
        }
    }
}

impl VoiceIo for ConsoleVoice {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "\nInterviewer: {text}")?;
        stdout.flush()?;
        Ok(())
    }

    fn listen(&self, timeout: Duration) -> Result<ListenOutcome, VoiceError> {
        let lines = self
            .lines
            .lock()
            .map_err(|_| VoiceError::Unavailable("console reader poisoned".to_string()))?;

        if self.stale.swap(false, Ordering::AcqRel) {
            while lines.try_recv().is_ok() {}
        }

        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "Your answer ({}s): ", timeout.as_secs())?;
            stdout.flush()?;
        }

        match lines.recv_timeout(timeout) {
            Ok(line) if line.trim().is_empty() => Ok(ListenOutcome::NoSpeechDetected),
            Ok(line) => Ok(ListenOutcome::Speech(line.trim().to_string())),
            Err(RecvTimeoutError::Timeout) => {
                self.stale.store(true, Ordering::Release);
                println!();
                Ok(ListenOutcome::Timeout)
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(VoiceError::Unavailable("stdin closed".to_string()))
            }
        }
    }

    fn is_available(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(20);

    fn console() -> (mpsc::Sender<String>, ConsoleVoice) {
        let (sender, receiver) = mpsc::channel();
        (
            sender,
            ConsoleVoice::from_receiver(receiver, Arc::new(AtomicBool::new(false))),
        )
    }

    #[test]
    fn late_lines_do_not_answer_the_next_question() {
        let (sender, voice) = console();

        assert_eq!(voice.listen(WAIT).expect("listen"), ListenOutcome::Timeout);
        sender.send("turn off the valve".to_string()).expect("send");

        assert_eq!(voice.listen(WAIT).expect("listen"), ListenOutcome::Timeout);

        sender.send("shut the main supply".to_string()).expect("send");
        assert_eq!(
            voice.listen(WAIT).expect("listen"),
            ListenOutcome::Speech("shut the main supply".to_string())
        );
    }

    #[test]
    fn queued_lines_are_kept_while_answers_arrive_in_time() {
        let (sender, voice) = console();
        for line in ["first answer", "   ", "third answer"] {
            sender.send(line.to_string()).expect("send");
        }

        assert_eq!(
            voice.listen(WAIT).expect("listen"),
            ListenOutcome::Speech("first answer".to_string())
        );
        assert_eq!(
            voice.listen(WAIT).expect("listen"),
            ListenOutcome::NoSpeechDetected
        );
        assert_eq!(
            voice.listen(WAIT).expect("listen"),
            ListenOutcome::Speech("third answer".to_string())
        );
    }

    #[test]
    fn closed_stdin_reports_unavailable() {
        let (sender, voice) = console();
        drop(sender);
        voice.closed.store(true, Ordering::Release);

        assert!(!voice.is_available());
        assert!(matches!(voice.listen(WAIT), Err(VoiceError::Unavailable(_))));
    }
}
