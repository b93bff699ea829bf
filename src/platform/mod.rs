//! Console input boundary
//!
//! Reads guesses line by line. Malformed or out-of-range input is answered
//! here and re-prompted, so the round engine only ever sees valid guesses.
//!
//! Stdin is read on a background thread and handed over through a channel,
//! so a Ctrl+C handler can wake a prompt that is blocked waiting for a line.

use std::io::{self, BufRead, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::error::{SessionEnd, SessionError};
use crate::ui::{Lang, Strings};

/// Raised once the player presses Ctrl+C
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

type Chunk = io::Result<Vec<u8>>;

/// Reader fed line by line from a channel
///
/// An empty chunk reads as end of input once, which is how a pending read is
/// woken up.
pub struct WakeableReader {
    rx: Receiver<Chunk>,
    buf: Vec<u8>,
    pos: usize,
}

/// Wakes a `WakeableReader` blocked on its next line
#[derive(Debug, Clone)]
pub struct Waker {
    tx: Sender<Chunk>,
}

impl Waker {
    pub fn wake(&self) {
        // The reader may already be gone during shutdown
        let _ = self.tx.send(Ok(Vec::new()));
    }
}

fn wakeable_channel() -> (Sender<Chunk>, WakeableReader) {
    let (tx, rx) = mpsc::channel();
    let reader = WakeableReader {
        rx,
        buf: Vec::new(),
        pos: 0,
    };
    (tx, reader)
}

impl WakeableReader {
    /// Start pumping stdin lines on a background thread
    pub fn stdin() -> (Self, Waker) {
        let (tx, reader) = wakeable_channel();
        let waker = Waker { tx: tx.clone() };
        thread::spawn(move || {
            let stdin = io::stdin();
            loop {
                let mut line = Vec::new();
                match stdin.lock().read_until(b'\n', &mut line) {
                    Ok(0) => {
                        let _ = tx.send(Ok(line));
                        break;
                    }
                    Ok(_) => {
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        break;
                    }
                }
            }
        });
        (reader, waker)
    }
}

impl Read for WakeableReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.buf.len() {
            match self.rx.recv() {
                Ok(chunk) => {
                    self.buf = chunk?;
                    self.pos = 0;
                }
                // Every sender is gone
                Err(_) => return Ok(0),
            }
        }
        let n = (&self.buf[self.pos..]).read(out)?;
        self.pos += n;
        Ok(n)
    }
}

/// Source of validated guesses
pub trait GuessSource {
    /// Next guess within `[min, max]` for the given 1-based attempt number
    fn next_guess(&mut self, attempt: u32, min: i64, max: i64) -> Result<i64, SessionError>;

    /// Whether the player wants another round
    fn play_again(&mut self) -> bool;
}

/// Line-based input over any reader, prompting on `out`
pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    out: W,
    lang: Lang,
    strings: Strings,
    interrupt: InterruptFlag,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, out: W, lang: Lang) -> Self {
        Self {
            reader,
            out,
            lang,
            strings: lang.strings(),
            interrupt: InterruptFlag::new(),
        }
    }

    /// Report reads that return after `flag` was raised as an interrupt
    pub fn with_interrupt(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = flag;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        if self.interrupt.is_raised() {
            return Err(SessionEnd::Interrupted.into());
        }
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line);
        if self.interrupt.is_raised() {
            return Err(SessionEnd::Interrupted.into());
        }
        match read {
            Ok(0) => Err(SessionEnd::EndOfInput.into()),
            Ok(_) => Ok(line),
            Err(e) => Err(e.into()),
        }
    }

    /// Yes/no question; a blank answer takes the default, EOF means no
    pub fn ask_yes_no(&mut self, prompt: &str, default_yes: bool) -> bool {
        loop {
            let Ok(answer) = self.prompt(prompt) else {
                return false;
            };
            let Some(c) = answer.trim().chars().next() else {
                return default_yes;
            };
            if self.lang.is_yes(c) {
                return true;
            }
            if self.lang.is_no(c) {
                return false;
            }
        }
    }
}

impl<R: BufRead, W: Write> GuessSource for ConsoleInput<R, W> {
    fn next_guess(&mut self, attempt: u32, min: i64, max: i64) -> Result<i64, SessionError> {
        let prompt = self.strings.attempt_prompt(attempt);
        loop {
            let raw = self.prompt(&prompt)?;
            let Ok(value) = raw.trim().parse::<i64>() else {
                writeln!(self.out, "{}", self.strings.invalid_int())?;
                continue;
            };
            if !(min..=max).contains(&value) {
                log::debug!("Rejected out-of-range guess {}", value);
                writeln!(self.out, "{}", self.strings.out_of_range(min, max))?;
                continue;
            }
            return Ok(value);
        }
    }

    fn play_again(&mut self) -> bool {
        let prompt = self.strings.play_again();
        self.ask_yes_no(prompt, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(script: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), Lang::En)
    }

    #[test]
    fn test_retries_until_valid() {
        let mut src = input("\nabc\n500\n  42 \n");
        assert_eq!(src.next_guess(1, 1, 100).unwrap(), 42);
        let out = String::from_utf8(src.into_output()).unwrap();
        assert_eq!(out.matches("Attempt 1: ").count(), 4);
        assert_eq!(out.matches("An integer is required. Try again.").count(), 2);
        assert!(out.contains("Number is out of range [1..100]. Try again."));
    }

    #[test]
    fn test_negative_range() {
        let mut src = input("-5\n");
        assert_eq!(src.next_guess(3, -10, -1).unwrap(), -5);
    }

    #[test]
    fn test_eof_ends_session() {
        let mut src = input("abc\n");
        let err = src.next_guess(1, 1, 10).unwrap_err();
        assert!(matches!(err, SessionError::End(SessionEnd::EndOfInput)));
    }

    #[test]
    fn test_yes_no() {
        assert!(input("\n").ask_yes_no("?", true));
        assert!(!input("\n").ask_yes_no("?", false));
        assert!(input("maybe\nyes\n").ask_yes_no("?", false));
        assert!(!input("no\n").ask_yes_no("?", true));
        assert!(!input("").ask_yes_no("?", true));
    }

    #[test]
    fn test_spanish_yes() {
        let mut src = ConsoleInput::new(Cursor::new("sí\n".as_bytes().to_vec()), Vec::new(), Lang::Es);
        assert!(src.play_again());
    }

    #[test]
    fn test_spanish_no_accepts_o() {
        let mut src = ConsoleInput::new(Cursor::new("o\n\n".as_bytes().to_vec()), Vec::new(), Lang::Es);
        assert!(!src.play_again());
    }

    /// Raises the flag as if Ctrl+C arrived mid-read, then fails the read
    struct SignalledReader {
        flag: InterruptFlag,
    }

    impl Read for SignalledReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            self.flag.raise();
            Err(io::Error::other("read aborted"))
        }
    }

    #[test]
    fn test_interrupt_ends_session() {
        let flag = InterruptFlag::new();
        let reader = io::BufReader::new(SignalledReader { flag: flag.clone() });
        let mut src = ConsoleInput::new(reader, Vec::new(), Lang::En).with_interrupt(flag);
        let err = src.next_guess(1, 1, 10).unwrap_err();
        assert!(matches!(err, SessionError::End(SessionEnd::Interrupted)));
    }

    /// Fails once with `Interrupted`, then yields a line
    struct OnceInterrupted {
        failed: bool,
        data: Cursor<Vec<u8>>,
    }

    impl Read for OnceInterrupted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_spurious_eintr_without_flag_is_retried() {
        let reader = io::BufReader::new(OnceInterrupted {
            failed: false,
            data: Cursor::new(b"7\n".to_vec()),
        });
        let mut src = ConsoleInput::new(reader, Vec::new(), Lang::En).with_interrupt(InterruptFlag::new());
        assert_eq!(src.next_guess(1, 1, 10).unwrap(), 7);
    }

    #[test]
    fn test_wake_unblocks_pending_prompt() {
        let (tx, reader) = wakeable_channel();
        let waker = Waker { tx: tx.clone() };
        let flag = InterruptFlag::new();
        let mut src = ConsoleInput::new(io::BufReader::new(reader), Vec::new(), Lang::En)
            .with_interrupt(flag.clone());

        tx.send(Ok(b"4\n".to_vec())).unwrap();
        assert_eq!(src.next_guess(1, 1, 10).unwrap(), 4);

        // What the Ctrl+C handler does
        flag.raise();
        waker.wake();
        let err = src.next_guess(2, 1, 10).unwrap_err();
        assert!(matches!(err, SessionError::End(SessionEnd::Interrupted)));
        assert!(!src.play_again());
    }

    #[test]
    fn test_wakeable_reader_eof_when_senders_drop() {
        let (tx, reader) = wakeable_channel();
        tx.send(Ok(b"12\n".to_vec())).unwrap();
        drop(tx);
        let mut src = ConsoleInput::new(io::BufReader::new(reader), Vec::new(), Lang::En);
        assert_eq!(src.next_guess(1, 1, 20).unwrap(), 12);
        let err = src.next_guess(2, 1, 20).unwrap_err();
        assert!(matches!(err, SessionError::End(SessionEnd::EndOfInput)));
    }
}
