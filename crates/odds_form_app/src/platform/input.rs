use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use odds_logging::odds_warn;

/// Raw user interaction read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A full line: the new input value followed by a submit press.
    Line(String),
    /// Stdin reached end of file.
    Closed,
}

/// Reads stdin on a dedicated thread so the event loop never blocks on it.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<UiEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let line = line.trim_end_matches('\r').to_string();
                        if tx.send(UiEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        odds_warn!("stdin read failed: {}", err);
                        break;
                    }
                }
            }
            let _ = tx.send(UiEvent::Closed);
        })?;
    Ok(rx)
}
