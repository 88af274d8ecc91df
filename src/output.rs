//! The standard output collaborator.
//!
//! Every print-family call renders its complete text first and then hands it
//! to the process-wide sink exactly once. The sink is stdout unless replaced
//! with [`set_output`], which is mostly useful for capturing output in tests.

use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

type Sink = Box<dyn Write + Send>;

static OUTPUT: Lazy<Mutex<Sink>> = Lazy::new(|| Mutex::new(default_sink()));

fn default_sink() -> Sink {
    Box::new(io::stdout())
}

/// Replaces the sink used by all print-family calls.
///
/// # Example
///
/// ```rust
/// use ansitheme::{reset_output, set_output};
///
/// set_output(std::io::sink());
/// ansitheme::infoln(&ansitheme::args!["discarded"]);
/// reset_output();
/// ```
pub fn set_output<W: Write + Send + 'static>(writer: W) {
    let mut guard = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Box::new(writer);
}

/// Restores stdout as the sink.
pub fn reset_output() {
    let mut guard = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = default_sink();
}

/// Writes `text` to the current sink and flushes it.
///
/// Write errors are dropped: a print has nobody to report them to. Callers
/// that care use the `write_to` methods on styles and themes instead.
pub(crate) fn write_out(text: &str) {
    let mut guard = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = guard
        .write_all(text.as_bytes())
        .and_then(|()| guard.flush());
}

#[cfg(test)]
pub(crate) mod capture {
    //! Shared in-memory sink for tests.

    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        /// Installs a fresh capture as the process sink and returns a handle to it.
        pub(crate) fn install() -> Self {
            let capture = Capture::default();
            super::set_output(capture.clone());
            capture
        }

        pub(crate) fn take(&self) -> String {
            let mut buf = self.0.lock().unwrap();
            String::from_utf8(std::mem::take(&mut *buf)).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
