use console::Term;
use log::Log;

use crate::TermLike;

/// Wraps a Log implementor and clears the progress bar line before each record is written,
/// so log output and a half-drawn bar don't end up mixed on one line.
///
/// The bar reappears below the log output on its next update.
pub struct LogWrapper<L: Log> {
    term: Box<dyn TermLike>,
    log: L,
}

impl<L: Log + 'static> LogWrapper<L> {
    /// Wraps `log`, clearing lines on stdout where bars draw by default.
    pub fn new(log: L) -> Self {
        Self::with_term(Box::new(Term::stdout()), log)
    }

    /// Wraps `log`, clearing lines on `term`.
    pub fn with_term(term: Box<dyn TermLike>, log: L) -> Self {
        Self { term, log }
    }

    /// installs this as the global logger,
    ///
    /// tries to find the correct argument to set_max_level
    /// by reading the logger configuration,
    /// you may want to set it manually though.
    pub fn try_init(self) -> Result<(), log::SetLoggerError> {
        use log::LevelFilter::*;
        let levels = [Off, Error, Warn, Info, Debug, Trace];

        for level_filter in levels.iter().rev() {
            let level = if let Some(level) = level_filter.to_level() {
                level
            } else {
                // off is the last level, just do nothing in that case
                continue;
            };
            let meta = log::Metadata::builder().level(level).build();
            if self.enabled(&meta) {
                log::set_max_level(*level_filter);
                break;
            }
        }

        log::set_boxed_logger(Box::new(self))
    }
}

impl<L: Log> Log for LogWrapper<L> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.log.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.log.enabled(record.metadata()) {
            // a failed clear is ignored; the record is still logged
            let _ = self.term.clear_line().and_then(|_| self.term.flush());
        }
        self.log.log(record)
    }

    fn flush(&self) {
        self.log.flush()
    }
}
