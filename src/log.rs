use console::style;

/// Logger handed by reference to whatever needs it; verbosity is instance
/// state, not a process-wide flag. Everything goes to stderr so `--json`
/// output on stdout stays machine-readable.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", style(msg).dim());
        }
    }

    pub fn info(&self, msg: &str) {
        eprintln!("{msg}");
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("{} {msg}", style("warning:").yellow().bold());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", style("error:").red().bold());
    }
}
