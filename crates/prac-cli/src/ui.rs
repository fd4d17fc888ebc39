//! Terminal display preferences, resolved once from flags and environment.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Below this many columns the completion table drops its name and
/// requirement columns.
pub const COMPACT_COMPLETION_WIDTH: usize = 80;

const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Colour completion bands in tables.
    pub table_color: bool,
    /// Terminal width from `COLUMNS`, when it is set and usable.
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Completion tables use the narrow layout when the terminal is known to
    /// be too small for every column.
    #[must_use]
    pub fn compact_completion(self) -> bool {
        self.term_width
            .is_some_and(|width| width < COMPACT_COMPLETION_WIDTH)
    }
}

/// Environment inputs that shape [`UiPrefs`].
#[derive(Clone, Copy, Debug)]
struct Terminal<'a> {
    is_tty: bool,
    columns: Option<&'a str>,
    no_color: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = resolve(
        flags,
        Terminal {
            is_tty: std::io::stdout().is_terminal(),
            columns: columns.as_deref(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        },
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, terminal: Terminal<'_>) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.is_tty && !flags.quiet && !terminal.no_color,
        };

    let term_width = terminal
        .columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    UiPrefs {
        table_color,
        term_width,
    }
}
