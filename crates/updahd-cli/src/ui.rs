//! Terminal presentation: when to color, how wide to render, and the
//! palettes for class badges, actions, and feedback.

use std::io::IsTerminal;
use std::sync::OnceLock;

use updahd_core::enums::{ActionType, FeedbackKind};
use updahd_core::{Feedback, MIN_CLASS};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Badge colors along the class ladder, lowest class first.
const CLASS_BADGES: [&str; 6] = ["34", "38;5;208", "32", "31", "33", "38;5;214"];

const GREEN: &str = "32";
const RED: &str = "31";

/// Narrower terminals are not worth fitting tables into.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color table cells.
    pub color: bool,
    /// Echo success feedback on stderr. Tables flatten the nested
    /// `feedback` object into a single cell, so the banner carries it.
    pub banner: bool,
    pub term_width: Option<usize>,
}

/// What the process learned about its terminal at startup.
struct Terminal {
    stdout_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse().ok()),
        }
    }
}

impl UiPrefs {
    const PLAIN: Self = Self {
        color: false,
        banner: false,
        term_width: None,
    };

    fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        let table = flags.format == OutputFormat::Table;
        let color = table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => terminal.stdout_tty && !terminal.no_color && !flags.quiet,
            };

        Self {
            color,
            banner: table && !flags.quiet,
            term_width: terminal.columns.filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, &Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or(UiPrefs::PLAIN)
}

/// Badge color for a class on the ladder; `None` off the ladder.
#[must_use]
pub fn class_badge(class_id: i64) -> Option<&'static str> {
    let index = usize::try_from(class_id.checked_sub(MIN_CLASS)?).ok()?;
    CLASS_BADGES.get(index).copied()
}

#[must_use]
pub const fn action_color(action: ActionType) -> &'static str {
    match action {
        ActionType::Promoted => GREEN,
        ActionType::Downgraded => RED,
    }
}

#[must_use]
pub const fn feedback_color(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Success => GREEN,
        FeedbackKind::Error => RED,
    }
}

/// Color for a rendered table cell that names a class, an action, a
/// feedback kind, or a boolean.
#[must_use]
pub fn cell_color(cell: &str) -> Option<&'static str> {
    if let Some(number) = cell.strip_prefix("Class ") {
        return class_badge(number.trim().parse().ok()?);
    }
    match cell {
        "promoted" => Some(action_color(ActionType::Promoted)),
        "downgraded" => Some(action_color(ActionType::Downgraded)),
        "success" | "true" => Some(feedback_color(FeedbackKind::Success)),
        "error" | "false" => Some(feedback_color(FeedbackKind::Error)),
        _ => None,
    }
}

#[must_use]
pub fn paint(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

/// The stderr banner for `feedback`, if banners are on. Error feedback is
/// left to the process error line.
#[must_use]
pub fn banner(feedback: &Feedback) -> Option<String> {
    let prefs = prefs();
    (prefs.banner && feedback.is_success()).then(|| render_banner(feedback, prefs.color))
}

fn render_banner(feedback: &Feedback, color: bool) -> String {
    let mark = match feedback.kind {
        FeedbackKind::Success => '✓',
        FeedbackKind::Error => '✗',
    };
    let line = format!("{mark} {}", feedback.text);
    if color {
        paint(&line, feedback_color(feedback.kind))
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            color,
        }
    }

    const TTY: Terminal = Terminal {
        stdout_tty: true,
        no_color: false,
        columns: Some(120),
    };

    #[test]
    fn auto_colors_tables_on_a_terminal() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), &TTY);
        assert_eq!(
            prefs,
            UiPrefs {
                color: true,
                banner: true,
                term_width: Some(120),
            }
        );
    }

    #[test]
    fn json_is_never_decorated() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always, false), &TTY);
        assert!(!prefs.color);
        assert!(!prefs.banner);
    }

    #[test]
    fn no_color_and_pipes_disable_auto_color() {
        let piped = Terminal {
            stdout_tty: false,
            ..TTY
        };
        let no_color = Terminal {
            no_color: true,
            ..TTY
        };
        let table = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(!UiPrefs::resolve(&table, &piped).color);
        assert!(!UiPrefs::resolve(&table, &no_color).color);

        let forced = flags(OutputFormat::Table, ColorMode::Always, false);
        assert!(UiPrefs::resolve(&forced, &piped).color);
    }

    #[test]
    fn quiet_drops_the_banner() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Never, true), &TTY);
        assert!(!prefs.banner);
    }

    #[test]
    fn narrow_terminals_are_ignored() {
        let narrow = Terminal {
            columns: Some(20),
            ..TTY
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), &narrow);
        assert_eq!(prefs.term_width, None);
    }

    #[test]
    fn class_badges_cover_the_ladder() {
        assert_eq!(class_badge(1), Some("34"));
        assert_eq!(class_badge(2), Some("38;5;208"));
        assert_eq!(class_badge(6), Some("38;5;214"));
        assert_eq!(class_badge(0), None);
        assert_eq!(class_badge(7), None);
    }

    #[test]
    fn cells_are_colored_by_meaning() {
        assert_eq!(cell_color("Class 3"), Some("32"));
        assert_eq!(cell_color("Class 9"), None);
        assert_eq!(cell_color("promoted"), Some(GREEN));
        assert_eq!(cell_color("downgraded"), Some(RED));
        assert_eq!(cell_color("error"), Some(RED));
        assert_eq!(cell_color("Ada"), None);
    }

    #[test]
    fn banner_marks_the_outcome() {
        let ok = Feedback::success("Employee promoted successfully!");
        assert_eq!(render_banner(&ok, false), "✓ Employee promoted successfully!");
        assert_eq!(
            render_banner(&ok, true),
            "\u{1b}[32m✓ Employee promoted successfully!\u{1b}[0m"
        );
        assert_eq!(
            render_banner(&Feedback::error("Employee not found."), false),
            "✗ Employee not found."
        );
    }
}
