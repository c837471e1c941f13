mod config;
mod core;
mod logging;
mod tui;

use clap::Parser;
use std::io::Write;

use crate::config::themes;
use crate::core::wizard::Wizard;
use crate::core::Flow;

#[derive(Parser, Debug)]
#[command(name = "stack-builder", version, about = "Pick a web project tech stack interactively")]
struct Args {
    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Override the color theme (mocha, macchiato, frappe, latte)
    #[arg(long)]
    theme: Option<String>,

    /// Only ask the language and framework questions
    #[arg(long)]
    classic: bool,

    /// Print the final answers as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    tracing::info!(name = ?args.name, "starting stack-builder");

    let mut config = config::settings::load_config();

    // Apply CLI overrides
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.classic {
        config.flow = Flow::Classic;
    }
    if !themes::is_known_theme(&config.theme) {
        tracing::warn!(
            theme = %config.theme,
            available = %themes::theme_names().join(", "),
            "unknown theme, using {}",
            themes::DEFAULT_THEME
        );
    }
    tracing::info!(
        theme = themes::get_theme(&config.theme).name,
        flow = config.flow.label(),
        "config resolved"
    );

    // Launch TUI
    let wizard = tui::app::run(config)?;

    // A closed stdout (e.g. piped into `head`) is an error, not a panic
    write_report(&mut std::io::stdout().lock(), &wizard, args.json)?;
    tracing::info!(complete = wizard.is_complete(), "exiting");
    Ok(())
}

/// Print the final answers: JSON keyed by question, or the plain summary.
fn write_report(out: &mut impl Write, wizard: &Wizard, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, wizard.answers())?;
        writeln!(out)?;
    } else {
        out.write_all(render_summary(wizard).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn render_summary(wizard: &Wizard) -> String {
    let mut out = String::from("Your Tech Stack\n");
    for (label, value) in wizard.snapshot() {
        out.push_str(&format!("  {:<16}{}\n", label, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::questions::{AnswerValue, QuestionKey};

    #[test]
    fn name_flag_is_accepted() {
        let args = Args::try_parse_from(["stack-builder", "--name", "Jane"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("Jane"));
        assert!(!args.classic);
        assert!(!args.json);
    }

    #[test]
    fn no_arguments_required() {
        let args = Args::try_parse_from(["stack-builder"]).unwrap();
        assert!(args.name.is_none());
        assert!(args.theme.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["stack-builder", "--frobnicate"]).is_err());
    }

    #[test]
    fn summary_lists_all_answers() {
        let mut wizard = Wizard::new(Flow::Classic);
        wizard.select(QuestionKey::IsTypeScript, AnswerValue::Bool(false));
        let text = render_summary(&wizard);
        assert!(text.starts_with("Your Tech Stack\n"));
        assert!(text.contains("  Use TypeScript  No\n"));
        assert!(text.contains("  Use Docker      No\n"));
        assert_eq!(text.lines().count(), 9);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_json_is_keyed_by_question() {
        let wizard = Wizard::new(Flow::Full);
        let mut out = Vec::new();
        write_report(&mut out, &wizard, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["isTypeScript"], true);
        assert_eq!(value["framework"], "None");
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn report_plain_matches_summary() {
        let wizard = Wizard::new(Flow::Classic);
        let mut out = Vec::new();
        write_report(&mut out, &wizard, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_summary(&wizard));
    }

    #[test]
    fn closed_output_is_an_error() {
        let wizard = Wizard::new(Flow::Full);
        assert!(write_report(&mut ClosedPipe, &wizard, false).is_err());
        assert!(write_report(&mut ClosedPipe, &wizard, true).is_err());
    }
}
