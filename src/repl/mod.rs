//! Interactive calculator session on stdin/stdout.
//!
//! This module provides functionality to:
//! - Map typed key characters onto calculator actions
//! - Run the read-eval-print loop with history and conversion commands
//! - Render conversions, history listings, and usage stats

mod detection;

pub use detection::looks_like_key_sequence;

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::convert::{self, Currency};
use crate::engine::{CalcAction, CalcEvent, Calculator, Operator};
use crate::format;
use crate::history::HistoryStore;
use crate::settings::{Settings, Theme};

const HELP: &str = "\
Keys:      0-9 . + - * / x % =   (typed as a line, e.g. 50+3=)
Commands:  clear       reset the calculator
           backspace   remove the last typed character
           convert <value> <from> <to>
           history     list recorded calculations
           stats       usage summary
           export      write the history as CSV to the current directory
           clearhist   delete the recorded history
           theme [light|dark]
           help, quit";

/// Map a typed key to a calculator action. Both ASCII and typographic
/// operator characters are accepted.
pub fn action_for_key(key: char) -> Option<CalcAction> {
    match key {
        '0'..='9' => Some(CalcAction::Digit(key)),
        '.' => Some(CalcAction::DecimalPoint),
        '+' => Some(CalcAction::Operator(Operator::Add)),
        '-' | '−' => Some(CalcAction::Operator(Operator::Subtract)),
        '*' | 'x' | '×' => Some(CalcAction::Operator(Operator::Multiply)),
        '/' | '÷' => Some(CalcAction::Operator(Operator::Divide)),
        '=' => Some(CalcAction::Equals),
        '%' => Some(CalcAction::Percentage),
        _ => None,
    }
}

/// Feed a line of keys into the calculator, collecting surfaced events.
/// Whitespace and unmapped characters are skipped.
pub fn feed_keys(
    calc: &mut Calculator,
    history: &mut HistoryStore,
    line: &str,
) -> Vec<CalcEvent> {
    let mut events = Vec::new();
    for key in line.chars() {
        if key.is_whitespace() {
            continue;
        }
        if let Some(action) = action_for_key(key)
            && let Some(event) = calc.apply(action, history)
        {
            events.push(event);
        }
    }
    events
}

/// Render a unit conversion as display lines. Currency conversions get an
/// extra `1 X = r Y` rate line. `None` when a selector is unknown or the
/// units belong to different categories.
pub fn render_conversion(value: f64, from: &str, to: &str) -> Option<String> {
    let result = convert::convert(value, from, to)?;
    let mut out = format!(
        "{} {} = {} {}",
        format::format_value(value),
        convert::symbol(from)?,
        format::format_value(result),
        convert::symbol(to)?,
    );
    if let (Some(from_currency), Some(to_currency)) =
        (Currency::from_selector(from), Currency::from_selector(to))
    {
        let rate = convert::unit_rate(from_currency, to_currency);
        out.push_str(&format!(
            "\n1 {} = {} {}",
            from_currency.code(),
            format::format_value(rate),
            to_currency.code()
        ));
    }
    Some(out)
}

/// Render the stored history, newest first.
pub fn render_history(store: &HistoryStore) -> String {
    if store.is_empty() {
        return "History is empty.".to_string();
    }
    store
        .entries()
        .iter()
        .map(|entry| format!("{} = {}  ({})", entry.expression, entry.result, entry.timestamp))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the usage summary.
pub fn render_stats(store: &HistoryStore) -> String {
    let stats = store.stats();
    format!(
        "Total calculations: {}\nToday: {}\nMost used operator: {}",
        stats.total,
        stats.today,
        stats.most_used_operator.unwrap_or("none")
    )
}

/// Write the history as CSV into the current directory. `Ok(None)` when the
/// history is empty.
pub fn export_history(store: &HistoryStore) -> io::Result<Option<String>> {
    let Some(csv) = store.export_csv() else {
        return Ok(None);
    };
    let file_name = HistoryStore::export_file_name();
    fs::write(&file_name, csv)?;
    Ok(Some(file_name))
}

/// Run the interactive loop until `quit` or end of input.
pub fn run(mut history: HistoryStore, mut settings: Settings) -> Result<()> {
    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "zcalc ({} theme) — type keys like 50+3= or 'help' for commands.",
        settings.theme.name()
    );
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "clear" => {
                calc.apply(CalcAction::Clear, &mut history);
                print_display(&calc);
            }
            "backspace" => {
                calc.apply(CalcAction::Backspace, &mut history);
                print_display(&calc);
            }
            "history" => println!("{}", render_history(&history)),
            "stats" => println!("{}", render_stats(&history)),
            "export" => match export_history(&history) {
                Ok(Some(file_name)) => println!("Exported to {file_name}"),
                Ok(None) => println!("History is empty."),
                Err(err) => println!("Export failed: {err}"),
            },
            "clearhist" => match history.clear() {
                Ok(0) => println!("History is already empty."),
                Ok(removed) => println!("Removed {removed} entries."),
                Err(err) => {
                    tracing::warn!("failed to clear history file: {err}");
                    println!("History cleared in memory, but the file could not be removed.");
                }
            },
            _ => {
                if let Some(rest) = line.strip_prefix("convert") {
                    run_convert(rest);
                } else if let Some(rest) = line.strip_prefix("theme") {
                    run_theme(rest, &mut settings);
                } else if looks_like_key_sequence(line) {
                    for event in feed_keys(&mut calc, &mut history, line) {
                        if event == CalcEvent::DivisionByZero {
                            println!("Cannot divide by zero.");
                        }
                    }
                    print_display(&calc);
                } else {
                    println!("Unrecognized input, type 'help' for commands.");
                }
            }
        }
    }
    Ok(())
}

fn print_display(calc: &Calculator) {
    if !calc.history_display().is_empty() {
        println!("  {}", calc.history_display());
    }
    println!("{}", calc.current_display());
}

fn run_convert(args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [value, from, to] = parts.as_slice() else {
        println!("Usage: convert <value> <from> <to>");
        return;
    };
    let Ok(value) = value.parse::<f64>() else {
        println!("Not a number: {value}");
        return;
    };
    match render_conversion(value, from, to) {
        Some(lines) => println!("{lines}"),
        None => println!("Unknown unit or mismatched categories: {from} -> {to}"),
    }
}

fn run_theme(args: &str, settings: &mut Settings) {
    let selector = args.trim();
    if selector.is_empty() {
        println!("Theme: {}", settings.theme.name());
        return;
    }
    let Some(theme) = Theme::from_selector(selector) else {
        println!("Unknown theme: {selector} (expected light or dark)");
        return;
    };
    settings.theme = theme;
    if let Err(err) = settings.save_default() {
        tracing::warn!("failed to persist settings: {err}");
    }
    println!("Theme: {}", settings.theme.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key('7'), Some(CalcAction::Digit('7')));
        assert_eq!(
            action_for_key('x'),
            Some(CalcAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            action_for_key('÷'),
            Some(CalcAction::Operator(Operator::Divide))
        );
        assert_eq!(action_for_key('='), Some(CalcAction::Equals));
        assert_eq!(action_for_key('q'), None);
    }

    #[test]
    fn test_feed_keys_runs_a_calculation() {
        let (_dir, mut store) = test_store();
        let mut calc = Calculator::new();
        let events = feed_keys(&mut calc, &mut store, "50 + 3 =");
        assert_eq!(
            events,
            vec![CalcEvent::Completed {
                expression: "50 + 3".to_string(),
                result: "53".to_string(),
            }]
        );
        assert_eq!(calc.current_display(), "53");
    }

    #[test]
    fn test_feed_keys_surfaces_division_by_zero() {
        let (_dir, mut store) = test_store();
        let mut calc = Calculator::new();
        let events = feed_keys(&mut calc, &mut store, "8/0=");
        assert_eq!(events, vec![CalcEvent::DivisionByZero]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_render_conversion_with_rate_line() {
        let lines = render_conversion(100.0, "usd", "eur").unwrap();
        assert_eq!(lines, "100 USD = 92 EUR\n1 USD = 0.92 EUR");
    }

    #[test]
    fn test_render_conversion_length_has_no_rate_line() {
        let lines = render_conversion(1.0, "km", "mi").unwrap();
        assert_eq!(lines, "1 km = 0.621371 mi");
    }

    #[test]
    fn test_render_conversion_rejects_cross_category() {
        assert_eq!(render_conversion(1.0, "km", "usd"), None);
    }

    #[test]
    fn test_render_history_and_stats_on_empty_store() {
        let (_dir, store) = test_store();
        assert_eq!(render_history(&store), "History is empty.");
        assert_eq!(
            render_stats(&store),
            "Total calculations: 0\nToday: 0\nMost used operator: none"
        );
    }

    #[test]
    fn test_render_history_lists_newest_first() {
        let (_dir, mut store) = test_store();
        store.append("1 + 1", "2").unwrap();
        store.append("2 + 2", "4").unwrap();
        let rendered = render_history(&store);
        let first = rendered.lines().next().unwrap();
        assert!(first.starts_with("2 + 2 = 4"));
    }
}
