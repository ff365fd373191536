use consoleshim::fmt::{Color, colorize};
use consoleshim::{Severity, TerminalConsole};
use serde_json::json;

#[test]
fn plain_line_with_tag() {
    let console = TerminalConsole::new().colors(false);
    let line = console.format_line(Severity::Warn, &[json!("disk"), json!(91)]);
    assert_eq!(line, "[WARN ] disk 91");
}

#[test]
fn plain_line_without_tag() {
    let console = TerminalConsole::new().colors(false).tags(false);
    let args = colorize(vec![json!("ok"), json!("green")]);
    assert_eq!(console.format_line(Severity::Info, &args), "ok");
}

#[test]
fn colored_line_renders_style_directive() {
    let console = TerminalConsole::new().tags(false);
    let args = colorize(vec![json!("ok"), json!("orange")]);
    let expected = format!("{}ok{}", Color::orange().fg_ansi(), Color::RESET);
    assert_eq!(console.format_line(Severity::Log, &args), expected);
}

#[test]
fn colored_tag_uses_level_color() {
    let console = TerminalConsole::new();
    let line = console.format_line(Severity::Error, &[json!("x")]);
    assert!(line.starts_with(&Color::red().fg_ansi()));
    assert!(line.ends_with(" x"));
}
