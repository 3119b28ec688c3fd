//! Integration tests for the REPL
//!
//! Drives the REPL through a scripted editor.

use std::collections::VecDeque;

use prosaic_foundation::Result;
use prosaic_language::{FrontendConfig, SymbolClassifier};
use prosaic_runtime::{LineEditor, OutputFormat, ReadResult, Repl};

#[derive(Default)]
struct ScriptedEditor {
    lines: VecDeque<ReadResult>,
    prompts: Vec<String>,
    history: Vec<String>,
    keywords: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ReadResult::Line((*l).to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }
}

#[test]
fn eval_switches_formats() {
    let mut repl = Repl::with_editor(ScriptedEditor::default()).without_banner();
    assert_eq!(repl.format(), OutputFormat::Canonical);
    assert_eq!(
        repl.eval("$x is equal to 5").expect("evaluates"),
        "set $x to 5.\n"
    );

    repl.eval(".sort").expect("switches");
    assert_eq!(repl.format(), OutputFormat::Sort);
    let output = repl.eval("define function @f: break").expect("evaluates");
    assert!(output.starts_with("common:"));
}

#[test]
fn help_lists_every_format() {
    let mut repl = Repl::with_editor(ScriptedEditor::default());
    let help = repl.eval(".help").expect("help");
    for format in OutputFormat::ALL {
        assert!(help.contains(&format!(".{}", format.name())));
    }
}

#[test]
fn unknown_commands_keep_the_format() {
    let mut repl = Repl::with_editor(ScriptedEditor::default()).with_format(OutputFormat::Json);
    assert!(repl.eval(".yaml").is_err());
    assert_eq!(repl.format(), OutputFormat::Json);
}

#[test]
fn errors_use_the_configured_filename() {
    let mut repl = Repl::with_editor(ScriptedEditor::default())
        .with_config(FrontendConfig::for_file("session"));
    let err = repl.eval("set 5 to $x").expect_err("fails");
    assert!(err.to_string().contains("session:1:1"));
}

#[test]
fn run_joins_blocks_and_records_history() {
    let editor = ScriptedEditor::new(&[
        "while $x: execute the following;",
        "    call @step;",
        "fin",
        "",
        "break",
    ]);
    let mut repl = Repl::with_editor(editor).without_banner().with_prompt("> ");
    repl.run().expect("runs");

    let editor = repl.editor();
    assert_eq!(
        editor.history,
        vec![
            "while $x: execute the following;\n    call @step;\nfin".to_string(),
            "break".to_string(),
        ]
    );
    // two continuation lines, then a blank line, a statement, and end of input
    assert_eq!(
        editor.prompts,
        vec!["> ", "  ...> ", "  ...> ", "> ", "> ", "> "]
    );
}

#[test]
fn eof_inside_a_block_fails() {
    let editor = ScriptedEditor::new(&["execute the following;"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    assert!(repl.run().is_err());
}

#[test]
fn interrupt_abandons_the_statement() {
    let editor = ScriptedEditor {
        lines: VecDeque::from([
            ReadResult::Line("set $x to (1".to_string()),
            ReadResult::Interrupted,
            ReadResult::Line("continue".to_string()),
        ]),
        ..ScriptedEditor::default()
    };
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().expect("runs");
    assert_eq!(repl.editor().history, vec!["continue".to_string()]);
}

#[test]
fn editor_receives_keywords() {
    let repl = Repl::with_editor(ScriptedEditor::default());
    let keywords = &repl.editor().keywords;
    assert!(keywords.iter().any(|k| k == "otherwise"));
    assert!(keywords.iter().any(|k| k == "integer"));
}

#[test]
fn continuation_follows_the_configured_alphabet() {
    let classifier = SymbolClassifier {
        string_quote: '\'',
        ..SymbolClassifier::new()
    };
    let editor = ScriptedEditor::new(&["call @print with 'two", "lines'", "break"]);
    let mut repl = Repl::with_editor(editor)
        .without_banner()
        .with_config(FrontendConfig::default().with_classifier(classifier));
    repl.run().expect("runs");
    assert_eq!(
        repl.editor().history,
        vec![
            "call @print with 'two\nlines'".to_string(),
            "break".to_string(),
        ]
    );
}
