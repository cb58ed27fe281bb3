// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser module tests
//!
//! Tests for the two line-oriented formats:
//! - Rule lines (combo = name, tokens, optional args)
//! - Script lines (press = token / wait = seconds)
//! - Comment and blank-line handling
//! - Line-numbered error reporting

use crate::core::parser::*;
use crate::core::types::CommandToken::*;
use std::io::Write;

#[test]
fn test_parse_combo_line() {
    let result = parse_combo_line("combo = dash_attack, X X Y");
    assert!(result.is_ok());

    let (_, (name, pattern_text, args)) = result.unwrap();
    assert_eq!(name, "dash_attack");
    assert_eq!(pattern_text, "X X Y");
    assert_eq!(args, None);
}

#[test]
fn test_parse_combo_line_with_args() {
    let (_, (name, pattern_text, args)) =
        parse_combo_line("combo = jump_kick, Up B, rising").unwrap();

    assert_eq!(name, "jump_kick");
    assert_eq!(pattern_text, "Up B");
    assert_eq!(args, Some("rising".to_string()));
}

#[test]
fn test_parse_rules_file() {
    let content = "\
# reference rule set
combo = dash_attack, X X Y

combo = jump_kick, Up B
";

    let specs = parse_rules_file(content).unwrap();

    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].name, "dash_attack");
    assert_eq!(specs[0].pattern, vec![X, X, Y]);
    assert_eq!(specs[0].action.id, "dash_attack");
    assert_eq!(specs[1].name, "jump_kick");
    assert_eq!(specs[1].pattern, vec![Up, B]);
}

#[test]
fn test_rules_file_token_names_case_insensitive() {
    let specs = parse_rules_file("combo = jump_kick, UP b").unwrap();
    assert_eq!(specs[0].pattern, vec![Up, B]);
}

#[test]
fn test_rules_file_unknown_token_reports_line() {
    let content = "\
combo = dash_attack, X X Y
combo = broken, X Start
";

    let err = parse_rules_file(content).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnknownToken { ref token, line: 2 } if token == "Start"
    ));
}

#[test]
fn test_rules_file_duplicate_name_rejected() {
    let content = "\
combo = dash_attack, X X Y
combo = dash_attack, Up B
";

    let err = parse_rules_file(content).unwrap_err();
    assert!(matches!(
        err,
        ParseError::DuplicateName { ref name, line: 2 } if name == "dash_attack"
    ));
}

#[test]
fn test_rules_file_bad_syntax_reports_line() {
    let content = "\
# fine so far
combo dash_attack X X Y
";

    let err = parse_rules_file(content).unwrap_err();
    assert!(matches!(err, ParseError::InvalidSyntax { line: 2, .. }));
}

#[test]
fn test_parse_script_file() {
    let content = "\
# dash attack, briskly
press = X
wait = 0.1
press = X
wait = 0.1
press = Y
";

    let events = parse_script_file(content).unwrap();

    assert_eq!(
        events,
        vec![
            ScriptEvent::Press(X),
            ScriptEvent::Wait(0.1),
            ScriptEvent::Press(X),
            ScriptEvent::Wait(0.1),
            ScriptEvent::Press(Y),
        ]
    );
}

#[test]
fn test_script_file_unknown_token() {
    let err = parse_script_file("press = Start").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnknownToken { ref token, line: 1 } if token == "Start"
    ));
}

#[test]
fn test_script_file_rejects_negative_wait() {
    let err = parse_script_file("wait = -0.5").unwrap_err();
    assert!(matches!(err, ParseError::InvalidSyntax { line: 1, .. }));
}

#[test]
fn test_script_file_rejects_unknown_directive() {
    let err = parse_script_file("hold = X").unwrap_err();
    assert!(matches!(err, ParseError::InvalidSyntax { line: 1, .. }));
}

#[test]
fn test_parse_rules_file_from_disk() {
    // Same path the CLI takes: write a rules file, read it back, parse.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "combo = dash_attack, X X Y").unwrap();
    writeln!(file, "combo = jump_kick, Up B").unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let specs = parse_rules_file(&content).unwrap();

    assert_eq!(specs.len(), 2);
}
