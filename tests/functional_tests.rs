use std::io::Write;
use std::process::{Child, ChildStdin, Command, Output, Stdio};

use regex::Regex;


#[test]
fn can_answer_single_question() {
    let (stdout, stderr, status) = play_quiz("arithmetic", &["all", "4", "n", "n"]);
    assert!(status.success());
    assert_eq!(stderr, "");
    assert_in_order(&stdout, &[
        "Welcome to the quiz!",
        "Question 1/1",
        "2+2?",
        "Correct!",
        "You got 100.0%",
        "Thank you for playing!",
    ]);
}


#[test]
fn asks_only_as_many_questions_as_requested() {
    let (stdout, _, status) = play_quiz("pair", &["1", "2", "n", "n"]);
    assert!(status.success());
    assert_in_order(&stdout, &[
        "Question 1/1",
        r"RE: (1\+1\?|3\+3\?)",
        r"RE: (Correct!|Incorrect!)",
        r"RE: You got (100\.0|0\.0)%",
    ]);
    assert!(!stdout.contains("Question 2/"));
}


#[test]
fn count_larger_than_pool_asks_every_question() {
    let (stdout, _, _) = play_quiz("pair", &["10", "2", "2", "n", "n"]);
    assert_in_order(&stdout, &["Question 1/2", "Question 2/2", "You got 50.0%"]);
}


#[test]
fn can_review_mistakes() {
    let (stdout, _, status) = play_quiz("arithmetic", &["all", "5", "y", "n"]);
    assert!(status.success());
    assert_in_order(&stdout, &[
        "2+2?",
        "Incorrect!",
        "The correct answer was 4",
        "You got 0.0%",
        "2+2?",
        "Your answer was 5",
        "The correct answer was 4",
        "Thank you for playing!",
    ]);
}


#[test]
fn answers_are_compared_exactly() {
    let (stdout, _, _) = play_quiz("bom", &["all", "jupiter", "y", "n"]);
    assert_in_order(&stdout, &[
        "Largest planet?",
        "Incorrect!",
        "The correct answer was Jupiter",
        "Your answer was jupiter",
    ]);
}


#[test]
fn invalid_count_is_asked_again() {
    let (stdout, _, status) = play_quiz("arithmetic", &["0", "some", "all", "4", "n", "n"]);
    assert!(status.success());
    assert_eq!(
        stdout.matches("Warning: please enter a positive number or 'all'.").count(), 2);
    assert_in_order(&stdout, &["Question 1/1", "Correct!", "You got 100.0%"]);
}


#[test]
fn can_play_again() {
    let (stdout, _, _) = play_quiz(
        "arithmetic", &["all", "4", "n", "", "all", "3", "n", "n"]);
    assert_in_order(&stdout, &[
        "You got 100.0%",
        "Starting again...",
        "Question 1/1",
        "You got 0.0%",
        "Thank you for playing!",
    ]);
    assert_eq!(stdout.matches("Starting again...").count(), 1);
}


#[test]
fn choices_are_lettered() {
    let (stdout, _, _) = play_quiz("capitals", &["all", "a", "a", "a", "n", "n"]);
    assert_in_order(&stdout, &["a) Paris", "b) London", "c) Berlin"]);
    assert_in_order(&stdout, &["a) Quito", "b) Lima"]);
    assert!(!stdout.contains("a) Ulan Bator"));
}


#[test]
fn same_seed_gives_same_order() {
    let input = ["all", "x", "x", "x", "n", "n"];
    let (first, _, _) = play_quiz_with_args("capitals", &["--seed", "5"], &input);
    let (second, _, _) = play_quiz_with_args("capitals", &["--seed", "5"], &input);
    assert_eq!(first, second);
}


#[test]
fn end_of_input_exits_quietly() {
    let (stdout, stderr, status) = play_quiz("capitals", &["all", "a"]);
    assert!(status.success());
    assert_eq!(stderr, "");
    assert!(!stdout.contains("Thank you for playing!"));
}


#[test]
fn missing_file_is_an_error() {
    assert_startup_error("does_not_exist", "Error: could not read questions from");
}


#[test]
fn empty_file_is_an_error() {
    assert_startup_error("empty", "Error: no questions found");
}


#[test]
fn malformed_file_is_an_error() {
    assert_startup_error("malformed", "Error: could not parse JSON");
}


fn assert_startup_error(quiz: &str, message: &str) {
    let (stdout, stderr, status) = play_quiz(quiz, &[]);
    assert_eq!(status.code(), Some(2));
    assert_eq!(stdout, "");
    assert!(stderr.starts_with(message), "Contents of stderr: {:?}", stderr);
}

fn play_quiz(name: &str, input: &[&str]) -> (String, String, std::process::ExitStatus) {
    play_quiz_with_args(name, &["--seed", "1"], input)
}

fn play_quiz_with_args(
    name: &str, extra_args: &[&str], input: &[&str]
) -> (String, String, std::process::ExitStatus) {
    let mut child = spawn(name, extra_args);
    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        for line in input {
            stdin_write(stdin, line);
        }
    }

    let Output { status, stdout, stderr } = child.wait_with_output()
        .expect("Failed to read stdout");
    (
        String::from_utf8_lossy(&stdout).to_string(),
        String::from_utf8_lossy(&stderr).to_string(),
        status,
    )
}

/// Check that each item of `data` occurs in `stdout`, each after the one before it.
/// Items starting with `RE:` are regular expressions.
fn assert_in_order(stdout: &str, data: &[&str]) {
    let mut last_pos = 0;
    for datum in data {
        let found = if datum.starts_with("RE:") {
            let re = Regex::new(datum[3..].trim()).unwrap();
            re.find(&stdout[last_pos..]).map(|m| (m.start(), m.end() - m.start()))
        } else {
            stdout[last_pos..].find(datum).map(|pos| (pos, datum.len()))
        };

        if let Some((pos, len)) = found {
            // `pos` is relative to `stdout[last_pos..]`.
            last_pos = (pos + last_pos) + len;
        } else {
            panic!("Missing: {:?}; Contents of stdout: {:?}", datum, stdout);
        }
    }
}

fn spawn(quiz: &str, extra_args: &[&str]) -> Child {
    Command::new(env!("CARGO_BIN_EXE_trivia"))
        .arg("--no-color")
        .args(extra_args)
        .arg(&format!("tests/quizzes/{}.json", quiz))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn child process")
}

fn stdin_write(stdin: &mut ChildStdin, line: &str) {
    stdin.write_all(line.as_bytes()).expect("Failed to write to stdin");
    stdin.write_all("\n".as_bytes()).expect("Failed to write to stdin");
}
