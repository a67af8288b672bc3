//! Blocking terminal prompts: confirmations and free-text input.

use std::io::{self, BufRead, Write as IoWrite};

/// Interactive input port for confirmations and short text answers.
///
/// `&mut self` so test doubles can script a sequence of answers.
pub trait Prompt {
    /// Asks `question (y/n) > ` and returns true only for an explicit yes.
    fn confirm(&mut self, question: &str) -> bool;

    /// Prints `label` and returns one line of input, without the newline.
    fn line(&mut self, label: &str) -> String;
}

/// Real prompt reading from stdin. A read failure (closed stdin) is
/// treated as a decline / empty answer rather than an error.
#[derive(Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(_) => buf.trim_end_matches(['\n', '\r']).to_string(),
            Err(_) => String::new(),
        }
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} (y/n) > ", question);
        let _ = io::stdout().flush();
        self.read_line().trim().eq_ignore_ascii_case("y")
    }

    fn line(&mut self, label: &str) -> String {
        print!("{}", label);
        let _ = io::stdout().flush();
        self.read_line()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Prompt;
    use std::collections::VecDeque;

    /// Scripted prompt double: pops canned answers in order.
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self) -> String {
            self.answers.pop_front().unwrap_or_default()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&mut self, question: &str) -> bool {
            self.asked.push(question.to_string());
            self.next().trim().eq_ignore_ascii_case("y")
        }

        fn line(&mut self, label: &str) -> String {
            self.asked.push(label.to_string());
            self.next()
        }
    }
}
