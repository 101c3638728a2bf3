use crate::domain::model::{ConversationMessage, IntakeQuestion, Role};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct IntakeSession {
    pub answers: HashMap<String, String>,
    pub transcript: Vec<ConversationMessage>,
}

/// Ask each question on `output` and read one line of `input` per answer.
/// End of input leaves the remaining answers blank.
pub fn run_intake<R: BufRead, W: Write>(
    questions: &[IntakeQuestion],
    mut input: R,
    mut output: W,
) -> Result<IntakeSession> {
    let mut session = IntakeSession::default();

    for question in questions {
        writeln!(output, "{}", question.prompt)?;
        writeln!(output, "  ({})", question.guidance)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = line.trim().to_string();

        session
            .transcript
            .push(ConversationMessage::new(Role::Assistant, question.prompt));
        session
            .transcript
            .push(ConversationMessage::new(Role::User, answer.clone()));
        session.answers.insert(question.key.to_string(), answer);
    }

    Ok(session)
}
