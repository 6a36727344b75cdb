//! Line-command parser for the terminal host.
//!
//! Commands (professors are numbered from 1 in roster order):
//!
//! ```text
//! a <professor#> <1-5>   answer the current question for a professor
//! c <professor#> <text>  set a professor's comment
//! n / p                  next / previous question
//! s                      open the submit confirmation
//! y / x                  confirm / cancel the submission
//! q                      quit
//! ```

use thiserror::Error;

use crate::domain::foundation::{LikertValue, ProfessorId, ValidationError};
use crate::domain::survey::{Intent, SurveyWizard};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer { professor: usize, value: LikertValue },
    Comment { professor: usize, text: String },
    Next,
    Previous,
    Submit,
    Confirm,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("invalid answer: {0}")]
    InvalidValue(#[from] ValidationError),

    #[error("professor {index} does not exist (1..={count})")]
    ProfessorOutOfRange { index: usize, count: usize },

    #[error("the survey has no questions")]
    NoQuestion,
}

/// Splits off the first whitespace-delimited token.
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim_start()),
        None => (input, ""),
    }
}

fn parse_index(token: &str) -> Result<usize, CommandError> {
    if token.is_empty() {
        return Err(CommandError::MissingArgument("professor number"));
    }
    token
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let (head, rest) = split_token(line);

    match head.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "a" => {
            let (professor, rest) = split_token(rest);
            let professor = parse_index(professor)?;
            let (value, _) = split_token(rest);
            if value.is_empty() {
                return Err(CommandError::MissingArgument("answer value"));
            }
            let value = value
                .parse::<u8>()
                .map_err(|_| CommandError::InvalidNumber(value.to_string()))?;
            Ok(Command::Answer {
                professor,
                value: LikertValue::try_from_u8(value)?,
            })
        }
        "c" => {
            let (professor, text) = split_token(rest);
            Ok(Command::Comment {
                professor: parse_index(professor)?,
                text: text.trim_end_matches(['\r', '\n']).to_string(),
            })
        }
        "n" => Ok(Command::Next),
        "p" => Ok(Command::Previous),
        "s" => Ok(Command::Submit),
        "y" => Ok(Command::Confirm),
        "x" => Ok(Command::Cancel),
        "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

impl Command {
    /// Resolves professor numbers and the current question against the
    /// wizard. `Quit` maps to `None`.
    pub fn into_intent(self, wizard: &SurveyWizard) -> Result<Option<Intent>, CommandError> {
        let intent = match self {
            Command::Answer { professor, value } => {
                let question = wizard.current_question().ok_or(CommandError::NoQuestion)?;
                Intent::AnswerRecorded {
                    question: question.id,
                    professor: resolve_professor(wizard, professor)?,
                    value,
                }
            }
            Command::Comment { professor, text } => Intent::CommentChanged {
                professor: resolve_professor(wizard, professor)?,
                text,
            },
            Command::Next => Intent::NextRequested,
            Command::Previous => Intent::PreviousRequested,
            Command::Submit => Intent::SubmitRequested,
            Command::Confirm => Intent::ConfirmRequested,
            Command::Cancel => Intent::CancelRequested,
            Command::Quit => return Ok(None),
        };
        Ok(Some(intent))
    }
}

fn resolve_professor(
    wizard: &SurveyWizard,
    index: usize,
) -> Result<ProfessorId, CommandError> {
    let professors = &wizard.catalog().professors;
    index
        .checked_sub(1)
        .and_then(|i| professors.get(i))
        .map(|p| p.id)
        .ok_or(CommandError::ProfessorOutOfRange {
            index,
            count: professors.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{fallback_options, fallback_professors, fallback_questions, SurveyCatalog};
    use crate::domain::foundation::QuestionId;

    fn wizard() -> SurveyWizard {
        SurveyWizard::new(SurveyCatalog::new(
            fallback_questions(),
            fallback_options(),
            fallback_professors(),
        ))
    }

    #[test]
    fn parses_answer() {
        assert_eq!(
            parse_command("a 2 5").unwrap(),
            Command::Answer {
                professor: 2,
                value: LikertValue::try_from_u8(5).unwrap()
            }
        );
    }

    #[test]
    fn comment_keeps_inner_spacing() {
        assert_eq!(
            parse_command("c 1 Explica  muy bien\n").unwrap(),
            Command::Comment {
                professor: 1,
                text: "Explica  muy bien".to_string()
            }
        );
    }

    #[test]
    fn single_letter_commands_are_case_insensitive() {
        assert_eq!(parse_command(" N ").unwrap(), Command::Next);
        assert_eq!(parse_command("p").unwrap(), Command::Previous);
        assert_eq!(parse_command("s").unwrap(), Command::Submit);
        assert_eq!(parse_command("y").unwrap(), Command::Confirm);
        assert_eq!(parse_command("x").unwrap(), Command::Cancel);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_errors_are_typed() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("z"), Err(CommandError::Unknown("z".to_string())));
        assert_eq!(
            parse_command("a"),
            Err(CommandError::MissingArgument("professor number"))
        );
        assert_eq!(
            parse_command("a 1"),
            Err(CommandError::MissingArgument("answer value"))
        );
        assert_eq!(
            parse_command("a one 3"),
            Err(CommandError::InvalidNumber("one".to_string()))
        );
        assert!(matches!(
            parse_command("a 1 6"),
            Err(CommandError::InvalidValue(_))
        ));
    }

    #[test]
    fn answer_targets_current_question_and_roster_position() {
        let intent = parse_command("a 3 4")
            .unwrap()
            .into_intent(&wizard())
            .unwrap();
        assert_eq!(
            intent,
            Some(Intent::AnswerRecorded {
                question: QuestionId::new(1),
                professor: ProfessorId::new(3),
                value: LikertValue::try_from_u8(4).unwrap(),
            })
        );
    }

    #[test]
    fn professor_zero_or_past_roster_is_rejected() {
        let w = wizard();
        for index in [0, 4] {
            let result = Command::Comment {
                professor: index,
                text: String::new(),
            }
            .into_intent(&w);
            assert_eq!(
                result,
                Err(CommandError::ProfessorOutOfRange { index, count: 3 })
            );
        }
    }

    #[test]
    fn quit_has_no_intent() {
        assert_eq!(Command::Quit.into_intent(&wizard()).unwrap(), None);
    }
}
