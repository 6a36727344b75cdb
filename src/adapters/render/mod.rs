//! Text renderer for the survey wizard.
//!
//! A pure function of the wizard state: it reads the catalog and the
//! [`WizardState`](crate::domain::survey::WizardState) and never mutates
//! either. The terminal host prints its output after every intent.

use crate::domain::catalog::{professor_accent, Professor, Question};
use crate::domain::foundation::{Fixed2, SessionUser};
use crate::domain::survey::{ErrorKey, SubmissionPhase, SurveyWizard, MIN_COMMENT_CHARS};

/// Width of the progress bar in cells.
const PROGRESS_WIDTH: usize = 30;

/// Renders the whole screen for the current state.
pub fn render(wizard: &SurveyWizard, student: &SessionUser) -> String {
    let mut out = String::new();
    out.push_str(&render_header(student));
    out.push_str(&render_progress(wizard.progress()));

    match wizard.current_question() {
        Some(question) => out.push_str(&render_question(wizard, question)),
        None => out.push_str("No questions are available for this survey.\n\n"),
    }

    if wizard.is_last_question() {
        out.push_str(&render_comments(wizard));
        out.push_str(&render_submit(wizard));
    }

    match wizard.phase() {
        SubmissionPhase::ModalOpen | SubmissionPhase::Submitting => {
            out.push_str(&render_modal(wizard))
        }
        SubmissionPhase::Done => out.push_str("Evaluation submitted.\n"),
        SubmissionPhase::Idle => {}
    }

    out
}

fn render_header(student: &SessionUser) -> String {
    let mut section = String::from("Teacher Evaluation\nUAEM - Rectoría\n");
    match &student.matricula {
        Some(matricula) => {
            section.push_str(&format!("Student: {} ({})\n\n", student.full_name(), matricula))
        }
        None => section.push_str(&format!("Student: {}\n\n", student.full_name())),
    }
    section
}

/// Renders the bar and the two-decimal percentage.
pub fn render_progress(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "Progress [{}{}] {}%\nYour evaluation is completely anonymous.\n\n",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        Fixed2::new(clamped),
    )
}

fn render_question(wizard: &SurveyWizard, question: &Question) -> String {
    let catalog = wizard.catalog();
    let state = wizard.state();

    let mut section = format!(
        "{}\nQuestion {} of {}\n{}\n  {}\n\n",
        question.topic.to_uppercase(),
        state.current_question_index + 1,
        catalog.question_count(),
        question.category,
        question.text,
    );

    let legend: Vec<String> = catalog
        .options
        .iter()
        .map(|o| format!("{} {}", o.value, o.label))
        .collect();
    section.push_str(&format!("Options: {}\n\n", legend.join(" | ")));

    for (index, professor) in catalog.professors.iter().enumerate() {
        section.push_str(&professor_heading(index, professor));

        let selected = state.answers.get(question.id, professor.id);
        let cells: Vec<String> = catalog
            .options
            .iter()
            .map(|o| {
                if Some(o.value) == selected {
                    format!("[{}]", o.value)
                } else {
                    format!("({})", o.value)
                }
            })
            .collect();
        section.push_str(&format!("    {}", cells.join(" ")));

        if let Some(option) = selected.and_then(|v| catalog.option(v)) {
            section.push_str(&format!("   {}", option.label));
        }
        section.push('\n');

        let key = ErrorKey::Answer {
            question: question.id,
            professor: professor.id,
        };
        if let Some(error) = state.errors.get(&key) {
            section.push_str(&format!("    ! {}\n", error));
        }
    }
    section.push('\n');

    let mut nav = Vec::new();
    if state.current_question_index > 0 {
        nav.push("p: previous");
    }
    if !wizard.is_last_question() {
        nav.push("n: next");
    }
    if !nav.is_empty() {
        section.push_str(&format!("{}\n\n", nav.join("   ")));
    }

    section
}

fn render_comments(wizard: &SurveyWizard) -> String {
    let state = wizard.state();
    let mut section = format!(
        "Comments per professor (all required, minimum {} characters)\n",
        MIN_COMMENT_CHARS
    );

    for (index, professor) in wizard.catalog().professors.iter().enumerate() {
        section.push_str(&professor_heading(index, professor));

        let text = state.comments.get(professor.id).unwrap_or_default();
        if !text.is_empty() {
            section.push_str(&format!("    \"{}\"\n", text));
        }
        section.push_str(&format!(
            "    {} characters (minimum {})",
            text.chars().count(),
            MIN_COMMENT_CHARS
        ));
        if let Some(error) = state.errors.get(&ErrorKey::Comment(professor.id)) {
            section.push_str(&format!("   ! {}", error));
        }
        section.push('\n');
    }
    section.push('\n');
    section
}

fn render_submit(wizard: &SurveyWizard) -> String {
    let answered = wizard.all_questions_answered();
    let comments = wizard.all_comments_valid();

    if answered && comments {
        return format!(
            "s: Submit evaluation of {} professors\n\n",
            wizard.catalog().professor_count()
        );
    }

    let mut section = String::from("Complete all evaluations and comments to continue\n");
    if !answered {
        section.push_str("  Make sure you evaluate every professor on every question.\n");
    }
    if !comments {
        section.push_str(&format!(
            "  Every professor needs a comment (minimum {} characters each).\n",
            MIN_COMMENT_CHARS
        ));
    }
    section.push('\n');
    section
}

fn render_modal(wizard: &SurveyWizard) -> String {
    let mut section = String::from("== Submit evaluation? ==\n");
    section.push_str(&format!(
        "You are about to submit the evaluation of {} professors.\n",
        wizard.catalog().professor_count()
    ));
    section.push_str(
        "Once submitted you cannot modify your answers. Your evaluation is completely anonymous.\n",
    );
    if wizard.state().is_submitting() {
        section.push_str("Submitting...\n");
    } else {
        section.push_str("y: Confirm   x: Cancel\n");
    }
    section
}

fn professor_heading(index: usize, professor: &Professor) -> String {
    format!(
        "[{}] {} · {} ({})\n",
        index + 1,
        professor.name,
        professor.subject,
        accent_name(professor_accent(index)),
    )
}

/// Colour word of an accent tag: "from-blue-500 to-blue-600" -> "blue".
fn accent_name(accent: &str) -> &str {
    accent
        .strip_prefix("from-")
        .and_then(|rest| rest.split('-').next())
        .unwrap_or(accent)
}
