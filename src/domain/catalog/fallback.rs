//! Bundled fallback catalog.
//!
//! Used section by section when the corresponding remote source is
//! unavailable, so a broken catalog endpoint never blocks a survey.

use once_cell::sync::Lazy;

use super::{LikertOption, Professor, Question};
use crate::domain::foundation::{LikertValue, ProfessorId};

static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    const CLIMATE: &str = "Clima de aula y valores";
    const MASTERY: &str = "Dominio de la asignatura";
    const PLANNING: &str = "Planeación y organización";
    const STRATEGIES: &str = "Estrategias de enseñanza";
    const ASSESSMENT: &str = "Evaluación del aprendizaje";
    const PUNCTUALITY: &str = "Cumplimiento y puntualidad";

    vec![
        Question::new(1, CLIMATE, "El profesor promueve un ambiente de respeto y tolerancia en el aula", "Clima de aula"),
        Question::new(2, CLIMATE, "El profesor fomenta la participación activa de todos los estudiantes", "Participación"),
        Question::new(3, CLIMATE, "El profesor muestra disposición para atender dudas y consultas", "Atención"),
        Question::new(4, CLIMATE, "El profesor trata a los estudiantes con respeto y equidad", "Respeto"),
        Question::new(5, CLIMATE, "El profesor promueve valores éticos y profesionales", "Valores"),
        Question::new(6, MASTERY, "El profesor demuestra dominio y conocimiento de la materia", "Conocimiento"),
        Question::new(7, MASTERY, "El profesor relaciona los contenidos con situaciones de la vida real", "Aplicación práctica"),
        Question::new(8, MASTERY, "El profesor utiliza ejemplos y casos relevantes para facilitar el aprendizaje", "Ejemplos"),
        Question::new(9, MASTERY, "El profesor demuestra actualización en los temas de la asignatura", "Actualización"),
        Question::new(10, PLANNING, "El profesor presenta y explica el programa de la asignatura al inicio del curso", "Presentación"),
        Question::new(11, PLANNING, "El profesor organiza y estructura las clases de manera clara", "Organización"),
        Question::new(12, PLANNING, "El profesor cumple con el programa establecido de la asignatura", "Cumplimiento"),
        Question::new(13, PLANNING, "El profesor distribuye adecuadamente el tiempo de la clase", "Tiempo"),
        Question::new(14, STRATEGIES, "El profesor explica con claridad los temas de la clase", "Claridad"),
        Question::new(15, STRATEGIES, "El profesor utiliza recursos didácticos apropiados (presentaciones, videos, etc.)", "Recursos"),
        Question::new(16, STRATEGIES, "El profesor motiva e incentiva el aprendizaje de los estudiantes", "Motivación"),
        Question::new(17, STRATEGIES, "El profesor fomenta el pensamiento crítico y analítico", "Pensamiento crítico"),
        Question::new(18, ASSESSMENT, "El profesor explica claramente los criterios de evaluación", "Criterios"),
        Question::new(19, ASSESSMENT, "El profesor evalúa de manera justa y objetiva", "Justicia"),
        Question::new(20, ASSESSMENT, "El profesor proporciona retroalimentación oportuna sobre el desempeño", "Retroalimentación"),
        Question::new(21, PUNCTUALITY, "El profesor es puntual al inicio y término de las clases", "Puntualidad"),
        Question::new(22, PUNCTUALITY, "El profesor asiste regularmente a clases", "Asistencia"),
    ]
});

static OPTIONS: Lazy<Vec<LikertOption>> = Lazy::new(|| {
    [
        (5, "Totalmente de acuerdo", "bg-green-500"),
        (4, "De acuerdo", "bg-blue-500"),
        (3, "Neutral", "bg-yellow-500"),
        (2, "En desacuerdo", "bg-orange-500"),
        (1, "Totalmente en desacuerdo", "bg-red-500"),
    ]
    .into_iter()
    .filter_map(|(value, label, color)| {
        LikertValue::try_from_u8(value).ok().map(|value| LikertOption {
            value,
            label: label.to_string(),
            color: color.to_string(),
        })
    })
    .collect()
});

static PROFESSORS: Lazy<Vec<Professor>> = Lazy::new(|| {
    [
        (1, "Dr. María González", "Arquitectura de Software"),
        (2, "Ing. Carlos Rodríguez", "Base de Datos"),
        (3, "Mtra. Ana López", "Desarrollo Web"),
    ]
    .into_iter()
    .map(|(id, name, subject)| Professor {
        id: ProfessorId::new(id),
        name: name.to_string(),
        subject: subject.to_string(),
        subjects: Vec::new(),
    })
    .collect()
});

/// The 22 bundled evaluation questions.
pub fn fallback_questions() -> Vec<Question> {
    QUESTIONS.clone()
}

/// The five bundled Likert options, strongest agreement first.
pub fn fallback_options() -> Vec<LikertOption> {
    OPTIONS.clone()
}

/// The three bundled roster entries.
pub fn fallback_professors() -> Vec<Professor> {
    PROFESSORS.clone()
}
