//! Per-professor evaluation metrics.

use serde::Serialize;

use crate::domain::catalog::{Professor, SurveyCatalog};
use crate::domain::foundation::{Fixed2, LikertValue, ProfessorId, QuestionId};

use super::WizardState;

/// One recorded score, annotated with the question it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse {
    pub question_id: QuestionId,
    pub question_text: String,
    pub category: String,
    pub topic: String,
    pub score: LikertValue,
}

/// Aggregate scores for one professor.
///
/// Averages and percentages divide by the catalog's question count, not by
/// the number of answered questions. Callers only compute metrics for a
/// fully answered survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorMetrics {
    pub total_score: u32,
    pub average_score: Fixed2,
    pub percentage_score: Fixed2,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub positive_percentage: Fixed2,
    pub neutral_percentage: Fixed2,
    pub negative_percentage: Fixed2,
}

impl ProfessorMetrics {
    pub fn from_scores(scores: &[LikertValue], question_count: usize) -> Self {
        let total_score: u32 = scores.iter().map(|s| u32::from(s.value())).sum();
        let positive_count = scores.iter().filter(|s| s.is_positive()).count();
        let neutral_count = scores.iter().filter(|s| s.is_neutral()).count();
        let negative_count = scores.iter().filter(|s| s.is_negative()).count();

        let average = if question_count == 0 {
            0.0
        } else {
            f64::from(total_score) / question_count as f64
        };
        let whole = question_count as f64;

        Self {
            total_score,
            average_score: Fixed2::new(average),
            percentage_score: Fixed2::new(average / f64::from(LikertValue::MAX) * 100.0),
            positive_count,
            neutral_count,
            negative_count,
            positive_percentage: Fixed2::percent_of(positive_count as f64, whole),
            neutral_percentage: Fixed2::percent_of(neutral_count as f64, whole),
            negative_percentage: Fixed2::percent_of(negative_count as f64, whole),
        }
    }
}

/// Everything computed for one professor at confirm time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorEvaluation {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub subject: String,
    pub total_questions: usize,
    pub responses: Vec<ScoredResponse>,
    pub comment: String,
    pub metrics: ProfessorMetrics,
}

impl ProfessorEvaluation {
    /// Collects the professor's recorded scores in catalog order.
    pub fn compute(catalog: &SurveyCatalog, state: &WizardState, professor: &Professor) -> Self {
        let responses: Vec<ScoredResponse> = catalog
            .questions
            .iter()
            .filter_map(|q| {
                state
                    .answers
                    .get(q.id, professor.id)
                    .map(|score| ScoredResponse {
                        question_id: q.id,
                        question_text: q.text.clone(),
                        category: q.category.clone(),
                        topic: q.topic.clone(),
                        score,
                    })
            })
            .collect();

        let scores: Vec<LikertValue> = responses.iter().map(|r| r.score).collect();
        let metrics = ProfessorMetrics::from_scores(&scores, catalog.question_count());

        Self {
            professor_id: professor.id,
            professor_name: professor.name.clone(),
            subject: professor.subject.clone(),
            total_questions: catalog.question_count(),
            responses,
            comment: state
                .comments
                .get(professor.id)
                .unwrap_or_default()
                .to_string(),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{fallback_options, fallback_professors, fallback_questions};
    use proptest::prelude::*;

    fn values(raw: &[u8]) -> Vec<LikertValue> {
        raw.iter()
            .map(|v| LikertValue::try_from_u8(*v).unwrap())
            .collect()
    }

    fn scores_10_5_7() -> Vec<LikertValue> {
        let mut raw = vec![5u8; 10];
        raw.extend([3u8; 5]);
        raw.extend([1u8; 7]);
        values(&raw)
    }

    #[test]
    fn metrics_for_mixed_scores_over_twenty_two_questions() {
        let metrics = ProfessorMetrics::from_scores(&scores_10_5_7(), 22);

        assert_eq!(metrics.total_score, 72);
        assert_eq!(metrics.average_score.to_string(), "3.27");
        assert_eq!(metrics.percentage_score.to_string(), "65.45");
        assert_eq!(metrics.positive_count, 10);
        assert_eq!(metrics.neutral_count, 5);
        assert_eq!(metrics.negative_count, 7);
        assert_eq!(metrics.positive_percentage.to_string(), "45.45");
        assert_eq!(metrics.neutral_percentage.to_string(), "22.73");
        assert_eq!(metrics.negative_percentage.to_string(), "31.82");
    }

    #[test]
    fn divisor_is_question_count_not_answered_count() {
        // Two answers out of four questions.
        let metrics = ProfessorMetrics::from_scores(&values(&[4, 4]), 4);
        assert_eq!(metrics.average_score.to_string(), "2.00");
        assert_eq!(metrics.positive_percentage.to_string(), "50.00");
    }

    #[test]
    fn score_two_is_negative_and_four_is_positive() {
        let metrics = ProfessorMetrics::from_scores(&values(&[2, 4]), 2);
        assert_eq!(metrics.negative_count, 1);
        assert_eq!(metrics.positive_count, 1);
        assert_eq!(metrics.neutral_count, 0);
    }

    #[test]
    fn zero_questions_yield_zero_metrics() {
        let metrics = ProfessorMetrics::from_scores(&[], 0);
        assert_eq!(metrics.average_score.to_string(), "0.00");
        assert_eq!(metrics.positive_percentage.to_string(), "0.00");
    }

    #[test]
    fn metrics_serialize_two_decimal_strings() {
        let metrics = ProfessorMetrics::from_scores(&scores_10_5_7(), 22);
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["total_score"], 72);
        assert_eq!(json["average_score"], "3.27");
        assert_eq!(json["positive_percentage"], "45.45");
    }

    #[test]
    fn evaluation_collects_responses_in_catalog_order() {
        let catalog = SurveyCatalog::new(
            fallback_questions().into_iter().take(3).collect(),
            fallback_options(),
            fallback_professors(),
        );
        let professor = &catalog.professors[1];
        let mut state = WizardState::new();
        let five = LikertValue::try_from_u8(5).unwrap();
        let two = LikertValue::try_from_u8(2).unwrap();
        state.answers.record(catalog.questions[2].id, professor.id, two);
        state.answers.record(catalog.questions[0].id, professor.id, five);
        state.comments.set(professor.id, "  Buen profesor, muy claro  ");

        let evaluation = ProfessorEvaluation::compute(&catalog, &state, professor);

        assert_eq!(evaluation.total_questions, 3);
        assert_eq!(evaluation.responses.len(), 2);
        assert_eq!(evaluation.responses[0].question_id, catalog.questions[0].id);
        assert_eq!(evaluation.responses[1].score, two);
        assert_eq!(evaluation.comment, "  Buen profesor, muy claro  ");
        assert_eq!(evaluation.metrics.total_score, 7);
    }

    proptest! {
        #[test]
        fn classification_counts_partition_scores(raw in prop::collection::vec(1u8..=5, 0..30)) {
            let scores = values(&raw);
            let metrics = ProfessorMetrics::from_scores(&scores, 30);
            prop_assert_eq!(
                metrics.positive_count + metrics.neutral_count + metrics.negative_count,
                scores.len()
            );
            prop_assert_eq!(
                metrics.total_score,
                raw.iter().map(|v| u32::from(*v)).sum::<u32>()
            );
        }
    }
}
