use super::*;
use crate::quiz::sample_quiz;

fn answers(pairs: &[(usize, usize)]) -> Answers {
    pairs.iter().copied().collect()
}

#[test]
fn numbers_questions_from_one() {
    let display = QuizDisplay::new(&sample_quiz(), &Answers::new(), false);
    let numbers: Vec<usize> = display.questions.iter().map(|q| q.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn nothing_is_marked_before_submission() {
    let display = QuizDisplay::new(&sample_quiz(), &answers(&[(0, 0)]), false);
    assert!(display.questions[0].options[0].selected);
    assert!(display
        .questions
        .iter()
        .flat_map(|q| q.options.iter())
        .all(|o| o.mark == OptionMark::Unmarked));
    assert!(display.questions.iter().all(|q| q.verdict.is_none()));
    assert_eq!(display.score(), None);
}

#[test]
fn correct_selection_is_graded_correct() {
    let display = QuizDisplay::new(&sample_quiz(), &answers(&[(0, 1)]), true);
    let question = &display.questions[0];
    assert_eq!(question.verdict, Some(Verdict::Correct));
    assert_eq!(question.options[1].mark, OptionMark::Correct);
    assert_eq!(question.options[0].mark, OptionMark::Unmarked);
    assert_eq!(question.options[2].mark, OptionMark::Unmarked);
}

#[test]
fn wrong_selection_reveals_correct_answer() {
    let display = QuizDisplay::new(&sample_quiz(), &answers(&[(0, 0)]), true);
    let question = &display.questions[0];
    assert_eq!(
        question.verdict,
        Some(Verdict::Incorrect {
            correct_answer: "B".to_owned()
        })
    );
    assert_eq!(question.options[0].mark, OptionMark::Incorrect);
    assert_eq!(question.options[1].mark, OptionMark::Correct);
}

#[test]
fn unanswered_question_is_incorrect() {
    let display = QuizDisplay::new(&sample_quiz(), &answers(&[(0, 1)]), true);
    let question = &display.questions[1];
    assert_eq!(
        question.verdict,
        Some(Verdict::Incorrect {
            correct_answer: "False".to_owned()
        })
    );
    assert!(question.options.iter().all(|o| !o.selected));
    assert_eq!(question.options[1].mark, OptionMark::Correct);
}

#[test]
fn scores_after_submission() {
    let display = QuizDisplay::new(&sample_quiz(), &answers(&[(0, 1), (1, 0)]), true);
    assert_eq!(display.score(), Some((1, 2)));
}

#[test]
fn rendering_is_stable() {
    let quiz = sample_quiz();
    let selections = answers(&[(1, 1)]);
    assert_eq!(
        QuizDisplay::new(&quiz, &selections, true),
        QuizDisplay::new(&quiz, &selections, true)
    );
}
