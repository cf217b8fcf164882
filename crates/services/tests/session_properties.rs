//! Property tests for the quiz session state machine: drive it with random
//! action sequences and check the structural invariants after every step.

use proptest::prelude::*;

use kotoba_core::model::Question;
use kotoba_core::time::fixed_now;
use services::{QuizPhase, QuizSession};

// ---------------------------------------------------------------------------
// Action enum: every session operation a caller can attempt
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    Start(u32),
    ReceiveQuestion,
    SubmitCorrect,
    SubmitWrong,
    Advance,
    Restart,
}

// ---------------------------------------------------------------------------
// Strategy: weighted random Action generation
// ---------------------------------------------------------------------------

fn arb_rounds() -> impl Strategy<Value = u32> {
    // Mostly short runs so sequences can reach Finished; the edges exercise
    // the out-of-range rejections.
    prop_oneof![
        4 => 1u32..=4,
        1 => Just(0),
        1 => Just(51),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_rounds().prop_map(Action::Start),
        6 => Just(Action::ReceiveQuestion),
        4 => Just(Action::SubmitCorrect),
        4 => Just(Action::SubmitWrong),
        6 => Just(Action::Advance),
        1 => Just(Action::Restart),
    ]
}

// ---------------------------------------------------------------------------
// Execute an Action against the session, ignoring rejections
// ---------------------------------------------------------------------------

fn execute(session: &mut QuizSession, action: &Action) {
    match action {
        Action::Start(rounds) => {
            let _ = session.start(*rounds, fixed_now());
        }
        Action::ReceiveQuestion => {
            let _ = session.receive_question(Question::from_pair("cat", "猫"));
        }
        Action::SubmitCorrect => {
            let expected = session
                .current_question()
                .map(|question| question.romaji().to_string())
                .unwrap_or_else(|| "neko".to_string());
            let _ = session.submit_answer(&expected);
        }
        Action::SubmitWrong => {
            let _ = session.submit_answer("not even close");
        }
        Action::Advance => {
            let _ = session.advance(fixed_now());
        }
        Action::Restart => session.restart(),
    }
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(session: &QuizSession, action: &Action, generation_before: u64) {
    assert!(
        session.round_index() <= session.total_rounds(),
        "round_index {} beyond total_rounds {} after {:?}",
        session.round_index(),
        session.total_rounds(),
        action,
    );

    // An answered round counts toward score one transition before it counts
    // toward round_index.
    let showing = u32::from(session.phase() == QuizPhase::ShowingFeedback);
    assert!(
        session.score() <= session.round_index() + showing,
        "score {} beyond answered rounds {} after {:?}",
        session.score(),
        session.round_index() + showing,
        action,
    );

    match session.phase() {
        QuizPhase::NotStarted | QuizPhase::AwaitingQuestion | QuizPhase::Finished => {
            assert!(
                session.current_question().is_none(),
                "no question may be loaded in {:?} after {:?}",
                session.phase(),
                action,
            );
            assert!(
                session.feedback().is_none(),
                "no feedback may be held in {:?} after {:?}",
                session.phase(),
                action,
            );
        }
        QuizPhase::AwaitingAnswer => {
            assert!(
                session.current_question().is_some(),
                "AwaitingAnswer requires a loaded question after {:?}",
                action,
            );
            assert!(
                session.feedback().is_none(),
                "AwaitingAnswer must not hold feedback after {:?}",
                action,
            );
        }
        QuizPhase::ShowingFeedback => {
            assert!(
                session.current_question().is_some(),
                "ShowingFeedback requires a loaded question after {:?}",
                action,
            );
            assert!(
                session.feedback().is_some(),
                "ShowingFeedback requires feedback after {:?}",
                action,
            );
        }
    }

    assert!(
        session.input_generation() >= generation_before,
        "input generation went backwards ({} -> {}) after {:?}",
        generation_before,
        session.input_generation(),
        action,
    );

    if session.is_started() {
        assert!(
            session.started_at().is_some(),
            "a started session carries started_at after {:?}",
            action,
        );
    } else {
        assert!(
            session.started_at().is_none(),
            "a fresh session carries no started_at after {:?}",
            action,
        );
    }

    if session.phase() == QuizPhase::Finished {
        assert_eq!(
            session.round_index(),
            session.total_rounds(),
            "Finished means every round was played, after {:?}",
            action,
        );
        assert!(
            session.summary().is_some(),
            "a finished run must summarize after {:?}",
            action,
        );
    } else {
        assert!(
            session.finished_at().is_none(),
            "finished_at is exclusive to Finished, after {:?}",
            action,
        );
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..100)) {
        let mut session = QuizSession::new();
        for action in &actions {
            let generation_before = session.input_generation();
            execute(&mut session, action);
            assert_invariants(&session, action, generation_before);
        }
    }

    #[test]
    fn perfect_runs_always_reach_a_full_score(rounds in 1u32..=6) {
        let mut session = QuizSession::new();
        session.start(rounds, fixed_now()).unwrap();
        for _ in 0..rounds {
            session
                .receive_question(Question::from_pair("cat", "猫"))
                .unwrap();
            session.submit_answer("neko").unwrap();
            session.advance(fixed_now()).unwrap();
        }
        prop_assert!(session.is_finished());
        let summary = session.summary().expect("finished run has a summary");
        prop_assert_eq!(summary.score(), rounds);
        prop_assert_eq!(
            summary.to_string(),
            format!("Finished! Score: {rounds}/{rounds}")
        );
    }
}
