//! End-to-end executor scenarios

use proptest::prelude::*;
use robozzle_codec::parse_for_layout;
use robozzle_runtime::{
    ExecutionEvent, ExecutorConfig, ProgramExecutor, RuntimeError, Termination,
};
use robozzle_spec::{Color, Direction, Program, PuzzleCell, PuzzleState, Robot};

/// Blue board, robot at (8, 6) facing up, a single star in the corner
fn corner_star_board() -> PuzzleState {
    let mut board = PuzzleState::filled(Color::Blue, Robot::new(8, 6, Direction::UP));
    board.set_cell(0, 0, PuzzleCell::starred(Color::Blue));
    board
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_paint_red() {
    let program = parse_for_layout("_r_r_r_r|", &[4]).unwrap();
    let mut executor = ProgramExecutor::new(&program, corner_star_board()).unwrap();

    executor.step().unwrap();

    assert_eq!(executor.puzzle_state().cell(8, 6).unwrap().color, Some(Color::Red));
    assert_eq!(executor.moves(), 1);
    assert!(!executor.is_terminated());
}

#[test]
fn test_empty_program() {
    let program = Program::new(&[5]).unwrap();
    let mut executor = ProgramExecutor::new(&program, corner_star_board()).unwrap();

    executor.step().unwrap();

    assert!(executor.is_terminated());
    assert!(!executor.is_victory());
    assert_eq!(executor.termination(), Some(Termination::Returned));
    assert_eq!(executor.steps(), 0);
}

#[test]
fn test_overflow_after_max_depth_calls() {
    let program = parse_for_layout("_1|", &[1]).unwrap();
    let config = ExecutorConfig::default();
    let mut executor = ProgramExecutor::with_config(&program, corner_star_board(), config).unwrap();

    let mut calls = 0;
    while !executor.program_state().is_overflowed() {
        executor.step().unwrap();
        calls += 1;
        assert!(calls <= config.max_stack_depth, "overflow never reported");
    }

    assert_eq!(calls, config.max_stack_depth);
    assert_eq!(executor.program_state().depth(), config.max_stack_depth);
    assert_eq!(executor.termination(), Some(Termination::StackOverflow));
    assert_eq!(executor.moves(), 0);
}

#[test]
fn test_overflow_with_small_stack() {
    let program = parse_for_layout("_L_1|", &[2]).unwrap();
    let config = ExecutorConfig::default().with_max_stack_depth(4);
    let mut executor = ProgramExecutor::with_config(&program, corner_star_board(), config).unwrap();

    assert_eq!(executor.run().unwrap(), Termination::StackOverflow);
    assert_eq!(executor.moves(), 4);
    assert_eq!(executor.steps(), 8);
}

#[test]
fn test_vacuous_call_elision() {
    let program = parse_for_layout("_2_1|____|", &[2, 2]).unwrap();
    let config = ExecutorConfig::default().with_max_stack_depth(2).with_max_moves(50);
    let mut executor = ProgramExecutor::with_config(&program, corner_star_board(), config).unwrap();

    for _ in 0..500 {
        if executor.is_terminated() {
            break;
        }
        let before = executor.program_state().depth();
        executor.step().unwrap();
        if executor.current_instruction().map(|ip| ip.function) == Some(1) {
            panic!("entered an empty function");
        }
        if executor.program_state().depth() > before {
            // only the self call may push
            assert_eq!(executor.current_instruction().unwrap().function, 0);
        }
    }

    assert_eq!(executor.termination(), Some(Termination::StackOverflow));
    assert_eq!(executor.moves(), 0);
}

#[test]
fn test_vacuous_call_never_overflows() {
    let program = parse_for_layout("_2_R|__|", &[2, 1]).unwrap();
    let config = ExecutorConfig::default().with_max_stack_depth(1).with_max_moves(3);
    let mut executor = ProgramExecutor::with_config(&program, corner_star_board(), config).unwrap();

    executor.step().unwrap();
    assert_eq!(executor.program_state().depth(), 1);
    assert!(!executor.program_state().is_overflowed());

    executor.step().unwrap();
    assert_eq!(executor.puzzle_state().robot.direction, Direction::RIGHT);
}

#[test]
fn test_empty_slot_transparency() {
    let program = parse_for_layout("______rR|", &[4]).unwrap();
    let mut executor = ProgramExecutor::new(&program, corner_star_board()).unwrap();

    let events = executor.step_events().unwrap();

    // three empty slots, then the unmet red condition
    assert_eq!(events, vec![ExecutionEvent::ProgramStateChanged; 4]);
    assert_eq!(executor.steps(), 1);
    assert_eq!(executor.moves(), 0);
}

#[test]
fn test_walk_to_star() {
    // turn left, then walk while on blue
    let program = parse_for_layout("_L_2|bF_2|", &[2, 2]).unwrap();
    let mut board = PuzzleState::filled(Color::Blue, Robot::new(8, 6, Direction::UP));
    board.set_cell(0, 6, PuzzleCell::starred(Color::Red));
    let mut executor = ProgramExecutor::new(&program, board).unwrap();

    assert_eq!(executor.run().unwrap(), Termination::Victory);
    assert_eq!(executor.moves(), 9);
    assert_eq!(executor.steps(), 17);
    assert_eq!(executor.puzzle_state().robot, Robot::new(0, 6, Direction::LEFT));
    assert_eq!(executor.program_state().depth(), 9);
}

#[test]
fn test_precondition_after_failure() {
    let program = parse_for_layout("_F_1|", &[2]).unwrap();
    let mut board = corner_star_board();
    board.robot = Robot::new(8, 0, Direction::UP);
    let mut executor = ProgramExecutor::new(&program, board).unwrap();

    executor.step().unwrap();
    assert_eq!(executor.termination(), Some(Termination::Failure));

    // stepping on regardless
    let err = executor.step().unwrap_err();
    assert!(matches!(err, RuntimeError::Spec(_)));
    assert!(err.is_precondition_violation());
}

// ============================================================================
// Properties
// ============================================================================

fn arb_program_text() -> impl Strategy<Value = String> {
    let slot = prop_oneof![
        Just("__"),
        Just("_F"),
        Just("_L"),
        Just("_R"),
        Just("rF"),
        Just("gL"),
        Just("bR"),
        Just("_r"),
        Just("bg"),
        Just("_1"),
        Just("_2"),
        Just("r2"),
        Just("g1"),
    ];
    prop::collection::vec(prop::collection::vec(slot, 0..=6), 2)
        .prop_map(|functions| {
            functions
                .into_iter()
                .map(|slots| slots.concat() + "|")
                .collect::<String>()
        })
}

/// Random board made of colored cells with a few stars and some holes
fn arb_board() -> impl Strategy<Value = PuzzleState> {
    let cell = prop_oneof![
        8 => prop::sample::select(Color::ALL.to_vec()).prop_map(PuzzleCell::colored),
        1 => prop::sample::select(Color::ALL.to_vec()).prop_map(PuzzleCell::starred),
        1 => Just(PuzzleCell::default()),
    ];
    (prop::collection::vec(cell, 16 * 12), 0..16i32, 0..12i32, 0..4i32).prop_map(
        |(cells, x, y, direction)| {
            let mut board = PuzzleState::new(Robot::new(x, y, Direction::new(direction)));
            for (i, cell) in cells.into_iter().enumerate() {
                board.set_cell((i / 12) as i32, (i % 12) as i32, cell);
            }
            // the robot starts on a plain colored cell
            board.set_cell(x, y, PuzzleCell::colored(Color::Red));
            board
        },
    )
}

fn layout(text: &str) -> Vec<usize> {
    text.split('|')
        .take(2)
        .map(|f| f.len() / 2)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_star_monotonicity(text in arb_program_text(), board in arb_board()) {
        let program = parse_for_layout(&text, &layout(&text)).unwrap();
        let config = ExecutorConfig::default().with_max_moves(200);
        let mut executor = ProgramExecutor::with_config(&program, board, config).unwrap();

        while !executor.is_terminated() {
            let stars_before = executor.puzzle_state().star_count();
            let events = executor.step_events().unwrap();
            let stars_after = executor.puzzle_state().star_count();
            let robot = executor.puzzle_state().robot;

            let collected = events.windows(2).any(|pair| {
                matches!(pair[0], ExecutionEvent::RobotMoved(_))
                    && pair[1] == ExecutionEvent::CellChanged { x: robot.x, y: robot.y }
            });

            prop_assert!(stars_after <= stars_before);
            prop_assert_eq!(stars_before - stars_after, usize::from(collected));
        }
    }

    #[test]
    fn test_empty_slots_only_report_state_changes(
        text in arb_program_text(),
        board in arb_board(),
    ) {
        let program = parse_for_layout(&text, &layout(&text)).unwrap();
        let config = ExecutorConfig::default().with_max_moves(100);
        let mut executor = ProgramExecutor::with_config(&program, board, config).unwrap();

        while !executor.is_terminated() {
            let (steps, moves) = (executor.steps(), executor.moves());
            let events = executor.step_events().unwrap();
            if executor.steps() == steps {
                // only empty slots and returns were passed
                prop_assert_eq!(executor.moves(), moves);
                prop_assert!(events.iter().all(|e| *e == ExecutionEvent::ProgramStateChanged));
            } else {
                prop_assert_eq!(executor.steps(), steps + 1);
                prop_assert!(executor.moves() - moves <= 1);
            }
        }
    }

    #[test]
    fn test_stack_never_exceeds_limit(text in arb_program_text(), depth in 1usize..16) {
        let program = parse_for_layout(&text, &layout(&text)).unwrap();
        let config = ExecutorConfig::default().with_max_stack_depth(depth).with_max_moves(300);
        let mut executor =
            ProgramExecutor::with_config(&program, corner_star_board(), config).unwrap();

        while !executor.is_terminated() {
            executor.step().unwrap();
            prop_assert!(executor.program_state().depth() <= depth);
        }
    }
}
