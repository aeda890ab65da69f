//! Integration tests for the program text codec

use proptest::prelude::*;
use robozzle_codec::{encode, parse, parse_for_layout, parse_for_puzzle, EmptySlots};
use robozzle_spec::{
    Action, Color, Command, Direction, Function, InstructionPointer, Program, Puzzle, PuzzleState,
    Robot, MAX_COMMANDS, MAX_FUNCTIONS,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_action(function_count: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::MOVE),
        Just(Action::TURN_LEFT),
        Just(Action::TURN_RIGHT),
        prop::sample::select(Color::ALL.to_vec()).prop_map(Action::Paint),
        (0..function_count).prop_map(Action::Call),
    ]
}

fn arb_slot(function_count: usize) -> impl Strategy<Value = Option<Command>> {
    let condition = prop_oneof![
        Just(None),
        prop::sample::select(Color::ALL.to_vec()).prop_map(Some),
    ];
    prop::option::of((condition, arb_action(function_count)))
        .prop_map(|slot| slot.map(|(condition, action)| Command { condition, action }))
}

fn arb_program() -> impl Strategy<Value = Program> {
    (1..=MAX_FUNCTIONS)
        .prop_flat_map(|count| {
            prop::collection::vec(
                prop::collection::vec(arb_slot(count), 0..=MAX_COMMANDS),
                count,
            )
        })
        .prop_map(|functions| {
            let functions = functions
                .into_iter()
                .map(|slots| Function::from_slots(slots).unwrap())
                .collect();
            Program::from_functions(functions).unwrap()
        })
}

// ============================================================================
// Round trips
// ============================================================================

proptest! {
    #[test]
    fn test_round_trip_keep(program in arb_program()) {
        let text = encode(&program, EmptySlots::Keep).unwrap();
        let decoded = parse_for_layout(&text, &program.layout()).unwrap();
        prop_assert_eq!(decoded, program);
    }

    #[test]
    fn test_free_form_keeps_layout(program in arb_program()) {
        let text = encode(&program, EmptySlots::Keep).unwrap();
        let decoded = parse(&text).unwrap();
        prop_assert_eq!(decoded, program);
    }

    #[test]
    fn test_free_form_collapse_compacts(program in arb_program()) {
        let text = encode(&program, EmptySlots::Collapse).unwrap();
        let decoded = parse(&text).unwrap();

        prop_assert_eq!(decoded.function_count(), program.function_count());
        for (decoded, original) in decoded.functions().iter().zip(program.functions()) {
            let expected: Vec<_> = original.commands().copied().map(Some).collect();
            prop_assert_eq!(decoded.slots(), expected.as_slice());
        }
    }

    #[test]
    fn test_parse_never_panics(text in "[_rgbFLR0-9|x]{0,40}") {
        let _ = parse(&text);
        let _ = parse_for_layout(&text, &[10, 10, 10, 10, 10]);
    }
}

// ============================================================================
// Puzzle binding
// ============================================================================

#[test]
fn test_parse_for_puzzle_uses_puzzle_layout() {
    let board = PuzzleState::filled(Color::Blue, Robot::new(0, 0, Direction::RIGHT));
    let puzzle = Puzzle::new(vec![4, 2], board).unwrap();

    let program = parse_for_puzzle("_Fb2|_L|", &puzzle).unwrap();
    assert_eq!(program.layout(), vec![4, 2]);
    assert_eq!(
        program.command(InstructionPointer::new(0, 1)),
        Some(&Command::when(Color::Blue, Action::Call(1)))
    );
    assert_eq!(encode(&program, EmptySlots::Collapse).unwrap(), "_Fb2|_L|");
    assert_eq!(encode(&program, EmptySlots::Keep).unwrap(), "_Fb2____|_L__|");
}

#[test]
fn test_collapsed_text_fills_puzzle_layout() {
    let board = PuzzleState::filled(Color::Green, Robot::new(3, 3, Direction::UP));
    let puzzle = Puzzle::new(vec![5, 5, 5], board).unwrap();
    let program = parse_for_puzzle("_Fg3|_R|__|", &puzzle).unwrap();

    assert_eq!(program.command_count(), 3);
    assert_eq!(program.function(2).unwrap().command_count(), 0);
    program.validate().unwrap();
}
