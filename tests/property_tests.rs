//! Property-based tests for the turtle core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and command sequences.

use proptest::prelude::*;
use trundle::core::{
    apply, apply_move, apply_pen_down, apply_pen_up, apply_turn, move_with_policy, Command,
    MovePolicy, MoveResponse, NoLog, PenColor, PenState, Position, TurtleState,
};
use trundle::event_sourcing::{CommandHandler, InMemoryEventStore, TurtleCommand, TurtleId};
use trundle::interpreter::{run_sequence, Interpreter};
use trundle::validation::validate;

fn arbitrary_color() -> impl Strategy<Value = PenColor> {
    prop_oneof![
        Just(PenColor::Black),
        Just(PenColor::Red),
        Just(PenColor::Blue),
    ]
}

fn arbitrary_pen() -> impl Strategy<Value = PenState> {
    prop_oneof![Just(PenState::Up), Just(PenState::Down)]
}

prop_compose! {
    fn arbitrary_state()(
        x in -1000.0..1000.0f64,
        y in -1000.0..1000.0f64,
        heading in 0.0..360.0f64,
        color in arbitrary_color(),
        pen in arbitrary_pen(),
    ) -> TurtleState {
        TurtleState::new(Position::new(x, y), heading, color, pen)
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (-500.0..500.0f64).prop_map(Command::Move),
        (-720.0..720.0f64).prop_map(Command::Turn),
        Just(Command::PenUp),
        Just(Command::PenDown),
        arbitrary_color().prop_map(Command::SetColor),
    ]
}

proptest! {
    #[test]
    fn turns_compose(
        state in arbitrary_state(),
        a in -720i32..720,
        b in -720i32..720,
    ) {
        let (a, b) = (f64::from(a), f64::from(b));
        let twice = apply_turn(&apply_turn(&state, a, &NoLog), b, &NoLog);
        let once = apply_turn(&state, a + b, &NoLog);
        prop_assert!(twice.approx_eq(&once, 1e-9));
    }

    #[test]
    fn full_rotation_is_identity(state in arbitrary_state()) {
        let turned = apply_turn(&state, 360.0, &NoLog);
        prop_assert!(turned.approx_eq(&state, 1e-9));
    }

    #[test]
    fn heading_stays_normalized(state in arbitrary_state(), angle in -1e6..1e6f64) {
        let heading = apply_turn(&state, angle, &NoLog).heading;
        prop_assert!((0.0..360.0).contains(&heading));
    }

    #[test]
    fn move_changes_only_position(state in arbitrary_state(), distance in -1000.0..1000.0f64) {
        let moved = apply_move(&state, distance, &NoLog).state;
        prop_assert_eq!(moved.heading, state.heading);
        prop_assert_eq!(moved.color, state.color);
        prop_assert_eq!(moved.pen, state.pen);
    }

    #[test]
    fn move_covers_requested_distance(state in arbitrary_state(), distance in -1000.0..1000.0f64) {
        let moved = apply_move(&state, distance, &NoLog).state;
        let covered = state.position.distance_to(&moved.position);
        prop_assert!((covered - distance.abs()).abs() < 1e-6);
    }

    #[test]
    fn lines_are_drawn_only_with_pen_down(state in arbitrary_state(), distance in 1.0..100.0f64) {
        let step = apply_move(&state, distance, &NoLog);
        prop_assert_eq!(step.drawn.is_some(), state.is_pen_down());
        if let Some(line) = step.drawn {
            prop_assert_eq!(line.color, state.color);
            prop_assert_eq!(line.from, state.position);
            prop_assert_eq!(line.to, step.state.position);
        }
    }

    #[test]
    fn pen_toggles_round_trip(state in arbitrary_state()) {
        let up = state.with_pen(PenState::Up);
        prop_assert_eq!(apply_pen_up(&apply_pen_down(&up, &NoLog), &NoLog), up);

        let down = state.with_pen(PenState::Down);
        prop_assert_eq!(apply_pen_down(&apply_pen_up(&down, &NoLog), &NoLog), down);
    }

    #[test]
    fn rendered_commands_validate_back(command in arbitrary_command()) {
        prop_assert_eq!(validate(&command.to_string()), Ok(command));
    }

    #[test]
    fn run_sequence_is_a_left_fold(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let mut expected = TurtleState::initial();
        for command in &commands {
            expected = apply(&expected, command, &NoLog).state;
        }
        prop_assert_eq!(run_sequence(&commands, TurtleState::initial(), &NoLog), expected);
    }

    #[test]
    fn event_replay_rebuilds_state(
        commands in prop::collection::vec(arbitrary_command(), 0..20),
        next in arbitrary_command(),
    ) {
        let store = InMemoryEventStore::new();
        let handler = CommandHandler::with_log(&store, NoLog);
        let id = TurtleId::new();
        for command in &commands {
            handler.handle(TurtleCommand::new(id, *command)).unwrap();
        }

        let before_next = handler.state_of(id).unwrap();
        prop_assert_eq!(
            before_next,
            run_sequence(&commands, TurtleState::initial(), &NoLog)
        );

        handler.handle(TurtleCommand::new(id, next)).unwrap();
        prop_assert_eq!(
            handler.state_of(id).unwrap(),
            apply(&before_next, &next, &NoLog).state
        );
    }

    #[test]
    fn bounded_moves_stay_inside(
        x in 0.0..=100.0f64,
        y in 0.0..=100.0f64,
        heading in 0.0..360.0f64,
        distance in -300.0..300.0f64,
    ) {
        let state = TurtleState::initial()
            .with_position(Position::new(x, y))
            .with_heading(heading);
        let (response, step) = move_with_policy(&state, distance, &MovePolicy::bounded(), &NoLog);
        let end = step.state.position;

        prop_assert!((0.0..=100.0).contains(&end.x));
        prop_assert!((0.0..=100.0).contains(&end.y));

        let target = apply_move(&state, distance, &NoLog).state.position;
        if response == MoveResponse::MoveOk {
            prop_assert_eq!(end, target);
        } else {
            prop_assert_ne!(end, target);
        }
    }

    #[test]
    fn default_interpreter_agrees_with_fold(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let outcome = Interpreter::new().run(&commands, TurtleState::initial());
        prop_assert_eq!(
            outcome.final_state,
            run_sequence(&commands, TurtleState::initial(), &NoLog)
        );
        prop_assert_eq!(outcome.barriers_hit(), 0);
    }
}
