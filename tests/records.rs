use turtle_engine::prelude::*;
use turtle_engine::records::fetch_record;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn test_record_is_shared_between_turtles() {
    let mut first = Turtle::recording(200, 200, CoordMode::Display);
    first
        .animate_off()
        .begin_record()
        .fd(10.0)
        .rt(90.0)
        .dxy(0.0, 5.0, false)
        .end_record("shared-step");
    first.advance(0.0);
    assert!(has_record("shared-step"));
    let names: Vec<&str> = fetch_record("shared-step")
        .unwrap()
        .iter()
        .map(|op| op.name())
        .collect();
    assert_eq!(names, vec!["move", "turn", "teleport"]);

    // Replays run from wherever the second turtle happens to be
    let mut second = Turtle::recording(200, 200, CoordMode::Display);
    second.animate_off().xy(100.0, 0.0, false).replay("shared-step");
    second.advance(0.0);
    assert!(close(second.position(), (110.0, 5.0)));
    assert!((second.heading() - 90.0).abs() < 1e-9);

    // and twice in a row keeps going from the end of the first
    second.replay("shared-step");
    second.advance(0.0);
    assert!(close(second.position(), (110.0, 20.0)));
    assert!((second.heading() - 180.0).abs() < 1e-9);
}

#[test]
fn test_first_recording_keeps_the_name() {
    let mut turtle = Turtle::recording(200, 200, CoordMode::Display);
    turtle
        .animate_off()
        .begin_record()
        .fd(1.0)
        .end_record("taken-name")
        .begin_record()
        .fd(1.0)
        .fd(1.0)
        .end_record("taken-name");
    turtle.advance(0.0);
    assert_eq!(fetch_record("taken-name").map(|ops| ops.len()), Some(1));
}

#[test]
fn test_composites_record_their_parts() {
    let mut turtle = Turtle::recording(200, 200, CoordMode::Display);
    turtle
        .animate_off()
        .begin_record()
        .goto(30.0, 40.0)
        .home()
        .end_record("composite-parts");
    turtle.advance(0.0);
    let names: Vec<&str> = fetch_record("composite-parts")
        .unwrap()
        .iter()
        .map(|op| op.name())
        .collect();
    assert_eq!(names, vec!["turn", "move", "turn", "move", "turn"]);
}

#[test]
fn test_missing_record_is_skipped() {
    let mut turtle = Turtle::recording(200, 200, CoordMode::Display);
    turtle.animate_off().replay("never-recorded").fd(3.0);
    turtle.advance(0.0);
    assert_eq!(turtle.position(), (3.0, 0.0));
    assert!(!turtle.has_tasks());
}
