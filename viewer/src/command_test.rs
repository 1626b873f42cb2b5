#![allow(clippy::float_cmp)]

use super::*;

// --- Bare keywords ---

#[test]
fn parses_bare_keywords() {
    assert_eq!(Command::parse("next"), Some(Command::Next));
    assert_eq!(Command::parse("prev"), Some(Command::Prev));
    assert_eq!(Command::parse("toggle_draw_mode"), Some(Command::ToggleDrawMode));
    assert_eq!(Command::parse("clear_drawings"), Some(Command::ClearDrawings));
    assert_eq!(Command::parse("stop_move"), Some(Command::StopMove));
}

// --- Coordinate verbs ---

#[test]
fn parses_pointer_coordinates() {
    let cmd = Command::parse("puntero_0.25_0.75").unwrap();
    assert_eq!(cmd, Command::Pointer(Point::new(0.25, 0.75)));
    assert_eq!(cmd.kind(), "puntero");
}

#[test]
fn parses_two_word_verbs_with_coordinates() {
    assert_eq!(
        Command::parse("start_draw_0.1_0.2"),
        Some(Command::StartDraw(Point::new(0.1, 0.2)))
    );
    assert_eq!(
        Command::parse("stop_erase_0.3_0.4"),
        Some(Command::StopErase(Point::new(0.3, 0.4)))
    );
    assert_eq!(
        Command::parse("start_move_0.5_0.6"),
        Some(Command::StartMove(Point::new(0.5, 0.6)))
    );
}

#[test]
fn parses_continuous_verbs() {
    assert_eq!(
        Command::parse("drawing_0.5_0.5"),
        Some(Command::Drawing(Point::new(0.5, 0.5)))
    );
    assert_eq!(
        Command::parse("erasing_0.5_0.5"),
        Some(Command::Erasing(Point::new(0.5, 0.5)))
    );
    assert_eq!(
        Command::parse("moving_0.5_0.5"),
        Some(Command::Moving(Point::new(0.5, 0.5)))
    );
}

#[test]
fn out_of_range_coordinates_still_parse() {
    // Clamping happens at the state layer, not the parser.
    assert_eq!(
        Command::parse("puntero_-1_2"),
        Some(Command::Pointer(Point::new(-1.0, 2.0)))
    );
}

// --- Zoom ---

#[test]
fn zoom_with_full_center() {
    let cmd = Command::parse("zoom_2.5_0.3_0.7").unwrap();
    assert_eq!(
        cmd,
        Command::Zoom { value: 2.5, center_x: Some(0.3), center_y: Some(0.7) }
    );
}

#[test]
fn zoom_center_axes_are_individually_optional() {
    assert_eq!(
        Command::parse("zoom_2.0"),
        Some(Command::Zoom { value: 2.0, center_x: None, center_y: None })
    );
    assert_eq!(
        Command::parse("zoom_2.0_0.4"),
        Some(Command::Zoom { value: 2.0, center_x: Some(0.4), center_y: None })
    );
}

#[test]
fn zoom_without_value_is_rejected() {
    assert_eq!(Command::parse("zoom_"), None);
    assert_eq!(Command::parse("zoom_abc"), None);
}

// --- Malformed tokens ---

#[test]
fn unknown_verbs_are_rejected() {
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("jump"), None);
    assert_eq!(Command::parse("drawing"), None);
    assert_eq!(Command::parse("nextnext"), None);
}

#[test]
fn missing_arguments_are_rejected() {
    assert_eq!(Command::parse("puntero_0.5"), None);
    assert_eq!(Command::parse("start_draw_0.5"), None);
    assert_eq!(Command::parse("moving_"), None);
}

#[test]
fn non_numeric_arguments_are_rejected() {
    assert_eq!(Command::parse("puntero_a_b"), None);
    assert_eq!(Command::parse("drawing_0.5_x"), None);
    assert_eq!(Command::parse("puntero_NaN_0.5"), None);
}

// --- Keyboard map ---

#[test]
fn arrow_keys_page() {
    assert_eq!(key_action("ArrowLeft", false), Some(KeyAction::PrevPage));
    assert_eq!(key_action("ArrowRight", false), Some(KeyAction::NextPage));
}

#[test]
fn zoom_keys() {
    assert_eq!(key_action("+", false), Some(KeyAction::ZoomIn));
    assert_eq!(key_action("=", false), Some(KeyAction::ZoomIn));
    assert_eq!(key_action("-", false), Some(KeyAction::ZoomOut));
    assert_eq!(key_action("0", false), Some(KeyAction::ResetZoom));
}

#[test]
fn clear_shortcut_requires_draw_mode() {
    assert_eq!(key_action("c", false), None);
    assert_eq!(key_action("c", true), Some(KeyAction::ClearDrawings));
    assert_eq!(key_action("C", true), Some(KeyAction::ClearDrawings));
}

#[test]
fn toggle_and_escape() {
    assert_eq!(key_action("d", false), Some(KeyAction::ToggleDrawMode));
    assert_eq!(key_action("D", true), Some(KeyAction::ToggleDrawMode));
    assert_eq!(key_action("Escape", false), Some(KeyAction::HidePointer));
}

#[test]
fn unbound_keys_do_nothing() {
    assert_eq!(key_action("q", false), None);
    assert_eq!(key_action("Enter", true), None);
}
