use std::collections::HashMap;

use crate::coords::Point;

use super::frame::{Click, InputFrame};
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Largest pointer travel (per axis, in pixels) between press and release that
/// still counts as a click.
const CLICK_SLOP: i32 = 2;

/// Current input state for a single canvas.
///
/// Remembers which buttons are held and where each press started; completed
/// clicks are written into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    buttons_down: HashMap<MouseButton, Point>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            // A release after focus loss or outside the canvas must not
            // complete a click.
            InputEvent::Focused(false) | InputEvent::PointerLeft => {
                self.buttons_down.clear();
            }

            InputEvent::Focused(true) => {}

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                let pos = Point::from_logical(*x, *y);

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.entry(*button).or_insert(pos);
                    }
                    MouseButtonState::Released => {
                        if let Some(origin) = self.buttons_down.remove(button) {
                            let travel = pos - origin;
                            if travel.x.abs() <= CLICK_SLOP && travel.y.abs() <= CLICK_SLOP {
                                frame.clicks.push(Click { button: *button, pos });
                            }
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains_key(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::button(MouseButton::Left, MouseButtonState::Pressed, x, y)
    }

    fn release(x: f32, y: f32) -> InputEvent {
        InputEvent::button(MouseButton::Left, MouseButtonState::Released, x, y)
    }

    #[test]
    fn press_release_in_place_is_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(10.2, 20.6));
        assert!(state.button_down(MouseButton::Left));
        state.apply_event(&mut frame, release(10.2, 20.6));

        assert_eq!(
            frame.clicks,
            vec![Click { button: MouseButton::Left, pos: Point::new(10, 21) }]
        );
        assert!(!state.button_down(MouseButton::Left));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn small_jitter_still_clicks_at_release_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(10.0, 10.0));
        state.apply_event(&mut frame, release(12.0, 8.0));

        assert_eq!(
            frame.clicks,
            vec![Click { button: MouseButton::Left, pos: Point::new(12, 8) }]
        );
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(10.0, 10.0));
        state.apply_event(&mut frame, release(40.0, 10.0));

        assert!(frame.clicks.is_empty());
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, release(5.0, 5.0));
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn focus_loss_cancels_pending_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(5.0, 5.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        state.apply_event(&mut frame, release(5.0, 5.0));

        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn leaving_the_canvas_cancels_pending_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(5.0, 5.0));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert!(!state.button_down(MouseButton::Left));

        state.apply_event(&mut frame, release(5.0, 5.0));
        assert!(frame.clicks.is_empty());

        state.apply_event(&mut frame, press(6.0, 6.0));
        state.apply_event(&mut frame, release(6.0, 6.0));
        assert_eq!(frame.clicks.len(), 1);
    }
}
