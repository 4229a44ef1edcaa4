// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input events understood by the game and the pointer-drag tracker.

/// Keys the game reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow (turn rod left).
    Left,
    /// Right arrow (turn rod right).
    Right,
    /// `A` (same as Left).
    A,
    /// `D` (same as Right).
    D,
    /// Space (hold to raise the rod, release to cast).
    Space,
    /// `F` (print frame rate on release).
    F,
    /// Any other key.
    Other,
}

impl Key {
    /// True for the keys that turn the rod left.
    pub fn turns_left(self) -> bool {
        matches!(self, Self::Left | Self::A)
    }

    /// True for the keys that turn the rod right.
    pub fn turns_right(self) -> bool {
        matches!(self, Self::Right | Self::D)
    }
}

/// Mouse buttons. Only the left button drags the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// One window-system event, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed (repeats included).
    KeyDown(Key),
    /// Key released.
    KeyUp(Key),
    /// Mouse button pressed at a window position.
    MouseDown {
        /// Button pressed.
        button: MouseButton,
        /// Pointer x in pixels.
        x: i32,
        /// Pointer y in pixels.
        y: i32,
    },
    /// Mouse button released.
    MouseUp {
        /// Button released.
        button: MouseButton,
    },
    /// Pointer moved to a window position.
    MouseMotion {
        /// Pointer x in pixels.
        x: i32,
        /// Pointer y in pixels.
        y: i32,
    },
    /// Wheel notch; only the sign of `y` matters.
    Wheel {
        /// Vertical scroll amount.
        y: i32,
    },
    /// Surface resized.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Accumulates pointer motion while the left button is held.
///
/// Any button press re-anchors the drag at the press position; motion only
/// registers while the left button is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerDrag {
    held: bool,
    anchor: (i32, i32),
    current: (i32, i32),
}

impl PointerDrag {
    /// Handles a button press at `(x, y)`.
    pub fn press(&mut self, button: MouseButton, x: i32, y: i32) {
        self.anchor = (x, y);
        self.current = (x, y);
        if button == MouseButton::Left {
            self.held = true;
        }
    }

    /// Handles a button release.
    pub fn release(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.held = false;
        }
    }

    /// Handles pointer motion.
    pub fn motion(&mut self, x: i32, y: i32) {
        if self.held {
            self.current = (x, y);
        }
    }

    /// True while the left button is down.
    pub fn is_dragging(&self) -> bool {
        self.held
    }

    /// Returns `anchor - current` and re-anchors, or `None` when there was
    /// no movement since the last call.
    #[allow(clippy::cast_precision_loss)]
    pub fn take_delta(&mut self) -> Option<(f32, f32)> {
        let dx = self.anchor.0 - self.current.0;
        let dy = self.anchor.1 - self.current.1;
        if dx == 0 && dy == 0 {
            return None;
        }
        self.anchor = self.current;
        Some((dx as f32, dy as f32))
    }
}
