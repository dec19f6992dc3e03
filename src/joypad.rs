//! Button state and the P1/JOYP register's selector-multiplexed read path.
//!
//! This module is deliberately host-agnostic: it knows nothing about any
//! windowing or input library. A frontend maps its own key events onto
//! [`Button`] and calls [`Joypad::set_pressed`]; this core never raises the
//! joypad interrupt on its own (see the frame driver for that hook).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

#[derive(Clone, Debug, Default)]
pub struct Joypad {
    right: bool,
    left: bool,
    up: bool,
    down: bool,
    a: bool,
    b: bool,
    select: bool,
    start: bool,

    // Bits 4-5 of P1, written by the CPU to choose which nibble is read back.
    select_directions: bool,
    select_buttons: bool,
}

impl Joypad {
    pub fn new() -> Self {
        Joypad::default()
    }

    pub fn set_pressed(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Right => self.right = pressed,
            Button::Left => self.left = pressed,
            Button::Up => self.up = pressed,
            Button::Down => self.down = pressed,
            Button::A => self.a = pressed,
            Button::B => self.b = pressed,
            Button::Select => self.select = pressed,
            Button::Start => self.start = pressed,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Right => self.right,
            Button::Left => self.left,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::A => self.a,
            Button::B => self.b,
            Button::Select => self.select,
            Button::Start => self.start,
        }
    }

    /// Only bits 4-5 are writable; the hardware actively drives the rest.
    pub fn write_p1(&mut self, value: u8) {
        self.select_directions = value & 0x10 == 0;
        self.select_buttons = value & 0x20 == 0;
    }

    /// Bits are active-low: 0 means pressed. Bits 6-7 always read back set.
    pub fn read_p1(&self) -> u8 {
        let mut nibble = 0x0F;
        if self.select_directions {
            if self.right {
                nibble &= 0b1110;
            }
            if self.left {
                nibble &= 0b1101;
            }
            if self.up {
                nibble &= 0b1011;
            }
            if self.down {
                nibble &= 0b0111;
            }
        }
        if self.select_buttons {
            if self.a {
                nibble &= 0b1110;
            }
            if self.b {
                nibble &= 0b1101;
            }
            if self.select {
                nibble &= 0b1011;
            }
            if self.start {
                nibble &= 0b0111;
            }
        }

        let select_bits = (!self.select_directions as u8) << 4 | (!self.select_buttons as u8) << 5;
        nibble | (select_bits & 0x30) | 0xC0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_select_reads_held_directions_active_low() {
        let mut pad = Joypad::new();
        pad.write_p1(0xEF); // select directions (bit 4 low)
        pad.set_pressed(Button::Up, true);
        assert_eq!(pad.read_p1() & 0x0F, 0x0B); // bit 2 cleared
    }

    #[test]
    fn button_select_is_independent_of_direction_select() {
        let mut pad = Joypad::new();
        pad.write_p1(0xDF); // select buttons (bit 5 low)
        pad.set_pressed(Button::Start, true);
        pad.set_pressed(Button::Up, true); // not selected, must not leak through
        assert_eq!(pad.read_p1() & 0x0F, 0x07); // bit 3 cleared
    }

    #[test]
    fn neither_selected_reads_all_released() {
        let mut pad = Joypad::new();
        pad.write_p1(0xFF);
        pad.set_pressed(Button::A, true);
        assert_eq!(pad.read_p1() & 0x0F, 0x0F);
    }
}
