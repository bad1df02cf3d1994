use sdl2::keyboard::Keycode;

/// The hex keypad laid over the left 4 alphanumeric columns, in key order 0..F.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
const KEYPAD: [Keycode; 16] = [
    Keycode::X,
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Q,
    Keycode::W,
    Keycode::E,
    Keycode::A,
    Keycode::S,
    Keycode::D,
    Keycode::Z,
    Keycode::C,
    Keycode::Num4,
    Keycode::R,
    Keycode::F,
    Keycode::V,
];

/// # Keymap
/// Translates a host key into the Chip-8 key it stands in for, if any.
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYPAD.iter().position(|&k| k == key).map(|k| k as u8)
}
