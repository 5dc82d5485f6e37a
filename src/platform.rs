//! The seam between the interpreter and whatever shows pixels and reads keys.

use log::debug;

use crate::vm::{Error, Framebuffer, Keypad, Vm, NUM_KEYS};

/// Conventional keyboard layout: `KEY_LAYOUT[k]` is the physical key for
/// CHIP-8 key `k`.
///
/// ```text
/// 1 2 3 C        1 2 3 4
/// 4 5 6 D   ←    Q W E R
/// 7 8 9 E        A S D F
/// A 0 B F        Z X C V
/// ```
pub const KEY_LAYOUT: [char; NUM_KEYS] = [
  'x', '1', '2', '3', 'q', 'w', 'e', 'a', 's', 'd', 'z', 'c', '4', 'r', 'f', 'v',
];

/// CHIP-8 key index for a physical keyboard character, if it is mapped
pub fn key_for_char(c: char) -> Option<u8> {
  let c = c.to_ascii_lowercase();
  KEY_LAYOUT.iter().position(|&k| k == c).map(|k| k as u8)
}

/// What the host wants after polling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
  Continue,
  Close,
}

/// A display and input device.
pub trait Platform {
  /// Write the current key state into `keypad`, and say whether to keep going
  fn poll_input(&mut self, keypad: &mut Keypad) -> Signal;

  /// Show a finished frame; called once per cycle
  fn present(&mut self, frame: &Framebuffer);
}

/// Drive `vm` against `platform` until it asks to close, `limit` cycles have
/// run, or the program fails. Returns the number of cycles executed.
pub fn run<P>(vm: &mut Vm, platform: &mut P, limit: Option<u64>) -> Result<u64, Error>
where
  P: Platform,
{
  let mut cycles = 0;
  while limit.map_or(true, |limit| cycles < limit) {
    if platform.poll_input(vm.keypad_mut()) == Signal::Close {
      debug!("close requested after {cycles} cycles");
      break;
    }
    vm.cycle()?;
    cycles += 1;
    platform.present(vm.framebuffer());
  }
  Ok(cycles)
}
