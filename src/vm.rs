use std::fmt;
use std::io::{self, Read};
use std::ops::Range;

use log::{debug, trace};

use crate::opcode::{Instruction, Reg};
use crate::region::{Chunk, Region};
use crate::rng::{self, RandomSource};

/// Size of the whole address space in bytes
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are loaded, and where execution starts
pub const PROGRAM_START: u16 = 0x200;

/// Where the hexadecimal glyphs live
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph
pub const GLYPH_HEIGHT: u16 = 5;

pub const NUM_REGISTERS: usize = 16;
pub const STACK_DEPTH: usize = 16;
pub const NUM_KEYS: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

pub const PIXEL_ON: u32 = 0xFFFF_FFFF;
pub const PIXEL_OFF: u32 = 0;

// VF doubles as carry, borrow and collision flag
const FLAG: usize = 0xF;

/// Glyphs for 0-F, five rows each, left-aligned in the high nibble.
pub const FONT: [u8; 80] = [
  0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
  0x20, 0x60, 0x20, 0x20, 0x70, // 1
  0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
  0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
  0x90, 0x90, 0xF0, 0x10, 0x10, // 4
  0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
  0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
  0xF0, 0x10, 0x20, 0x40, 0x40, // 7
  0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
  0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
  0xF0, 0x90, 0xF0, 0x90, 0x90, // A
  0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
  0xF0, 0x80, 0x80, 0x80, 0xF0, // C
  0xE0, 0x90, 0x90, 0x90, 0xE0, // D
  0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
  0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Pressed/released state of the sixteen keys, indexed by key value
pub type Keypad = [bool; NUM_KEYS];

/// The 64×32 monochrome display, one fully-on or fully-off word per pixel
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
  pixels: [u32; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl Framebuffer {
  pub fn new() -> Self {
    Self {
      pixels: [PIXEL_OFF; DISPLAY_WIDTH * DISPLAY_HEIGHT],
    }
  }

  pub fn clear(&mut self) {
    self.pixels.fill(PIXEL_OFF);
  }

  /// Raw pixel value at `(x, y)`; panics outside the display.
  pub fn pixel(&self, x: usize, y: usize) -> u32 {
    self.pixels[y * DISPLAY_WIDTH + x]
  }

  pub fn is_on(&self, x: usize, y: usize) -> bool {
    self.pixel(x, y) == PIXEL_ON
  }

  /// Row-major pixel words, ready to hand to a texture.
  pub fn pixels(&self) -> &[u32] {
    &self.pixels
  }

  pub fn row(&self, y: usize) -> &[u32] {
    &self.pixels[y * DISPLAY_WIDTH..(y + 1) * DISPLAY_WIDTH]
  }

  /// Number of lit pixels.
  pub fn lit(&self) -> usize {
    self.pixels.iter().filter(|&&p| p == PIXEL_ON).count()
  }

  /// XOR a set sprite bit onto `(x, y)`, reporting whether it erased a lit pixel.
  fn flip(&mut self, x: usize, y: usize) -> bool {
    let pixel = &mut self.pixels[y * DISPLAY_WIDTH + x];
    let collided = *pixel == PIXEL_ON;
    *pixel ^= PIXEL_ON;
    collided
  }
}

impl Default for Framebuffer {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Framebuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Framebuffer")
      .field("lit", &self.lit())
      .finish()
  }
}

impl fmt::Display for Framebuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for y in 0..DISPLAY_HEIGHT {
      for &pixel in self.row(y) {
        let c = if pixel == PIXEL_ON { '█' } else { ' ' };
        write!(f, "{c}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

/// A CHIP-8 virtual machine: registers, memory, call stack, timers, keypad
/// and framebuffer, plus the interpreter that steps through them.
#[derive(Debug)]
pub struct Vm {
  memory: [u8; MEMORY_SIZE],
  registers: [u8; NUM_REGISTERS],
  index: u16,
  pc: u16,
  stack: [u16; STACK_DEPTH],
  sp: u8,
  delay_timer: u8,
  sound_timer: u8,
  keypad: Keypad,
  framebuffer: Framebuffer,
  // last fetched word, kept for diagnostics
  opcode: u16,
  rng: Box<dyn RandomSource>,
}

impl Vm {
  /// Create a freshly initialized machine with a clock-seeded random source
  pub fn new() -> Self {
    Self::with_rng(rng::from_clock())
  }

  /// Create a freshly initialized machine drawing `Cxnn` bytes from `source`
  pub fn with_rng<S>(source: S) -> Self
  where
    S: RandomSource + 'static,
  {
    let mut vm = Self {
      memory: [0; MEMORY_SIZE],
      registers: [0; NUM_REGISTERS],
      index: 0,
      pc: PROGRAM_START,
      stack: [0; STACK_DEPTH],
      sp: 0,
      delay_timer: 0,
      sound_timer: 0,
      keypad: [false; NUM_KEYS],
      framebuffer: Framebuffer::new(),
      opcode: 0,
      rng: Box::new(source),
    };
    vm.reset();
    vm
  }

  /// Zero everything, reinstall the font and point pc at the program start.
  ///
  /// The random source is kept.
  pub fn reset(&mut self) {
    self.memory.fill(0);
    self.registers.fill(0);
    self.stack.fill(0);
    self.keypad.fill(false);
    self.framebuffer.clear();
    self.index = 0;
    self.sp = 0;
    self.delay_timer = 0;
    self.sound_timer = 0;
    self.opcode = 0;
    self.pc = PROGRAM_START;
    let font = FONT_START as usize;
    self.memory[font..font + FONT.len()].copy_from_slice(&FONT);
  }

  /// Copy a program image into memory at [`PROGRAM_START`].
  ///
  /// Images that do not fit are rejected without touching memory.
  pub fn load<R>(&mut self, region: &R) -> Result<(), Error>
  where
    R: Region + ?Sized,
  {
    let bytes = region.bytes();
    let start = PROGRAM_START as usize;
    let capacity = MEMORY_SIZE - start;
    if bytes.len() > capacity {
      return Err(Error::RomTooLarge {
        len: bytes.len(),
        capacity,
      });
    }
    self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    debug!("loaded {} byte program at {:#05X}", bytes.len(), start);
    Ok(())
  }

  /// Read a whole program image from `reader` and load it.
  pub fn load_from<R>(&mut self, reader: &mut R) -> Result<(), Error>
  where
    R: Read,
  {
    let chunk = Chunk::read_from(reader)?;
    self.load(&chunk)
  }

  /// Run one fetch, decode, execute and timer tick.
  ///
  /// On error the machine is left as it was before the cycle (apart from the
  /// diagnostic opcode latch) and the timers do not tick.
  pub fn cycle(&mut self) -> Result<Instruction, Error> {
    let pc = self.pc;
    let word = self.fetch()?;
    self.opcode = word;
    let instruction = Instruction::decode(word).ok_or(Error::UnknownOpcode { word, pc })?;
    trace!("{pc:#05X}: {word:04X}  {instruction}");

    self.pc = pc.wrapping_add(2);
    let mut task = Task::new(self, pc);
    if let Err(err) = task.run(instruction) {
      self.pc = pc;
      return Err(err);
    }

    self.tick_timers();
    Ok(instruction)
  }

  fn fetch(&self) -> Result<u16, Error> {
    let address = self.pc as usize;
    match self.memory.get(address..address + 2) {
      Some(&[hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
      _ => Err(Error::ProgramCounterOutOfBounds { pc: self.pc }),
    }
  }

  fn tick_timers(&mut self) {
    self.delay_timer = self.delay_timer.saturating_sub(1);
    self.sound_timer = self.sound_timer.saturating_sub(1);
  }

  /// Snapshot of the registers for debugging
  pub fn dump(&self) -> Dump {
    Dump {
      registers: self.registers,
      index: self.index,
      sp: self.sp,
      opcode: self.opcode,
      pc: self.pc,
    }
  }

  pub fn registers(&self) -> &[u8; NUM_REGISTERS] {
    &self.registers
  }

  pub fn register(&self, x: Reg) -> u8 {
    self.registers[x as usize & 0xF]
  }

  pub fn set_register(&mut self, x: Reg, value: u8) {
    self.registers[x as usize & 0xF] = value;
  }

  pub fn index(&self) -> u16 {
    self.index
  }

  pub fn pc(&self) -> u16 {
    self.pc
  }

  /// Number of return addresses on the call stack
  pub fn sp(&self) -> u8 {
    self.sp
  }

  /// Last instruction word fetched
  pub fn opcode(&self) -> u16 {
    self.opcode
  }

  pub fn delay_timer(&self) -> u8 {
    self.delay_timer
  }

  pub fn sound_timer(&self) -> u8 {
    self.sound_timer
  }

  /// True while the sound timer is running, i.e. while a tone should play
  pub fn is_beeping(&self) -> bool {
    self.sound_timer > 0
  }

  pub fn memory(&self) -> &[u8] {
    &self.memory
  }

  pub fn memory_mut(&mut self) -> &mut [u8] {
    &mut self.memory
  }

  pub fn keypad(&self) -> &Keypad {
    &self.keypad
  }

  /// Key state is written by the host between cycles
  pub fn keypad_mut(&mut self) -> &mut Keypad {
    &mut self.keypad
  }

  pub fn framebuffer(&self) -> &Framebuffer {
    &self.framebuffer
  }
}

impl Default for Vm {
  fn default() -> Self {
    Self::new()
  }
}

/// Register snapshot produced by [`Vm::dump`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dump {
  pub registers: [u8; NUM_REGISTERS],
  pub index: u16,
  pub sp: u8,
  pub opcode: u16,
  pub pc: u16,
}

impl fmt::Display for Dump {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, value) in self.registers.iter().enumerate() {
      writeln!(f, "V{i:X}: {value}")?;
    }
    writeln!(f, "I: {:#05X}", self.index)?;
    writeln!(f, "sp: {}", self.sp)?;
    writeln!(f, "opcode: {:#06X}", self.opcode)?;
    write!(f, "pc: {:#05X} ({})", self.pc, self.pc)
  }
}

/// An error raised while loading or running a program.
///
/// `Io` and `RomTooLarge` come from loading and leave the machine untouched;
/// everything else stops execution.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("could not read program image: {0}")]
  Io(#[from] io::Error),

  #[error("program image is {len} bytes but only {capacity} fit above 0x200")]
  RomTooLarge { len: usize, capacity: usize },

  #[error("unknown opcode {word:#06X} at {pc:#05X}")]
  UnknownOpcode { word: u16, pc: u16 },

  #[error("call stack overflow at {pc:#05X}")]
  StackOverflow { pc: u16 },

  #[error("return with an empty call stack at {pc:#05X}")]
  StackUnderflow { pc: u16 },

  #[error("address {address:#06X} is outside memory (instruction at {pc:#05X})")]
  AddressOutOfBounds { address: usize, pc: u16 },

  #[error("key {key:#04X} does not exist (instruction at {pc:#05X})")]
  InvalidKey { key: u8, pc: u16 },

  #[error("program counter {pc:#05X} is outside memory")]
  ProgramCounterOutOfBounds { pc: u16 },
}

impl Error {
  /// Whether execution has to stop, as opposed to a rejected program image
  pub fn is_fatal(&self) -> bool {
    !matches!(self, Self::Io(_) | Self::RomTooLarge { .. })
  }

  /// Address of the instruction that failed, for execution errors
  pub fn pc(&self) -> Option<u16> {
    match *self {
      Self::Io(_) | Self::RomTooLarge { .. } => None,
      Self::UnknownOpcode { pc, .. }
      | Self::StackOverflow { pc }
      | Self::StackUnderflow { pc }
      | Self::AddressOutOfBounds { pc, .. }
      | Self::InvalidKey { pc, .. }
      | Self::ProgramCounterOutOfBounds { pc } => Some(pc),
    }
  }
}

struct Task<'vm> {
  vm: &'vm mut Vm,
  // address of the instruction being executed
  pc: u16,
}

impl<'vm> Task<'vm> {
  fn new(vm: &'vm mut Vm, pc: u16) -> Self {
    Self { vm, pc }
  }

  #[inline]
  fn v(&self, x: Reg) -> u8 {
    self.vm.registers[x as usize]
  }

  #[inline]
  fn set_v(&mut self, x: Reg, value: u8) {
    self.vm.registers[x as usize] = value;
  }

  #[inline]
  fn set_flag(&mut self, flag: bool) {
    self.vm.registers[FLAG] = flag as u8;
  }

  fn skip_if(&mut self, condition: bool) {
    if condition {
      self.vm.pc = self.vm.pc.wrapping_add(2);
    }
  }

  /// Memory range `[i, i + len)`, or an error if any of it is outside memory
  fn span(&self, len: usize) -> Result<Range<usize>, Error> {
    let start = self.vm.index as usize;
    if len == 0 {
      return Ok(start..start);
    }
    if start + len > MEMORY_SIZE {
      return Err(Error::AddressOutOfBounds {
        address: start.max(MEMORY_SIZE),
        pc: self.pc,
      });
    }
    Ok(start..start + len)
  }

  fn key(&self, x: Reg) -> Result<bool, Error> {
    let key = self.v(x);
    self
      .vm
      .keypad
      .get(key as usize)
      .copied()
      .ok_or(Error::InvalidKey { key, pc: self.pc })
  }

  fn run(&mut self, instruction: Instruction) -> Result<(), Error> {
    use Instruction::*;
    match instruction {
      ClearScreen => clear_screen(self),
      Return => ret(self),
      Jump { addr } => jump(self, addr),
      Call { addr } => call(self, addr),
      SkipIfEqualImmediate { x, nn } => skip_if_equal_immediate(self, x, nn),
      SkipIfNotEqualImmediate { x, nn } => skip_if_not_equal_immediate(self, x, nn),
      SkipIfEqual { x, y } => skip_if_equal(self, x, y),
      LoadImmediate { x, nn } => load_immediate(self, x, nn),
      AddImmediate { x, nn } => add_immediate(self, x, nn),
      Move { x, y } => alu(self, x, y, |_, vy| vy),
      Or { x, y } => alu(self, x, y, |vx, vy| vx | vy),
      And { x, y } => alu(self, x, y, |vx, vy| vx & vy),
      Xor { x, y } => alu(self, x, y, |vx, vy| vx ^ vy),
      Add { x, y } => add(self, x, y),
      Sub { x, y } => sub(self, x, y),
      ShiftRight { x } => shift_right(self, x),
      SubReverse { x, y } => sub_reverse(self, x, y),
      ShiftLeft { x } => shift_left(self, x),
      SkipIfNotEqual { x, y } => skip_if_not_equal(self, x, y),
      LoadIndex { addr } => load_index(self, addr),
      JumpOffset { addr } => jump_offset(self, addr),
      Random { x, nn } => random(self, x, nn),
      Draw { x, y, n } => draw(self, x, y, n),
      SkipIfKey { x } => skip_if_key(self, x),
      SkipIfNotKey { x } => skip_if_not_key(self, x),
      LoadDelay { x } => load_delay(self, x),
      WaitKey { x } => wait_key(self, x),
      SetDelay { x } => set_delay(self, x),
      SetSound { x } => set_sound(self, x),
      AddIndex { x } => add_index(self, x),
      LoadFont { x } => load_font(self, x),
      StoreBcd { x } => store_bcd(self, x),
      StoreRegisters { x } => store_registers(self, x),
      LoadRegisters { x } => load_registers(self, x),
    }
  }
}

// display ← all off
fn clear_screen(task: &mut Task<'_>) -> Result<(), Error> {
  task.vm.framebuffer.clear();
  Ok(())
}

// sp ← sp − 1; pc ← stack[sp]
fn ret(task: &mut Task<'_>) -> Result<(), Error> {
  if task.vm.sp == 0 {
    return Err(Error::StackUnderflow { pc: task.pc });
  }
  task.vm.sp -= 1;
  task.vm.pc = task.vm.stack[task.vm.sp as usize];
  Ok(())
}

// pc ← nnn
fn jump(task: &mut Task<'_>, addr: u16) -> Result<(), Error> {
  task.vm.pc = addr;
  Ok(())
}

// stack[sp] ← pc; sp ← sp + 1; pc ← nnn
fn call(task: &mut Task<'_>, addr: u16) -> Result<(), Error> {
  let sp = task.vm.sp as usize;
  if sp >= STACK_DEPTH {
    return Err(Error::StackOverflow { pc: task.pc });
  }
  // pc already points past the call
  task.vm.stack[sp] = task.vm.pc;
  task.vm.sp += 1;
  task.vm.pc = addr;
  Ok(())
}

// if v[x] == nn : skip
fn skip_if_equal_immediate(task: &mut Task<'_>, x: Reg, nn: u8) -> Result<(), Error> {
  task.skip_if(task.v(x) == nn);
  Ok(())
}

// if v[x] != nn : skip
fn skip_if_not_equal_immediate(task: &mut Task<'_>, x: Reg, nn: u8) -> Result<(), Error> {
  task.skip_if(task.v(x) != nn);
  Ok(())
}

// if v[x] == v[y] : skip
fn skip_if_equal(task: &mut Task<'_>, x: Reg, y: Reg) -> Result<(), Error> {
  task.skip_if(task.v(x) == task.v(y));
  Ok(())
}

// v[x] ← nn
fn load_immediate(task: &mut Task<'_>, x: Reg, nn: u8) -> Result<(), Error> {
  task.set_v(x, nn);
  Ok(())
}

// v[x] ← v[x] + nn, flag untouched
fn add_immediate(task: &mut Task<'_>, x: Reg, nn: u8) -> Result<(), Error> {
  task.set_v(x, task.v(x).wrapping_add(nn));
  Ok(())
}

// v[x] ← f(v[x], v[y]) for the flagless 8xy_ group
fn alu<F>(task: &mut Task<'_>, x: Reg, y: Reg, f: F) -> Result<(), Error>
where
  F: FnOnce(u8, u8) -> u8,
{
  task.set_v(x, f(task.v(x), task.v(y)));
  Ok(())
}

// The flag-producing 8xy_ ops write vf first. 8xy4 computes its sum before
// that write; the others read their operands after it, so an operand of F
// sees the new flag.

// vf ← carry; v[x] ← v[x] + v[y]
fn add(task: &mut Task<'_>, x: Reg, y: Reg) -> Result<(), Error> {
  let (sum, carry) = task.v(x).overflowing_add(task.v(y));
  task.set_flag(carry);
  task.set_v(x, sum);
  Ok(())
}

// vf ← v[x] > v[y]; v[x] ← v[x] − v[y]
fn sub(task: &mut Task<'_>, x: Reg, y: Reg) -> Result<(), Error> {
  task.set_flag(task.v(x) > task.v(y));
  task.set_v(x, task.v(x).wrapping_sub(task.v(y)));
  Ok(())
}

// vf ← v[x] & 1; v[x] ← v[x] >> 1
fn shift_right(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.set_flag(task.v(x) & 0x1 != 0);
  task.set_v(x, task.v(x) >> 1);
  Ok(())
}

// vf ← v[y] > v[x]; v[x] ← v[y] − v[x]
fn sub_reverse(task: &mut Task<'_>, x: Reg, y: Reg) -> Result<(), Error> {
  task.set_flag(task.v(y) > task.v(x));
  task.set_v(x, task.v(y).wrapping_sub(task.v(x)));
  Ok(())
}

// vf ← v[x] >> 7; v[x] ← v[x] << 1
fn shift_left(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.set_flag(task.v(x) & 0x80 != 0);
  task.set_v(x, task.v(x) << 1);
  Ok(())
}

// if v[x] != v[y] : skip
fn skip_if_not_equal(task: &mut Task<'_>, x: Reg, y: Reg) -> Result<(), Error> {
  task.skip_if(task.v(x) != task.v(y));
  Ok(())
}

// i ← nnn
fn load_index(task: &mut Task<'_>, addr: u16) -> Result<(), Error> {
  task.vm.index = addr;
  Ok(())
}

// pc ← v[0] + nnn
fn jump_offset(task: &mut Task<'_>, addr: u16) -> Result<(), Error> {
  task.vm.pc = task.v(0) as u16 + addr;
  Ok(())
}

// v[x] ← random & nn
fn random(task: &mut Task<'_>, x: Reg, nn: u8) -> Result<(), Error> {
  let byte = task.vm.rng.next_byte();
  task.set_v(x, byte & nn);
  Ok(())
}

// display ^= m[i..i + n] at (v[x] mod 64, v[y] mod 32); vf ← collision
//
// Only the origin wraps. Sprite pixels that would land past the right or
// bottom edge are clipped.
fn draw(task: &mut Task<'_>, x: Reg, y: Reg, n: u8) -> Result<(), Error> {
  let rows = task.span(n as usize)?;
  let origin_x = task.v(x) as usize % DISPLAY_WIDTH;
  let origin_y = task.v(y) as usize % DISPLAY_HEIGHT;

  task.set_flag(false);
  let mut collided = false;
  for (row, address) in rows.enumerate() {
    let py = origin_y + row;
    if py >= DISPLAY_HEIGHT {
      break;
    }
    let sprite = task.vm.memory[address];
    for col in 0..8 {
      let px = origin_x + col;
      if px >= DISPLAY_WIDTH {
        break;
      }
      if sprite & (0x80 >> col) != 0 {
        collided |= task.vm.framebuffer.flip(px, py);
      }
    }
  }
  if collided {
    task.set_flag(true);
  }
  Ok(())
}

// if key[v[x]] : skip
fn skip_if_key(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  let pressed = task.key(x)?;
  task.skip_if(pressed);
  Ok(())
}

// if !key[v[x]] : skip
fn skip_if_not_key(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  let pressed = task.key(x)?;
  task.skip_if(!pressed);
  Ok(())
}

// v[x] ← dt
fn load_delay(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.set_v(x, task.vm.delay_timer);
  Ok(())
}

// v[x] ← lowest pressed key, otherwise run this instruction again next cycle
fn wait_key(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  match task.vm.keypad.iter().position(|&pressed| pressed) {
    Some(key) => {
      debug!("key {key:X} released wait at {:#05X}", task.pc);
      task.set_v(x, key as u8);
    }
    None => task.vm.pc = task.pc,
  }
  Ok(())
}

// dt ← v[x]
fn set_delay(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.vm.delay_timer = task.v(x);
  Ok(())
}

// st ← v[x]
fn set_sound(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.vm.sound_timer = task.v(x);
  Ok(())
}

// i ← i + v[x]
fn add_index(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.vm.index = task.vm.index.wrapping_add(task.v(x) as u16);
  Ok(())
}

// i ← font + 5 × v[x]
fn load_font(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  task.vm.index = FONT_START + GLYPH_HEIGHT * task.v(x) as u16;
  Ok(())
}

// m[i], m[i + 1], m[i + 2] ← hundreds, tens, ones of v[x]
fn store_bcd(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  let span = task.span(3)?;
  let value = task.v(x);
  task.vm.memory[span].copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
  Ok(())
}

// m[i..=i + x] ← v[0..=x]
fn store_registers(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  let count = x as usize + 1;
  let span = task.span(count)?;
  task.vm.memory[span].copy_from_slice(&task.vm.registers[..count]);
  Ok(())
}

// v[0..=x] ← m[i..=i + x]
fn load_registers(task: &mut Task<'_>, x: Reg) -> Result<(), Error> {
  let count = x as usize + 1;
  let span = task.span(count)?;
  task.vm.registers[..count].copy_from_slice(&task.vm.memory[span]);
  Ok(())
}
