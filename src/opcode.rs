use std::fmt;

/// Index of one of the sixteen `V` registers.
pub type Reg = u8;

/// A single decoded CHIP-8 instruction.
///
/// Field names follow the usual opcode notation: `x` and `y` select registers
/// from bits 8..12 and 4..8, `nn` is the low byte, `addr` the low 12 bits and
/// `n` the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  /// Clears the framebuffer.
  ///
  /// | Opcode | Semantics/RTL          | Assembly |
  /// |--------|------------------------|----------|
  /// | `00E0` | `display ← all off`    | `CLS`    |
  ClearScreen,

  /// Returns from a subroutine.
  ///
  /// | Opcode | Semantics/RTL                | Assembly |
  /// |--------|------------------------------|----------|
  /// | `00EE` | `sp ← sp − 1; pc ← stack[sp]` | `RET`    |
  Return,

  /// | Opcode | Semantics/RTL | Assembly   |
  /// |--------|---------------|------------|
  /// | `1nnn` | `pc ← nnn`    | `JP nnn`   |
  Jump { addr: u16 },

  /// Calls a subroutine.
  ///
  /// | Opcode | Semantics/RTL                            | Assembly   |
  /// |--------|------------------------------------------|------------|
  /// | `2nnn` | `stack[sp] ← pc; sp ← sp + 1; pc ← nnn`  | `CALL nnn` |
  Call { addr: u16 },

  /// | Opcode | Semantics/RTL                 | Assembly     |
  /// |--------|-------------------------------|--------------|
  /// | `3xnn` | `if v[x] == nn : pc ← pc + 2` | `SE Vx, nn`  |
  SkipIfEqualImmediate { x: Reg, nn: u8 },

  /// | Opcode | Semantics/RTL                 | Assembly     |
  /// |--------|-------------------------------|--------------|
  /// | `4xnn` | `if v[x] != nn : pc ← pc + 2` | `SNE Vx, nn` |
  SkipIfNotEqualImmediate { x: Reg, nn: u8 },

  /// | Opcode | Semantics/RTL                   | Assembly     |
  /// |--------|---------------------------------|--------------|
  /// | `5xy0` | `if v[x] == v[y] : pc ← pc + 2` | `SE Vx, Vy`  |
  SkipIfEqual { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL | Assembly     |
  /// |--------|---------------|--------------|
  /// | `6xnn` | `v[x] ← nn`   | `LD Vx, nn`  |
  LoadImmediate { x: Reg, nn: u8 },

  /// Adds without touching the flag register.
  ///
  /// | Opcode | Semantics/RTL            | Assembly     |
  /// |--------|--------------------------|--------------|
  /// | `7xnn` | `v[x] ← v[x] + nn mod 256` | `ADD Vx, nn` |
  AddImmediate { x: Reg, nn: u8 },

  /// | Opcode | Semantics/RTL | Assembly    |
  /// |--------|---------------|-------------|
  /// | `8xy0` | `v[x] ← v[y]` | `LD Vx, Vy` |
  Move { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL        | Assembly    |
  /// |--------|----------------------|-------------|
  /// | `8xy1` | `v[x] ← v[x] \| v[y]` | `OR Vx, Vy` |
  Or { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL        | Assembly     |
  /// |--------|----------------------|--------------|
  /// | `8xy2` | `v[x] ← v[x] & v[y]` | `AND Vx, Vy` |
  And { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL        | Assembly     |
  /// |--------|----------------------|--------------|
  /// | `8xy3` | `v[x] ← v[x] ^ v[y]` | `XOR Vx, Vy` |
  Xor { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL                                      | Assembly     |
  /// |--------|----------------------------------------------------|--------------|
  /// | `8xy4` | `v[x] ← v[x] + v[y] mod 256; vf ← carry`           | `ADD Vx, Vy` |
  Add { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL                                      | Assembly     |
  /// |--------|----------------------------------------------------|--------------|
  /// | `8xy5` | `vf ← v[x] > v[y]; v[x] ← v[x] − v[y] mod 256`     | `SUB Vx, Vy` |
  Sub { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL                      | Assembly |
  /// |--------|------------------------------------|----------|
  /// | `8xy6` | `vf ← v[x] & 1; v[x] ← v[x] >> 1`  | `SHR Vx` |
  ShiftRight { x: Reg },

  /// | Opcode | Semantics/RTL                                      | Assembly      |
  /// |--------|----------------------------------------------------|---------------|
  /// | `8xy7` | `vf ← v[y] > v[x]; v[x] ← v[y] − v[x] mod 256`     | `SUBN Vx, Vy` |
  SubReverse { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL                       | Assembly |
  /// |--------|-------------------------------------|----------|
  /// | `8xyE` | `vf ← v[x] >> 7; v[x] ← v[x] << 1`  | `SHL Vx` |
  ShiftLeft { x: Reg },

  /// | Opcode | Semantics/RTL                   | Assembly     |
  /// |--------|---------------------------------|--------------|
  /// | `9xy0` | `if v[x] != v[y] : pc ← pc + 2` | `SNE Vx, Vy` |
  SkipIfNotEqual { x: Reg, y: Reg },

  /// | Opcode | Semantics/RTL | Assembly   |
  /// |--------|---------------|------------|
  /// | `Annn` | `i ← nnn`     | `LD I, nnn` |
  LoadIndex { addr: u16 },

  /// | Opcode | Semantics/RTL      | Assembly     |
  /// |--------|--------------------|--------------|
  /// | `Bnnn` | `pc ← v[0] + nnn`  | `JP V0, nnn` |
  JumpOffset { addr: u16 },

  /// | Opcode | Semantics/RTL         | Assembly      |
  /// |--------|-----------------------|---------------|
  /// | `Cxnn` | `v[x] ← random & nn`  | `RND Vx, nn`  |
  Random { x: Reg, nn: u8 },

  /// Draws an `n` row sprite from `m[i..i + n]` at `(v[x], v[y])`.
  ///
  /// | Opcode | Semantics/RTL                          | Assembly        |
  /// |--------|----------------------------------------|-----------------|
  /// | `Dxyn` | `display ^= sprite; vf ← collision`    | `DRW Vx, Vy, n` |
  Draw { x: Reg, y: Reg, n: u8 },

  /// | Opcode | Semantics/RTL                       | Assembly |
  /// |--------|-------------------------------------|----------|
  /// | `Ex9E` | `if key[v[x]] : pc ← pc + 2`        | `SKP Vx` |
  SkipIfKey { x: Reg },

  /// | Opcode | Semantics/RTL                       | Assembly  |
  /// |--------|-------------------------------------|-----------|
  /// | `ExA1` | `if !key[v[x]] : pc ← pc + 2`       | `SKNP Vx` |
  SkipIfNotKey { x: Reg },

  /// | Opcode | Semantics/RTL | Assembly     |
  /// |--------|---------------|--------------|
  /// | `Fx07` | `v[x] ← dt`   | `LD Vx, DT`  |
  LoadDelay { x: Reg },

  /// Waits for a key press by re-executing itself until one is down.
  ///
  /// | Opcode | Semantics/RTL                                   | Assembly    |
  /// |--------|-------------------------------------------------|-------------|
  /// | `Fx0A` | `v[x] ← first pressed key, else pc ← pc − 2`    | `LD Vx, K`  |
  WaitKey { x: Reg },

  /// | Opcode | Semantics/RTL | Assembly    |
  /// |--------|---------------|-------------|
  /// | `Fx15` | `dt ← v[x]`   | `LD DT, Vx` |
  SetDelay { x: Reg },

  /// | Opcode | Semantics/RTL | Assembly    |
  /// |--------|---------------|-------------|
  /// | `Fx18` | `st ← v[x]`   | `LD ST, Vx` |
  SetSound { x: Reg },

  /// | Opcode | Semantics/RTL   | Assembly     |
  /// |--------|-----------------|--------------|
  /// | `Fx1E` | `i ← i + v[x]`  | `ADD I, Vx`  |
  AddIndex { x: Reg },

  /// | Opcode | Semantics/RTL             | Assembly   |
  /// |--------|---------------------------|------------|
  /// | `Fx29` | `i ← 0x050 + 5 × v[x]`    | `LD F, Vx` |
  LoadFont { x: Reg },

  /// | Opcode | Semantics/RTL                                  | Assembly   |
  /// |--------|------------------------------------------------|------------|
  /// | `Fx33` | `m[i], m[i+1], m[i+2] ← decimal digits of v[x]` | `LD B, Vx` |
  StoreBcd { x: Reg },

  /// | Opcode | Semantics/RTL           | Assembly      |
  /// |--------|-------------------------|---------------|
  /// | `Fx55` | `m[i..=i+x] ← v[0..=x]` | `LD [I], Vx`  |
  StoreRegisters { x: Reg },

  /// | Opcode | Semantics/RTL           | Assembly      |
  /// |--------|-------------------------|---------------|
  /// | `Fx65` | `v[0..=x] ← m[i..=i+x]` | `LD Vx, [I]`  |
  LoadRegisters { x: Reg },
}

impl Instruction {
  /// Decodes an instruction word, returning `None` for anything outside the
  /// documented instruction set.
  pub fn decode(word: u16) -> Option<Self> {
    let x = ((word >> 8) & 0xF) as Reg;
    let y = ((word >> 4) & 0xF) as Reg;
    let n = (word & 0xF) as u8;
    let nn = (word & 0xFF) as u8;
    let addr = word & 0x0FFF;

    let instruction = match word >> 12 {
      0x0 => match word {
        0x00E0 => Self::ClearScreen,
        0x00EE => Self::Return,
        _ => return None,
      },
      0x1 => Self::Jump { addr },
      0x2 => Self::Call { addr },
      0x3 => Self::SkipIfEqualImmediate { x, nn },
      0x4 => Self::SkipIfNotEqualImmediate { x, nn },
      0x5 if n == 0 => Self::SkipIfEqual { x, y },
      0x6 => Self::LoadImmediate { x, nn },
      0x7 => Self::AddImmediate { x, nn },
      0x8 => match n {
        0x0 => Self::Move { x, y },
        0x1 => Self::Or { x, y },
        0x2 => Self::And { x, y },
        0x3 => Self::Xor { x, y },
        0x4 => Self::Add { x, y },
        0x5 => Self::Sub { x, y },
        0x6 => Self::ShiftRight { x },
        0x7 => Self::SubReverse { x, y },
        0xE => Self::ShiftLeft { x },
        _ => return None,
      },
      0x9 if n == 0 => Self::SkipIfNotEqual { x, y },
      0xA => Self::LoadIndex { addr },
      0xB => Self::JumpOffset { addr },
      0xC => Self::Random { x, nn },
      0xD => Self::Draw { x, y, n },
      0xE => match nn {
        0x9E => Self::SkipIfKey { x },
        0xA1 => Self::SkipIfNotKey { x },
        _ => return None,
      },
      0xF => match nn {
        0x07 => Self::LoadDelay { x },
        0x0A => Self::WaitKey { x },
        0x15 => Self::SetDelay { x },
        0x18 => Self::SetSound { x },
        0x1E => Self::AddIndex { x },
        0x29 => Self::LoadFont { x },
        0x33 => Self::StoreBcd { x },
        0x55 => Self::StoreRegisters { x },
        0x65 => Self::LoadRegisters { x },
        _ => return None,
      },
      _ => return None,
    };
    Some(instruction)
  }
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::ClearScreen => write!(f, "CLS"),
      Self::Return => write!(f, "RET"),
      Self::Jump { addr } => write!(f, "JP {addr:#05X}"),
      Self::Call { addr } => write!(f, "CALL {addr:#05X}"),
      Self::SkipIfEqualImmediate { x, nn } => write!(f, "SE V{x:X}, {nn:#04X}"),
      Self::SkipIfNotEqualImmediate { x, nn } => write!(f, "SNE V{x:X}, {nn:#04X}"),
      Self::SkipIfEqual { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
      Self::LoadImmediate { x, nn } => write!(f, "LD V{x:X}, {nn:#04X}"),
      Self::AddImmediate { x, nn } => write!(f, "ADD V{x:X}, {nn:#04X}"),
      Self::Move { x, y } => write!(f, "LD V{x:X}, V{y:X}"),
      Self::Or { x, y } => write!(f, "OR V{x:X}, V{y:X}"),
      Self::And { x, y } => write!(f, "AND V{x:X}, V{y:X}"),
      Self::Xor { x, y } => write!(f, "XOR V{x:X}, V{y:X}"),
      Self::Add { x, y } => write!(f, "ADD V{x:X}, V{y:X}"),
      Self::Sub { x, y } => write!(f, "SUB V{x:X}, V{y:X}"),
      Self::ShiftRight { x } => write!(f, "SHR V{x:X}"),
      Self::SubReverse { x, y } => write!(f, "SUBN V{x:X}, V{y:X}"),
      Self::ShiftLeft { x } => write!(f, "SHL V{x:X}"),
      Self::SkipIfNotEqual { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
      Self::LoadIndex { addr } => write!(f, "LD I, {addr:#05X}"),
      Self::JumpOffset { addr } => write!(f, "JP V0, {addr:#05X}"),
      Self::Random { x, nn } => write!(f, "RND V{x:X}, {nn:#04X}"),
      Self::Draw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
      Self::SkipIfKey { x } => write!(f, "SKP V{x:X}"),
      Self::SkipIfNotKey { x } => write!(f, "SKNP V{x:X}"),
      Self::LoadDelay { x } => write!(f, "LD V{x:X}, DT"),
      Self::WaitKey { x } => write!(f, "LD V{x:X}, K"),
      Self::SetDelay { x } => write!(f, "LD DT, V{x:X}"),
      Self::SetSound { x } => write!(f, "LD ST, V{x:X}"),
      Self::AddIndex { x } => write!(f, "ADD I, V{x:X}"),
      Self::LoadFont { x } => write!(f, "LD F, V{x:X}"),
      Self::StoreBcd { x } => write!(f, "LD B, V{x:X}"),
      Self::StoreRegisters { x } => write!(f, "LD [I], V{x:X}"),
      Self::LoadRegisters { x } => write!(f, "LD V{x:X}, [I]"),
    }
  }
}
