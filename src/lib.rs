//! A CHIP-8 virtual machine
//!
//! <http://devernay.free.fr/hacks/chip8/C8TECH10.HTM>
//!
//! The interpreter core only: load a program image, step it one cycle at a
//! time, and read the framebuffer back out. Windows, sound and key events
//! belong to whatever implements [`platform::Platform`].

pub mod opcode;
pub mod platform;
pub mod region;
pub mod rng;
pub mod vm;

pub use opcode::Instruction;
pub use region::{Chunk, Region};
pub use vm::{Error, Framebuffer, Keypad, Vm};
