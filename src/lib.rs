/**
 * A trivia quiz for the command line.
 *
 * Questions are loaded from a JSON file, asked in random order without repeats, and
 * scored by exact comparison with the expected answer.
 */
#[macro_use]
pub mod iohelper;
pub mod common;
pub mod loader;
pub mod logging;
pub mod quiz;
pub mod session;
pub mod ui;
