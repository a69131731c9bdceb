mod board;
mod dialogue;

pub use board::TerminalBoard;
pub use dialogue::run_dialogue;
