pub mod render;
pub mod repl;

pub use render::{HELP, render_history, render_screen};
pub use repl::{Command, Flow, Repl};
