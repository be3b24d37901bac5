//! Handler modules for keyboard input, round recording, the countdown and saved history.

mod history_handler;
mod input_handler;
mod round_handler;
mod timer_handler;

pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
pub use round_handler::RoundHandler;
pub use timer_handler::TimerHandler;
