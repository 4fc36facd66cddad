pub mod answer;
pub mod citations;
pub mod controls;
pub mod exec_console;
pub mod history;
