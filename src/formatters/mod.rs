//! Console formatter implementations

pub mod multi_line;
pub mod systemd;

pub use multi_line::MultiLineFormatter;
pub use systemd::SystemdFormatter;
