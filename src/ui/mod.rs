pub mod clock;
pub mod forecast;

pub use clock::{clock_line, format_clock};
pub use forecast::{forecast_line, render_forecast_block};

pub const FAREWELL: &str = "[INFO] Exiting...";
