pub mod ekadashi;
pub mod festivals;
pub mod lunar;
pub mod types;

pub use ekadashi::{next_ekadashi, next_five_ekadashis, upcoming_ekadashis};
pub use festivals::{next_five_festivals, upcoming_festivals, FESTIVALS};
pub use lunar::{current_tithi, lunar_phase, tithi_for_phase, SYNODIC_MONTH_DAYS};
pub use types::{CalendarEvent, Paksha, TithiInfo};
