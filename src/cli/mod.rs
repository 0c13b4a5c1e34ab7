pub mod ask;
pub mod doctor;
pub mod history;

pub use ask::ask;
pub use doctor::doctor;
pub use history::history;
