//! Pages of the portfolio.

mod home;

pub use home::Home;
