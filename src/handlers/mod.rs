pub mod fallback;
pub mod health;
pub mod liste;
pub mod login;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use liste::liste_handler;
pub use login::login_handler;
