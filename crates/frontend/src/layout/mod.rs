pub mod navbar;
pub mod paywall;
pub mod protected_shell;

pub use protected_shell::ProtectedShell;
