pub mod edit_profile;
pub mod login;
pub mod not_found;
pub mod recover;
pub mod register;
pub mod reset_password;

pub use edit_profile::EditProfilePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use recover::RecoverPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
