//! Pages reachable without a session

mod out_home;
mod phone_login;
mod social_login;
mod verify_phone;

pub use out_home::OutHome;
pub use phone_login::PhoneLogin;
pub use social_login::SocialLogin;
pub use verify_phone::VerifyPhone;
