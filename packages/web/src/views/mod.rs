mod account_sign_up;
pub use account_sign_up::AccountSignUp;
