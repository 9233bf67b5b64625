mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod posting;
pub use posting::Posting;

mod not_found;
pub use not_found::NotFound;
