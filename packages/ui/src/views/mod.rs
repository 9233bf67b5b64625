mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod dashboard;
pub use dashboard::DashboardView;

mod posting;
pub use posting::PostingView;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;
