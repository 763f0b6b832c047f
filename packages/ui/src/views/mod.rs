mod dashboard;
pub use dashboard::DashboardView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod report_form;
pub use report_form::ReportFormView;

mod signup;
pub use signup::SignupView;
