mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod report_form;
pub use report_form::ReportForm;

mod reports;
pub use reports::Reports;
