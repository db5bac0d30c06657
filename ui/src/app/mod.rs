mod registration_page;

pub use registration_page::RegistrationPage;
