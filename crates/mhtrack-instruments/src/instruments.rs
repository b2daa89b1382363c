pub mod gad7;
pub mod phq9;
pub mod wsas;
