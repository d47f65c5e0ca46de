pub mod health_check;
pub mod some_page;
