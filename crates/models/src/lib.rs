pub mod category;
pub mod db;
pub mod errors;
pub mod question;
