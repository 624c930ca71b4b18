pub mod db;
pub mod token;
