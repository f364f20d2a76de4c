pub mod card_grid;
pub mod helpers;
pub mod login;
pub mod student;
pub mod uploader;
