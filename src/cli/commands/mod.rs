pub mod check;
pub mod estimate;
pub mod helper;
pub mod init;
pub mod inspect;
pub mod list;
pub mod translate;
pub mod validate;
