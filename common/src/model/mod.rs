pub mod descriptor;
pub mod entity;
pub mod notification;
pub mod request;
pub mod settings;
