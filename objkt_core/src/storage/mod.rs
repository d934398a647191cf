pub mod backend;
pub mod collection;
pub mod dto;
pub mod history;
