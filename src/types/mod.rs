pub mod action;
pub mod actor;
pub mod decision;
pub mod resource;
pub mod response;
