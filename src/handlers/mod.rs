pub mod admin;
pub mod blogs;
pub mod generate;
pub mod middleware;
pub mod news;
