pub mod password;
mod redis_service;

pub use redis_service::RedisService;
