#![no_std]

pub mod proxy_flash_mock;
pub mod proxy_flash_pool;
pub mod proxy_flash_receiver;
pub mod proxy_pool_creator;
pub mod proxy_registry;
