//! Общие типы фронтенда и бэкенда каталога товаров

pub mod domain;
pub mod enums;
pub mod shared;
