pub mod bun_catalog;
