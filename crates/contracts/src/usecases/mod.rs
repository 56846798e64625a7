pub mod u501_reload_catalog;
