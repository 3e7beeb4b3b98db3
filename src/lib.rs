pub mod error;

pub mod service {
    pub mod config_service;
    pub mod dimension;
    pub mod file;
    pub mod process;
    pub mod resolver;

    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_facade;

    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod converter;
}

pub mod utils {
    pub mod convert;
    pub mod utils;
}
