pub mod app;

pub mod common {
    pub mod command;
    pub mod error;
    pub mod logging;
    pub mod money;
}

pub mod domain {
    pub mod wallet;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod processor;
}
