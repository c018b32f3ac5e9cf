pub mod env {
    pub const ENV_PREFIX: &str = "GATEKEEP";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const SETTINGS_FILE: &str = "gatekeep";

pub mod hashing {
    pub const DEFAULT_MEMORY_KIB: u32 = 15000;
    pub const DEFAULT_ITERATIONS: u32 = 2;
    pub const DEFAULT_PARALLELISM: u32 = 1;
}
