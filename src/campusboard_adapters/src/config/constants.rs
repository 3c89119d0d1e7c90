pub mod env {
    pub const ENV_PREFIX: &str = "CAMPUSBOARD";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE_NAME: &str = "campusboard";

pub mod defaults {
    pub const API_SCHEME: &str = "https";
    pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    pub const TOKEN_NAME: &str = "jwtToken";
    pub const STORE_PATH: &str = ".campusboard/cookies.json";
}
