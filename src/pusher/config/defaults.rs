pub mod vars {
    pub const AUTH_URL: &str = "API_AUTH_URL";
    pub const SOLUTION_URL: &str = "API_SOLUTION_URL";
    pub const SYSTEM_USER_ID: &str = "API_SYSTEM_USER_ID";
    pub const SYSTEM_USER_PW: &str = "API_SYSTEM_USER_PW";
    pub const SOLUTION_ROOT: &str = "SOLUTION_ROOT";
    pub const CACHE_PATH: &str = "SOLUTION_CACHE";
}
pub mod path {
    pub const SOLUTION_ROOT: &str = "solutions";
    pub const CACHE_PATH: &str = "solution_data.yaml";
}
pub mod http {
    use std::time::Duration;
    pub const TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &str = concat!("solution-pusher/", env!("CARGO_PKG_VERSION"));
    pub const VERBOSE: bool = false;
}
