/// Exit codes as defined in README.md.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const OPERATIONAL_FAILURE: i32 = 1;
    pub const EXTENSION_DENIED: i32 = 2;
    pub const TRAVERSAL_DETECTED: i32 = 3;
}
