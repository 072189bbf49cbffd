/// Settings for telemetry initialization, resolved by the caller.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}
