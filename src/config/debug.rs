//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Anything about the selected point: new clicks, repeated clicks, regenerations.
    pub log_selection: bool,

    /// Dump the direction split and heat sample summary on every regeneration.
    pub log_sampling: bool,

    /// Heat grid rebuilds (once per new selection)
    pub log_heat_grid: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,

    log_sampling: false,
    log_heat_grid: false,
    log_performance: false,
};

pub const LOG_PERFORMANCE: bool = DF.log_performance;
