use macros::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::DEBUG,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::DEBUG,

        #[error("Termination in process")]
        Terminating => tracing::Level::DEBUG,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::DEBUG,
    }
}
