//! Stage-level structured events.
//!
//! With the `tracing` feature every combinator reports its name and the
//! sizes flowing through it on the `pipes` target. Without the feature only
//! the operation name is evaluated; the sizes are never computed.

#[cfg(feature = "tracing")]
macro_rules! stage_trace {
    ($operation:expr, $input_size:expr, $output_size:expr $(,)?) => {
        ::tracing::trace!(
            target: "pipes",
            operation = $operation,
            input_size = $input_size,
            output_size = $output_size,
            "stage complete"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_trace {
    ($operation:expr, $input_size:expr, $output_size:expr $(,)?) => {{
        let _ = $operation;
        let _ = || ($input_size, $output_size);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! stage_debug {
    ($operation:expr, $message:literal $(,)?) => {
        ::tracing::debug!(target: "pipes", operation = $operation, $message)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_debug {
    ($operation:expr, $message:literal $(,)?) => {{
        let _ = $operation;
    }};
}
