//! Call-site sugar over the emitters.
//!
//! `info!(logger, a, b)` writes `a` and `b` joined by a space; `infof!(logger, "x={}", x)`
//! formats like `format!`. Both keep the caller's file and line for the header.

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug($crate::fmt::Joined(&[$(&$arg as &dyn ::core::fmt::Display),+]))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info($crate::fmt::Joined(&[$(&$arg as &dyn ::core::fmt::Display),+]))
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warning($crate::fmt::Joined(&[$(&$arg as &dyn ::core::fmt::Display),+]))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error($crate::fmt::Joined(&[$(&$arg as &dyn ::core::fmt::Display),+]))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}
