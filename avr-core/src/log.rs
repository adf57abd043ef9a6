//! Logging über die serielle Schnittstelle
//!
//! Logs landen als Klartext auf derselben Schnittstelle wie die Nutzdaten.
//! Schreibfehler beim Loggen werden ignoriert.
//!
//! Aufrufer brauchen `ufmt` als Dependency (die Makros expandieren zu `ufmt::uwrite!`).

/// Info-Log: `[INFO] <text>\r\n`
#[macro_export]
macro_rules! info {
    ($writer:expr, $($arg:tt)+) => {{
        let _ = ufmt::uwrite!($writer, "[INFO] ");
        let _ = ufmt::uwrite!($writer, $($arg)+);
        let _ = ufmt::uwrite!($writer, "\r\n");
    }};
}

/// Error-Log: `[ERROR] <text>\r\n`
#[macro_export]
macro_rules! error {
    ($writer:expr, $($arg:tt)+) => {{
        let _ = ufmt::uwrite!($writer, "[ERROR] ");
        let _ = ufmt::uwrite!($writer, $($arg)+);
        let _ = ufmt::uwrite!($writer, "\r\n");
    }};
}
