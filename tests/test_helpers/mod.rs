mod loopback_match;

//API exports
pub use logging::*;
pub use loopback_match::*;
pub use scripted_capabilities::*;
