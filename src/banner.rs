//! Startup banner.

/// Block-letter banner shown by consumers at startup.
#[cfg(not(windows))]
pub const BANNER: &str = r#"
███████╗████████╗██████╗  █████╗ ████████╗ █████╗
██╔════╝╚══██╔══╝██╔══██╗██╔══██╗╚══██╔══╝██╔══██╗
███████╗   ██║   ██████╔╝███████║   ██║   ███████║
╚════██║   ██║   ██╔══██╗██╔══██║   ██║   ██╔══██║
███████║   ██║   ██║  ██║██║  ██║   ██║   ██║  ██║
╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝
"#;

/// Windows consoles may not render the block charmap.
#[cfg(windows)]
pub const BANNER: &str = "STRATA";
